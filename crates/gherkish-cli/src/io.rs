//! Input and output wiring for files and standard streams.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use crate::error::CliError;

/// Read a whole document from `path`, or from standard input.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file or stream cannot be read as UTF-8.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    if let Some(path) = path {
        return fs::read_to_string(path)
            .map_err(|err| CliError::read(display_name(Some(path)), err));
    }
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .map_err(|err| CliError::read("standard input", err))?;
    Ok(source)
}

/// Write `text` to `path`, or to standard output.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file or stream cannot be written.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<(), CliError> {
    if let Some(path) = path {
        return fs::write(path, text)
            .map_err(|err| CliError::write(display_name(Some(path)), err));
    }
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|err| CliError::write("standard output", err))
}

/// Whether output for `path` lands on an interactive terminal.
#[must_use]
pub fn is_terminal(path: Option<&Path>) -> bool {
    path.is_none() && io::stdout().is_terminal()
}

/// Human-readable name of an input for reports.
#[must_use]
pub fn display_name(path: Option<&Path>) -> String {
    path.map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string())
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests need a scratch directory")]
mod tests {
    use super::*;

    #[test]
    fn files_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.feature");
        write_output(Some(&path), "Feature: F\n").expect("write");
        assert_eq!(read_input(Some(&path)).expect("read"), "Feature: F\n");
    }

    #[test]
    fn missing_files_name_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.feature");
        match read_input(Some(&path)) {
            Err(CliError::Io { action, target, source }) => {
                assert_eq!(action, "read");
                assert!(target.ends_with("absent.feature"), "{target}");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn unwritable_paths_are_write_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("out.feature");
        let err = write_output(Some(&path), "Feature: F\n").err();
        assert!(matches!(err, Some(CliError::Io { action: "write", .. })), "{err:?}");
    }

    #[test]
    fn files_are_never_terminals() {
        assert!(!is_terminal(Some(Path::new("out.feature"))));
    }

    #[test]
    fn stdin_has_a_display_name() {
        assert_eq!(display_name(None), "<stdin>");
        assert_eq!(display_name(Some(Path::new("a.feature"))), "a.feature");
    }
}
