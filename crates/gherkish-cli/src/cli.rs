//! Command line arguments for the `gherkish` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ColorChoice, LogLevel, Overrides};

/// Format and inspect Gherkin feature files.
#[derive(Parser, Debug)]
#[command(name = "gherkish", version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a feature file in canonical layout.
    Fmt(FmtArgs),
    /// Print the recognised event stream.
    Events(EventsArgs),
    /// Print the document object model as JSON.
    Dom(DomArgs),
    /// Report whether each feature file parses.
    Check(CheckArgs),
}

/// Where to read from and write to.
#[derive(Args, Debug, Default)]
pub struct IoArgs {
    /// Input file; standard input when omitted.
    #[arg(short = 'i', long = "in", value_name = "PATH")]
    pub input: Option<PathBuf>,
    /// Output file; standard output when omitted.
    #[arg(short = 'o', long = "out", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for `fmt`.
#[derive(Args, Debug)]
#[expect(clippy::struct_excessive_bools, reason = "each flag maps to one option")]
pub struct FmtArgs {
    /// Input and output paths.
    #[command(flatten)]
    pub io: IoArgs,
    /// Right-align step keywords in a nine-character field.
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub center_steps: Option<bool>,
    /// Always emit ANSI colour.
    #[arg(long, overrides_with = "no_color")]
    pub color: bool,
    /// Never emit ANSI colour.
    #[arg(long, overrides_with = "color")]
    pub no_color: bool,
    /// Minimum column for aligned trailing comments.
    #[arg(long, value_name = "N")]
    pub comment_indent: Option<usize>,
    /// Separate trailing comments by a single space instead of aligning them.
    #[arg(long)]
    pub no_align_comments: bool,
    /// Drop every comment from the output.
    #[arg(long)]
    pub skip_comments: bool,
}

/// Arguments for `events`.
#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Input and output paths.
    #[command(flatten)]
    pub io: IoArgs,
    /// Emit one JSON object per line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `dom`.
#[derive(Args, Debug)]
pub struct DomArgs {
    /// Input and output paths.
    #[command(flatten)]
    pub io: IoArgs,
    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Feature files to check; standard input when none are given.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl FmtArgs {
    fn color_choice(&self) -> Option<ColorChoice> {
        if self.color {
            Some(ColorChoice::Always)
        } else if self.no_color {
            Some(ColorChoice::Never)
        } else {
            None
        }
    }
}

impl Cli {
    /// Flag values that take precedence over environment configuration.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            log_level: self.log_level,
            ..Overrides::default()
        };
        if let Command::Fmt(args) = &self.command {
            overrides.center_steps = args.center_steps;
            overrides.color = args.color_choice();
            overrides.comment_min_indent = args.comment_indent;
            overrides.align_comments = args.no_align_comments.then_some(false);
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("gherkish").chain(args.iter().copied()))
    }

    #[rstest]
    #[case(&["fmt"], None)]
    #[case(&["fmt", "--center-steps"], Some(true))]
    #[case(&["fmt", "--center-steps=false"], Some(false))]
    #[case(&["fmt", "--center-steps", "true"], Some(true))]
    fn center_steps_takes_an_optional_value(
        #[case] args: &[&str],
        #[case] expected: Option<bool>,
    ) {
        let overrides = parse(args).map(|cli| cli.overrides()).ok();
        assert_eq!(overrides.and_then(|o| o.center_steps), expected);
        assert!(parse(args).is_ok());
    }

    #[rstest]
    #[case(&["fmt", "--color"], Some(ColorChoice::Always))]
    #[case(&["fmt", "--no-color"], Some(ColorChoice::Never))]
    #[case(&["fmt", "--color", "--no-color"], Some(ColorChoice::Never))]
    #[case(&["fmt"], None)]
    fn colour_flags_select_a_choice(#[case] args: &[&str], #[case] expected: Option<ColorChoice>) {
        let overrides = parse(args).map(|cli| cli.overrides()).ok();
        assert_eq!(overrides.and_then(|o| o.color), expected);
    }

    #[test]
    fn short_and_long_paths_are_accepted() {
        let cli = parse(&["events", "-i", "in.feature", "--out", "out.txt", "--json"]).ok();
        match cli.map(|cli| cli.command) {
            Some(Command::Events(args)) => {
                assert_eq!(args.io.input, Some(PathBuf::from("in.feature")));
                assert_eq!(args.io.output, Some(PathBuf::from("out.txt")));
                assert!(args.json);
            }
            other => panic!("expected events command, got {other:?}"),
        }
    }

    #[test]
    fn log_level_is_global() {
        let cli = parse(&["check", "a.feature", "--log-level", "debug"]).ok();
        assert_eq!(cli.and_then(|cli| cli.log_level), Some(LogLevel::Debug));
    }

    #[test]
    fn format_flags_only_apply_to_fmt() {
        let overrides = parse(&["dom", "--pretty"]).map(|cli| cli.overrides()).ok();
        assert_eq!(overrides, Some(Overrides::default()));
    }

    #[test]
    fn unknown_log_level_is_a_usage_error() {
        assert!(parse(&["--log-level", "loud", "check"]).is_err());
    }
}
