//! Error types for the command line driver.

use thiserror::Error;

/// Errors raised while configuring or wiring up the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a document failed.
    #[error("failed to {action} {target}")]
    Io {
        /// `read` or `write`.
        action: &'static str,
        /// Path or stream name.
        target: String,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub(crate) fn read(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            action: "read",
            target: target.into(),
            source,
        }
    }

    pub(crate) fn write(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            action: "write",
            target: target.into(),
            source,
        }
    }
}
