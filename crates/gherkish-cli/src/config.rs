//! CLI configuration parsed from environment variables.
//!
//! Every setting can be supplied through an environment variable prefixed
//! with `GHERKISH_` and overridden by a command-line flag.

use std::env;
use std::str::FromStr;

use gherkish_fmt::{DEFAULT_COMMENT_INDENT, FormatOptions};

use crate::error::CliError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so diagnostics stay quiet unless asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes every dispatched event.
    Trace,
    /// Debug-level information for development.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages for potentially problematic situations.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub const fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Colour only when writing to a terminal.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

impl FromStr for ColorChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown colour mode '{s}', expected one of: auto, always, never"
            ))),
        }
    }
}

impl ColorChoice {
    /// Decide whether to colour output written to a terminal or not.
    #[must_use]
    pub const fn resolve(self, terminal: bool) -> bool {
        match self {
            Self::Auto => terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Flag values that take precedence over the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--log-level`.
    pub log_level: Option<LogLevel>,
    /// `--center-steps[=BOOL]`.
    pub center_steps: Option<bool>,
    /// `--comment-indent N`.
    pub comment_min_indent: Option<usize>,
    /// `--no-align-comments`.
    pub align_comments: Option<bool>,
    /// `--color` / `--no-color`.
    pub color: Option<ColorChoice>,
}

/// Configuration for the `gherkish` binary.
///
/// # Environment Variables
///
/// - `GHERKISH_LOG_LEVEL`: trace, debug, info, warn or error
/// - `GHERKISH_CENTER_STEPS`: right-align step keywords
/// - `GHERKISH_COMMENT_INDENT`: minimum column for trailing comments
/// - `GHERKISH_ALIGN_COMMENTS`: align runs of trailing comments
/// - `GHERKISH_COLOR`: auto, always or never
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level for the stderr subscriber.
    pub log_level: LogLevel,
    /// Right-align step keywords.
    pub center_steps: bool,
    /// Minimum column for aligned trailing comments.
    pub comment_min_indent: usize,
    /// Align runs of trailing comments.
    pub align_comments: bool,
    /// When to emit ANSI styling.
    pub color: ColorChoice,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            center_steps: false,
            comment_min_indent: DEFAULT_COMMENT_INDENT,
            align_comments: true,
            color: ColorChoice::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key).map_or(Ok(default), |value| {
                parse_env_bool(&value).ok_or_else(|| {
                    CliError::InvalidConfig(format!(
                        "invalid boolean '{value}' for {key}, expected true or false"
                    ))
                })
            })
        };

        let log_level = match lookup("GHERKISH_LOG_LEVEL") {
            Some(value) => value.parse()?,
            None => defaults.log_level,
        };
        let comment_min_indent = match lookup("GHERKISH_COMMENT_INDENT") {
            Some(value) => value.trim().parse().map_err(|_| {
                CliError::InvalidConfig(format!(
                    "invalid comment indent '{value}', expected a non-negative integer"
                ))
            })?,
            None => defaults.comment_min_indent,
        };
        let color = match lookup("GHERKISH_COLOR") {
            Some(value) => value.trim().parse()?,
            None => defaults.color,
        };

        Ok(Self {
            log_level,
            center_steps: flag("GHERKISH_CENTER_STEPS", defaults.center_steps)?,
            comment_min_indent,
            align_comments: flag("GHERKISH_ALIGN_COMMENTS", defaults.align_comments)?,
            color,
        })
    }

    /// Apply command-line overrides on top of the environment.
    #[must_use]
    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(center_steps) = overrides.center_steps {
            self.center_steps = center_steps;
        }
        if let Some(indent) = overrides.comment_min_indent {
            self.comment_min_indent = indent;
        }
        if let Some(align) = overrides.align_comments {
            self.align_comments = align;
        }
        if let Some(color) = overrides.color {
            self.color = color;
        }
        self
    }

    /// Printer options for output that is, or is not, a terminal.
    #[must_use]
    pub fn format_options(&self, terminal: bool) -> FormatOptions {
        FormatOptions::default()
            .with_center_steps(self.center_steps)
            .with_color(self.color.resolve(terminal))
            .with_align_comments(self.align_comments)
            .with_comment_min_indent(self.comment_min_indent)
    }
}
