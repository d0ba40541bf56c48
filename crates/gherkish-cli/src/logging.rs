//! Structured logging with environment variable configuration.
//!
//! Logs are written to stderr so formatted output on stdout stays clean.
//! Records emitted through the `log` facade by the libraries are bridged
//! into the same subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `GHERKISH_LOG_LEVEL`
/// 3. Default configuration value
///
/// If a global subscriber is already set, this function silently ignores
/// the error.
pub fn init_logging(config: &CliConfig) {
    let filter = filter_from_config(config);

    // The first subscriber wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn init_logging_is_idempotent() {
        let config = CliConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn filter_uses_config_log_level() {
        let config = CliConfig {
            log_level: LogLevel::Debug,
            ..CliConfig::default()
        };
        assert_eq!(filter_from_config(&config).to_string(), "debug");
    }
}
