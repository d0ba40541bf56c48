//! `gherkish` binary: format, inspect and check Gherkin feature files.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use gherkish_cli::cli::Cli;
use gherkish_cli::commands::run;
use gherkish_cli::config::CliConfig;
use gherkish_cli::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config.apply_overrides(cli.overrides()),
        Err(e) => {
            report(&eyre::Report::from(e));
            return ExitCode::from(2);
        }
    };
    init_logging(&config);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting gherkish");

    match run(&cli.command, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(error: &eyre::Report) {
    // Nothing useful remains to be done if stderr is gone.
    let _ = writeln!(std::io::stderr(), "error: {error:#}");
}
