//! Command dispatch for the `gherkish` entrypoint.

use std::fmt::Write as _;
use std::path::Path;

use eyre::{Context, Result};
use gherkish::{Event, Nesting, parse_events, parse_feature};
use gherkish_fmt::format_source;
use tracing::{debug, info};

use crate::cli::{CheckArgs, Command, DomArgs, EventsArgs, FmtArgs};
use crate::config::CliConfig;
use crate::io::{display_name, is_terminal, read_input, write_output};

/// Run `command`, returning whether every input was valid.
///
/// # Errors
///
/// Returns an error if an input cannot be read or parsed, or if output
/// cannot be written. `check` reports parse failures instead of returning
/// them.
pub fn run(command: &Command, config: &CliConfig) -> Result<bool> {
    match command {
        Command::Fmt(args) => run_fmt(args, config).map(|()| true),
        Command::Events(args) => run_events(args).map(|()| true),
        Command::Dom(args) => run_dom(args).map(|()| true),
        Command::Check(args) => run_check(args),
    }
}

fn run_fmt(args: &FmtArgs, config: &CliConfig) -> Result<()> {
    let input = args.io.input.as_deref();
    let output = args.io.output.as_deref();
    let source = read_input(input)?;
    let options = config
        .format_options(is_terminal(output))
        .with_skip_comments(args.skip_comments);
    debug!(?options, "formatting {}", display_name(input));
    let formatted = format_source(&source, &options)
        .wrap_err_with(|| format!("failed to format {}", display_name(input)))?;
    write_output(output, &formatted)?;
    Ok(())
}

fn run_events(args: &EventsArgs) -> Result<()> {
    let input = args.io.input.as_deref();
    let source = read_input(input)?;
    let events = parse_events(&source)
        .wrap_err_with(|| format!("failed to parse {}", display_name(input)))?;
    let text = if args.json {
        render_events_json(&events)?
    } else {
        render_events(&events)
    };
    write_output(args.io.output.as_deref(), &text)?;
    Ok(())
}

fn run_dom(args: &DomArgs) -> Result<()> {
    let input = args.io.input.as_deref();
    let source = read_input(input)?;
    let feature = parse_feature(&source)
        .wrap_err_with(|| format!("failed to parse {}", display_name(input)))?;
    let mut json = if args.pretty {
        serde_json::to_string_pretty(&feature)
    } else {
        serde_json::to_string(&feature)
    }
    .wrap_err("failed to serialise the document")?;
    json.push('\n');
    write_output(args.io.output.as_deref(), &json)?;
    Ok(())
}

fn run_check(args: &CheckArgs) -> Result<bool> {
    let paths: Vec<Option<&Path>> = if args.paths.is_empty() {
        vec![None]
    } else {
        args.paths.iter().map(|path| Some(path.as_path())).collect()
    };
    let mut report = String::new();
    let mut valid = true;
    for path in paths {
        let name = display_name(path);
        let outcome = read_input(path)
            .map_err(eyre::Report::from)
            .and_then(|source| parse_feature(&source).map(|_| ()).map_err(eyre::Report::from));
        let written = match outcome {
            Ok(()) => writeln!(report, "{name}: ok"),
            Err(err) => {
                valid = false;
                writeln!(report, "{name}: {err}")
            }
        };
        written.wrap_err("failed to build the report")?;
    }
    info!(valid, "checked {} input(s)", args.paths.len().max(1));
    write_output(None, &report)?;
    Ok(valid)
}

/// Render events one per line, indented two spaces per nesting level.
///
/// # Examples
///
/// ```
/// use gherkish::parse_events;
/// use gherkish_cli::commands::render_events;
///
/// let events = parse_events("Feature: F\n  Scenario: S\n")?;
/// assert_eq!(
///     render_events(&events),
///     "Feature \"F\" @0..10\n  Scenario \"S\" @13..24\n  ScenarioEnd @24..24\nFeatureEnd @24..24\n",
/// );
/// # Ok::<(), gherkish::ParseError>(())
/// ```
#[must_use]
pub fn render_events(events: &[Event]) -> String {
    let mut text = String::new();
    let mut depth = 0usize;
    for event in events {
        let nesting = event.kind.nesting();
        if nesting == Nesting::End {
            depth = depth.saturating_sub(1);
        }
        text.push_str(&"  ".repeat(depth));
        text.push_str(&event.to_string());
        text.push('\n');
        if nesting == Nesting::Begin {
            depth += 1;
        }
    }
    text
}

/// Render events as JSON lines.
///
/// # Errors
///
/// Returns an error if an event cannot be serialised.
pub fn render_events_json(events: &[Event]) -> Result<String> {
    let mut text = String::new();
    for event in events {
        text.push_str(&serde_json::to_string(event).wrap_err("failed to serialise an event")?);
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests parse literal documents")]
mod tests {
    use super::*;

    #[test]
    fn human_events_are_indented_by_depth() {
        let events = parse_events("Feature: F\n  Scenario: S\n    Given x\n").expect("parses");
        let lines: Vec<String> = render_events(&events)
            .lines()
            .map(|line| line.split(" @").next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            lines,
            vec![
                "Feature \"F\"",
                "  Scenario \"S\"",
                "    Step Given \"x\"",
                "    StepEnd",
                "  ScenarioEnd",
                "FeatureEnd",
            ]
        );
    }

    #[test]
    fn json_events_are_one_object_per_line() {
        let events = parse_events("Feature: F\n").expect("parses");
        let text = render_events_json(&events).expect("serialises");
        let values: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid JSON"))
            .collect();
        assert_eq!(values.len(), 2);
        assert_eq!(values.first().and_then(|v| v.get("event")), Some(&serde_json::Value::from("Feature")));
        assert_eq!(values.first().and_then(|v| v.get("title")), Some(&serde_json::Value::from("F")));
    }
}
