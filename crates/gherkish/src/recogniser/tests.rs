//! Unit tests for the recogniser state machine.

use super::recognise;
use crate::event::{Event, EventKind};
use crate::span::Span;
use rstest::rstest;

#[expect(clippy::expect_used, reason = "test helper with descriptive failures")]
fn events(source: &str) -> Vec<Event> {
    recognise(source).expect("source should be recognised")
}

fn names(source: &str) -> Vec<&'static str> {
    events(source).iter().map(|event| event.kind.name()).collect()
}

fn rendered(source: &str) -> Vec<String> {
    events(source)
        .iter()
        .map(|event| event.kind.to_string())
        .collect()
}

#[test]
fn empty_document_has_no_events() {
    assert!(events("").is_empty());
}

#[test]
fn trivia_only_document_yields_side_channel_events() {
    assert_eq!(names("\n# note\n"), vec!["BlankLine", "Comment"]);
}

#[test]
fn minimal_feature() {
    assert_eq!(
        rendered("Feature: Hello World"),
        vec!["Feature \"Hello World\"", "FeatureEnd"]
    );
}

#[test]
fn feature_spans_cover_tags_and_header() {
    let source = "@wip\nFeature: F\n";
    let all = events(source);
    let feature = all.first().map(|event| event.span);
    assert_eq!(feature, Some(Span::new(0, 15)));
    let end = all.last().map(|event| event.span);
    assert_eq!(end, Some(Span::point(15)));
}

#[test]
fn tags_and_steps() {
    let source = "\
@wip
Feature: Hi
  @a @b
  Scenario: S
    Given g
      And h
     When w
     Then t
";
    assert_eq!(
        rendered(source),
        vec![
            "Feature \"Hi\" @wip",
            "Scenario \"S\" @a @b",
            "Step Given \"g\"",
            "StepEnd",
            "Step And \"h\"",
            "StepEnd",
            "Step When \"w\"",
            "StepEnd",
            "Step Then \"t\"",
            "StepEnd",
            "ScenarioEnd",
            "FeatureEnd",
        ]
    );
}

#[test]
fn doc_string_strips_fence_indent() {
    let source = "\
Feature: K
  Scenario: S
    When keys:
     \"\"\"
       2
     + 2
       =
     \"\"\"
";
    assert_eq!(
        rendered(source),
        vec![
            "Feature \"K\"",
            "Scenario \"S\"",
            "Step When \"keys:\"",
            "DocString indent=5",
            "DocStringLine \"  2\"",
            "DocStringLine \"+ 2\"",
            "DocStringLine \"  =\"",
            "DocStringEnd",
            "StepEnd",
            "ScenarioEnd",
            "FeatureEnd",
        ]
    );
}

#[test]
fn doc_string_keeps_blank_and_shallow_lines() {
    let source = "\
Feature: K
  Scenario: S
    Given text
      \"\"\"

    shallow
      \"\"\"   # closing
";
    assert_eq!(
        rendered(source),
        vec![
            "Feature \"K\"",
            "Scenario \"S\"",
            "Step Given \"text\"",
            "DocString indent=6",
            "DocStringLine \"\"",
            "DocStringLine \"shallow\"",
            "Comment \" closing\" inline",
            "DocStringEnd",
            "StepEnd",
            "ScenarioEnd",
            "FeatureEnd",
        ]
    );
}

#[test]
fn outline_with_examples_table() {
    let source = "\
Feature: Calc
  Scenario Outline: add
    Given <a> <op> <b>
    Then <r>

    Examples:
      | a | op | b | r |
      | 2 | +  | 2 | 4 |
";
    assert_eq!(
        rendered(source),
        vec![
            "Feature \"Calc\"",
            "Outline \"add\"",
            "Step Given \"<a> <op> <b>\"",
            "StepEnd",
            "Step Then \"<r>\"",
            "StepEnd",
            "BlankLine",
            "OutlineExamples",
            "Table",
            "TableRow",
            "TableCell \"a\"",
            "TableCell \"op\"",
            "TableCell \"b\"",
            "TableCell \"r\"",
            "TableRowEnd",
            "TableRow",
            "TableCell \"2\"",
            "TableCell \"+\"",
            "TableCell \"2\"",
            "TableCell \"4\"",
            "TableRowEnd",
            "TableEnd",
            "OutlineExamplesEnd",
            "OutlineEnd",
            "FeatureEnd",
        ]
    );
}

#[test]
fn examples_without_table() {
    let source = "Feature: F\n  Scenario Outline: O\n    Given x\n    Examples:\n";
    assert_eq!(
        names(source),
        vec![
            "Feature",
            "Outline",
            "Step",
            "StepEnd",
            "OutlineExamples",
            "OutlineExamplesEnd",
            "OutlineEnd",
            "FeatureEnd",
        ]
    );
}

#[test]
fn header_comment_is_inline_and_quoted_hash_is_title() {
    let source = "Feature: Hello \"#World\"   # header comment";
    assert_eq!(
        rendered(source),
        vec![
            "Feature \"Hello \\\"#World\\\"\"",
            "Comment \" header comment\" inline",
            "FeatureEnd",
        ]
    );
}

#[test]
fn description_keeps_internal_blank_lines() {
    let source = "Feature: D\n\n  line one\n\n  line two\n";
    let all = events(source);
    let description = all.first().and_then(|event| match &event.kind {
        EventKind::Feature { description, .. } => Some(description.clone()),
        _ => None,
    });
    assert_eq!(description.as_deref(), Some("line one\n\nline two"));
    assert_eq!(names(source), vec!["Feature", "BlankLine", "FeatureEnd"]);
}

#[test]
fn description_comments_become_standalone_comments() {
    let source = "Feature: D\n  about # aside\n  # own line\n  more\n";
    assert_eq!(
        rendered(source),
        vec![
            "Feature \"D\" description=\"about\\nmore\"",
            "Comment \" aside\"",
            "Comment \" own line\"",
            "FeatureEnd",
        ]
    );
}

#[test]
fn trivia_follows_the_ends_it_trails() {
    let source = "\
Feature: F

  Scenario: A
    Given x

  # c
  Scenario: B
";
    assert_eq!(
        names(source),
        vec![
            "Feature",
            "BlankLine",
            "Scenario",
            "Step",
            "StepEnd",
            "ScenarioEnd",
            "BlankLine",
            "Comment",
            "Scenario",
            "ScenarioEnd",
            "FeatureEnd",
        ]
    );
}

#[test]
fn tags_survive_blank_and_comment_lines() {
    let source = "Feature: F\n  @a # first\n\n  @b\n  Scenario: S\n";
    assert_eq!(
        rendered(source),
        vec![
            "Feature \"F\"",
            "Comment \" first\"",
            "BlankLine",
            "Scenario \"S\" @a @b",
            "ScenarioEnd",
            "FeatureEnd",
        ]
    );
}

#[test]
fn step_tags_attach_to_the_step() {
    let source = "Feature: F\n  Scenario: S\n    @slow\n    When w\n";
    assert_eq!(
        rendered(source),
        vec![
            "Feature \"F\"",
            "Scenario \"S\"",
            "Step When \"w\" @slow",
            "StepEnd",
            "ScenarioEnd",
            "FeatureEnd",
        ]
    );
}

#[test]
fn table_rows_may_be_separated_by_trivia() {
    let source = "Feature: F\n  Scenario: S\n    Given t\n      | a |\n      # x\n      | b | # y\n";
    assert_eq!(
        rendered(source),
        vec![
            "Feature \"F\"",
            "Scenario \"S\"",
            "Step Given \"t\"",
            "Table",
            "TableRow",
            "TableCell \"a\"",
            "TableRowEnd",
            "Comment \" x\"",
            "TableRow",
            "TableCell \"b\"",
            "Comment \" y\" inline",
            "TableRowEnd",
            "TableEnd",
            "StepEnd",
            "ScenarioEnd",
            "FeatureEnd",
        ]
    );
}

#[test]
fn accepts_every_line_terminator() {
    let source = "Feature: F\r\n  Scenario: S\r    Given x\n";
    assert_eq!(
        names(source),
        vec!["Feature", "Scenario", "Step", "StepEnd", "ScenarioEnd", "FeatureEnd"]
    );
}

#[test]
fn background_precedes_scenarios() {
    let source = "Feature: F\n  Background:\n    Given b\n  Scenario: S\n";
    assert_eq!(
        names(source),
        vec![
            "Feature",
            "Background",
            "Step",
            "StepEnd",
            "BackgroundEnd",
            "Scenario",
            "ScenarioEnd",
            "FeatureEnd",
        ]
    );
}

#[rstest]
#[case::not_a_feature("Scenario: x", "expected `Feature:`", 1, 1)]
#[case::dangling_tags("@tag", "expected `Feature:` after tags", 1, 5)]
#[case::missing_title("Feature:", "expected a Feature title", 1, 9)]
#[case::second_background(
    "Feature: F\n  Background:\n  Background:",
    "only one `Background:` is allowed per Feature",
    3,
    3
)]
#[case::late_background(
    "Feature: F\n  Scenario: S\n  Background:",
    "`Background:` must come before any `Scenario:` or `Scenario Outline:`",
    3,
    3
)]
#[case::examples_in_scenario(
    "Feature: F\n  Scenario: S\n    Given x\n    Examples:",
    "`Examples:` is only allowed in a `Scenario Outline:`",
    4,
    5
)]
#[case::uneven_rows(
    "Feature: F\n  Scenario: S\n    Given x\n      | a |\n      | b | c |",
    "table row has 2 cells but expected 1",
    5,
    7
)]
#[case::unterminated_doc_string(
    "Feature: F\n  Scenario: S\n    Given x\n      \"\"\"\n      body",
    "unterminated doc string; expected closing `\"\"\"`",
    5,
    11
)]
#[case::opening_fence_trailer(
    "Feature: F\n  Scenario: S\n    Given x\n      \"\"\" json",
    "expected end of line after opening `\"\"\"`",
    4,
    11
)]
#[case::unterminated_quote(
    "Feature: F\n  Scenario: S\n    Given \"x",
    "unterminated quoted string",
    3,
    13
)]
#[case::dangling_escape(
    "Feature: F\n  Scenario: S\n    Given x \\",
    "dangling `\\` escape at end of line",
    3,
    13
)]
#[case::missing_step_text("Feature: F\n  Scenario: S\n    Given", "expected step text", 3, 10)]
#[case::reserved_or("Feature: F\n  Scenario: S\n    Or maybe", "expected a step", 3, 5)]
#[case::orphan_step(
    "Feature: F\n  @t\n  Given x",
    "steps must belong to a `Background:`, `Scenario:` or `Scenario Outline:`",
    3,
    3
)]
#[case::orphan_table(
    "Feature: F\n  Scenario: S\n  | a |",
    "a table must follow a step or `Examples:`",
    3,
    3
)]
#[case::second_feature(
    "Feature: F\n  Scenario: S\n    Given x\n  Feature: G",
    "only one `Feature:` is allowed per document",
    4,
    3
)]
#[case::tagged_examples(
    "Feature: F\n  Scenario Outline: O\n    Given <x>\n    @t\n    Examples:",
    "`Examples:` cannot be tagged",
    4,
    5
)]
#[case::steps_after_examples(
    "Feature: F\n  Scenario Outline: O\n    Given <x>\n    Examples:\n      | x |\n    Then y",
    "steps must come before `Examples:`",
    6,
    5
)]
#[case::trailing_tags(
    "Feature: F\n  @t",
    "expected `Background:`, `Scenario:` or `Scenario Outline:` after tags",
    2,
    5
)]
fn reports_first_violation(
    #[case] source: &str,
    #[case] message: &str,
    #[case] line: usize,
    #[case] column: usize,
) {
    let err = recognise(source).err();
    let found = err
        .as_ref()
        .map(|err| (err.message.as_str(), err.line, err.column));
    assert_eq!(found, Some((message, line, column)));
}
