//! Canonical layout of parsed feature documents.

use gherkish::{Block, Feature, Step, StepKeyword, parse_feature};
use gherkish_fmt::{FormatOptions, format_feature, format_source};
use regex::Regex;
use rstest::{fixture, rstest};

#[expect(clippy::expect_used, reason = "test helper with descriptive failures")]
fn pretty(source: &str, options: &FormatOptions) -> String {
    format_source(source, options).expect("document should format")
}

#[fixture]
fn plain() -> FormatOptions {
    FormatOptions::default()
}

#[rstest]
#[case::tags(
    include_str!("../../gherkish/tests/features/tags.feature"),
    "@wip\nFeature: Hi\n\n  @a @b\n  Scenario: S\n    Given g\n    And h\n    When w\n    Then t\n"
)]
#[case::docstring(
    include_str!("../../gherkish/tests/features/docstring.feature"),
    "Feature: Keys\n\n  Scenario: arithmetic\n    When keys:\n      \"\"\"\n        2\n      + 2\n        =\n      \"\"\"\n    Then the display shows 4\n"
)]
#[case::outline(
    include_str!("../../gherkish/tests/features/outline.feature"),
    "Feature: Calculator\n\n  Scenario Outline: add\n    Given <a> <op> <b>\n    Then the result is <r>\n\n    Examples:\n      | a | op | b | r |\n      | 2 | +  | 2 | 4 |\n      | 3 | +  | 4 | 7 |\n"
)]
#[case::description(
    include_str!("../../gherkish/tests/features/description.feature"),
    "Feature: D\n  line one\n\n  line two\n"
)]
#[case::complete(
    include_str!("../../gherkish/tests/features/complete.feature"),
    include_str!("features/complete.feature")
)]
#[case::escaped_trailing_space(
    "Feature: F\n  Scenario: S\n    Given foo \\ \n",
    "Feature: F\n\n  Scenario: S\n    Given foo \\ \n"
)]
#[case::comment_before_doc_string(
    "Feature: F\n  Scenario: S\n    Given a\n    # note\n    \"\"\"\n    x\n    \"\"\"\n    Then b\n",
    "Feature: F\n\n  Scenario: S\n    Given a\n      # note\n      \"\"\"\n      x\n      \"\"\"\n    Then b\n"
)]
fn prints_canonical_layout(plain: FormatOptions, #[case] source: &str, #[case] expected: &str) {
    assert_eq!(pretty(source, &plain), expected);
}

#[rstest]
fn minimal_feature_is_a_single_line(plain: FormatOptions) {
    assert_eq!(pretty("Feature: Hello World", &plain), "Feature: Hello World\n");
}

#[rstest]
fn numeric_cells_align_right(plain: FormatOptions) {
    let source = "\
Feature: F
  Scenario Outline: O
    Given <n>
    Examples:
      | n | label |
      | 7 | seven |
      | 1200 | many |
      | -3,5 | odd |
";
    let printed = pretty(source, &plain);
    assert!(printed.ends_with(
        "    Examples:\n      | n    | label |\n      |    7 | seven |\n      | 1200 | many  |\n      | -3,5 | odd   |\n"
    ));
}

#[test]
fn centred_steps_right_align_keywords() {
    let options = FormatOptions::default().with_center_steps(true);
    let printed = pretty(include_str!("../../gherkish/tests/features/tags.feature"), &options);
    assert!(printed.ends_with("    Given g\n      And h\n     When w\n     Then t\n"));
}

#[test]
#[expect(clippy::expect_used, reason = "the pattern is a valid literal")]
fn colour_only_adds_escape_sequences() {
    let source = include_str!("../../gherkish/tests/features/complete.feature");
    let coloured = pretty(source, &FormatOptions::default().with_color(true));
    assert!(coloured.contains('\u{1b}'));
    let ansi = Regex::new("\u{1b}\\[[0-9;]*m").expect("ANSI pattern compiles");
    assert_eq!(
        ansi.replace_all(&coloured, ""),
        pretty(source, &FormatOptions::default())
    );
}

#[test]
fn comments_share_a_column_per_run() {
    let source = "\
Feature: F
  Scenario: S
    Given a # one
    When a much longer step # two
    Then c
";
    let options = FormatOptions::default().with_comment_min_indent(10);
    assert!(pretty(source, &options).ends_with(
        "    Given a                 # one\n    When a much longer step # two\n    Then c\n"
    ));
}

#[test]
fn unaligned_comments_follow_a_single_space() {
    let source = "Feature: F # header\n  Scenario: S # block\n";
    let options = FormatOptions::default().with_align_comments(false);
    assert_eq!(
        pretty(source, &options),
        "Feature: F # header\n\n  Scenario: S # block\n"
    );
}

#[rstest]
fn skipping_comments_drops_every_comment(plain: FormatOptions) {
    let source = include_str!("../../gherkish/tests/features/complete.feature");
    let printed = pretty(source, &plain.with_skip_comments(true));
    assert!(printed.lines().all(|line| !line.trim_start().starts_with('#')));
    assert!(!printed.contains("end of file"));
    assert!(!printed.contains("pricing table"));
    assert!(printed.starts_with("@cart @web\nFeature: Shopping cart\n"));
    assert!(printed.ends_with("      |   100 |      5.5 |\n"));
}

#[rstest]
fn invalid_documents_are_not_formatted(plain: FormatOptions) {
    assert!(format_source("Scenario: orphan\n", &plain).is_err());
}

#[rstest]
fn reserved_or_keyword_prints_but_does_not_parse_back(plain: FormatOptions) {
    let feature = Feature::new("F").with_scenario(
        Block::new("S")
            .with_step(Step::new(StepKeyword::Given, "a"))
            .with_step(Step::new(StepKeyword::Or, "b")),
    );
    let printed = format_feature(&feature, &plain);
    assert_eq!(printed, "Feature: F\n\n  Scenario: S\n    Given a\n    Or b\n");
    assert!(parse_feature(&printed).is_err());
}
