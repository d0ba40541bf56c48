//! Printing preserves meaning and is idempotent.

use gherkish::{Block, Feature, StepArgument, parse_feature};
use gherkish_fmt::{FormatOptions, format_feature, format_source};
use rstest::rstest;

const CORPUS: [&str; 9] = [
    include_str!("../../gherkish/tests/features/tags.feature"),
    include_str!("../../gherkish/tests/features/docstring.feature"),
    include_str!("../../gherkish/tests/features/outline.feature"),
    include_str!("../../gherkish/tests/features/description.feature"),
    include_str!("../../gherkish/tests/features/complete.feature"),
    "Feature: Hello World",
    "\
Feature: blanks in doc strings
  Scenario: S
    Given text:
      \"\"\"

        indented

      \"\"\"   # closing
    And rows:
      # header row follows
      | a |   # first
      | 2 |
",
    "Feature: escaped trailing space \\ \n  Scenario: S \\\t\n    Given foo \\ \n    And \"quoted \"   \n",
    "\
Feature: comment before a doc string
  Scenario: S
    Given a
      # note
      \"\"\"
      x
      \"\"\"
    Then b
",
];

#[expect(clippy::expect_used, reason = "test helper with descriptive failures")]
fn parse(source: &str) -> Feature {
    parse_feature(source).expect("document should parse")
}

/// Doc string fences move to the canonical column, so their indent is not
/// compared.
fn without_fence_indent(mut feature: Feature) -> Feature {
    let reset = |block: &mut Block| {
        for step in block.steps_mut() {
            if let StepArgument::DocString(doc) = step.argument() {
                let mut doc = doc.clone();
                doc.set_indent(0);
                step.set_argument(StepArgument::DocString(doc));
            }
        }
    };
    if let Some(mut background) = feature.background().cloned() {
        reset(&mut background);
        feature.set_background(Some(background));
    }
    for scenario in feature.scenarios_mut() {
        reset(scenario.block_mut());
    }
    feature
}

fn options() -> [FormatOptions; 4] {
    let plain = FormatOptions::default();
    [
        plain,
        plain.with_center_steps(true),
        plain.with_align_comments(false),
        plain.with_comment_min_indent(0),
    ]
}

#[rstest]
#[case::tags(0)]
#[case::docstring(1)]
#[case::outline(2)]
#[case::description(3)]
#[case::complete(4)]
#[case::minimal(5)]
#[case::blanks(6)]
#[case::escaped_trailing_space(7)]
#[case::comment_before_doc_string(8)]
fn printed_output_parses_back_to_the_same_tree(#[case] index: usize) {
    let source = CORPUS.get(index).copied().unwrap_or_default();
    let original = parse(source);
    for options in options() {
        let printed = format_feature(&original, &options);
        assert_eq!(
            without_fence_indent(parse(&printed)),
            without_fence_indent(original.clone()),
            "options {options:?}:\n{printed}"
        );
    }
}

#[rstest]
#[case::tags(0)]
#[case::docstring(1)]
#[case::outline(2)]
#[case::description(3)]
#[case::complete(4)]
#[case::minimal(5)]
#[case::blanks(6)]
#[case::escaped_trailing_space(7)]
#[case::comment_before_doc_string(8)]
#[expect(clippy::expect_used, reason = "printed output must format again")]
fn formatting_is_idempotent(#[case] index: usize) {
    let source = CORPUS.get(index).copied().unwrap_or_default();
    for options in options() {
        let once = format_source(source, &options).expect("source formats");
        let twice = format_source(&once, &options).expect("output formats");
        assert_eq!(once, twice, "options {options:?}");
    }
}

#[test]
fn skipping_comments_keeps_the_structure() {
    let source = CORPUS.get(4).copied().unwrap_or_default();
    let original = parse(source);
    let printed = format_feature(&original, &FormatOptions::default().with_skip_comments(true));
    let reparsed = parse(&printed);
    assert!(reparsed.leading_comments().is_empty());
    assert!(reparsed.trailing_comments().is_empty());
    assert_eq!(reparsed.title(), original.title());
    assert_eq!(reparsed.tags(), original.tags());
    let steps = |feature: &Feature| -> Vec<String> {
        feature
            .scenarios()
            .iter()
            .flat_map(|scenario| scenario.steps().iter().map(|step| step.text().to_string()))
            .collect()
    };
    assert_eq!(steps(&reparsed), steps(&original));
}
