//! Failure reporting through the parser façade.

use gherkish::{Error, Parser, ProcessError, parse_feature, processor_fn};
use rstest::rstest;

#[rstest]
#[case("Feature: F\n  Scenario: S\n    Gvien typo\n", 3, 5, "expected a step")]
#[case("Feature: F\n  Scenario: S\n    Given \"open\n", 3, 16, "unterminated quoted string")]
#[case("@only-tags\n", 2, 1, "expected `Feature:` after tags")]
fn parse_errors_report_line_and_column(
    #[case] source: &str,
    #[case] line: usize,
    #[case] column: usize,
    #[case] message: &str,
) {
    match parse_feature(source) {
        Err(Error::Parse(err)) => {
            assert_eq!((err.line, err.column), (line, column));
            assert_eq!(err.message, message);
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn parse_error_message_includes_excerpt() {
    let err = parse_feature("Feature: F\n  Scenario: S\n    Gvien typo\n").err();
    assert_eq!(
        err.map(|err| err.to_string()),
        Some(
            "parse error at line 3, column 5: expected a step (near `Gvien typo`)".to_string()
        )
    );
}

#[test]
fn failed_parse_delivers_no_events() {
    let mut seen = 0usize;
    let mut counter = processor_fn(|_| {
        seen += 1;
        Ok(())
    });
    {
        let mut parser = Parser::new("Feature: F\n  Given orphan\n  Scenario: S\n    Or x\n");
        parser.register(&mut counter);
        assert!(parser.parse().is_err());
        assert!(matches!(parser.execute(), Err(Error::NotParsed)));
    }
    drop(counter);
    assert_eq!(seen, 0);
}

#[test]
fn processor_failure_is_reported_with_its_cause() {
    let mut failing = processor_fn(|event| {
        if event.kind.name() == "StepEnd" {
            Err(ProcessError::custom("step rejected"))
        } else {
            Ok(())
        }
    });
    let mut parser = Parser::new("Feature: F\n  Scenario: S\n    Given x\n");
    parser.register(&mut failing);
    assert!(parser.parse().is_ok());
    let err = parser.execute().err();
    assert_eq!(
        err.map(|err| err.to_string()),
        Some("event processor failed: step rejected".to_string())
    );
}

#[test]
fn document_without_feature_is_reported() {
    assert!(matches!(parse_feature("# nothing here\n"), Err(Error::MissingFeature)));
}
