//! Tests for error construction, rendering, and lexical-error handling.

use crate::tests::utils::parse_err;
use crate::SyntaxErrorKind;

/// Verifies the one-line rendering of an expectation miss.
#[test]
fn oneline_rendering() {
    let error = parse_err("{ ...MissingOn } fragment MissingOn Type");
    assert_eq!(
        error.to_string(),
        "Syntax error. Got token `Type` instead of `on` at position 1:37"
    );
}

/// Verifies the one-line rendering of an unexpected token.
#[test]
fn oneline_rendering_unexpected() {
    let error = parse_err("notAnOperation Foo { field }");
    assert_eq!(
        error.to_string(),
        "Syntax error. Unexpected token `notAnOperation` at position 1:1"
    );
}

/// Positions in the rendering are 1-based even though the carried
/// positions are 0-based.
#[test]
fn error_positions_are_zero_based_internally() {
    let error = parse_err("{\n  field(:\n}");
    assert_eq!(error.start().line(), 1);
    assert_eq!(error.start().col(), 8);
    assert!(error.to_string().contains("at position 2:9"));
}

/// The detailed rendering points a caret run at the offending token.
#[test]
fn detailed_rendering_has_caret_snippet() {
    let error = parse_err("{ ...MissingOn } fragment MissingOn Type");
    let detailed = error.format_detailed();
    assert!(detailed.contains("--> 1:37"));
    assert!(detailed.contains("{ ...MissingOn } fragment MissingOn Type"));
    assert!(detailed.contains("^^^^"));
}

/// The error owns a copy of the source it was parsing.
#[test]
fn error_carries_source() {
    let error = parse_err("junk!");
    assert_eq!(error.source(), "junk!");
}

/// The error position always lies within the source.
#[test]
fn error_position_within_source() {
    for source in ["", "{", "query", "{ f(x: ) }", "\u{1F389} oops"] {
        let error = parse_err(source);
        assert!(
            error.start().byte_offset() <= source.len(),
            "source: {source:?}"
        );
    }
}

/// Verifies that the first lexical error is fatal and surfaces as an
/// invalid-literal syntax error.
#[test]
fn lexical_errors_are_fatal() {
    let error = parse_err("{ f(x: ?) }");
    assert!(matches!(
        error.kind(),
        SyntaxErrorKind::InvalidLiteral { .. }
    ));

    let unterminated = parse_err("{ f(x: \"oops) }");
    assert!(matches!(
        unterminated.kind(),
        SyntaxErrorKind::InvalidLiteral { .. }
    ));
}

/// A lone or doubled dot is a lexical error, not a spread.
#[test]
fn stray_dots_are_lexical_errors() {
    assert!(crate::parse("{ .f }").is_err());
    assert!(crate::parse("{ ..f }").is_err());
}

/// Numbers may not run straight into names.
#[test]
fn number_into_name_is_lexical_error() {
    assert!(crate::parse("{ f(x: 1x) }").is_err());
}

/// Multi-byte characters in comments and strings do not desynchronize the
/// byte offsets of later errors.
#[test]
fn multibyte_input_keeps_offsets_consistent() {
    // The comment is 14 bytes: '#', ' ', four 3-byte chars.
    let source = "# 日本語文\n{ ";
    let error = parse_err(source);
    assert_eq!(error.start().byte_offset(), source.len());
    assert_eq!(error.start().line(), 1);
    assert_eq!(error.start().col(), 2);
}
