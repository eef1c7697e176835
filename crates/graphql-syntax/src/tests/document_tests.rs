//! Tests for document-level parsing: definition dispatch, the
//! one-or-more-definitions rule, and trailing-input handling.

use crate::ast;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::SyntaxErrorKind;

/// Verifies that an empty document is a syntax error at position 0.
///
/// A document requires at least one definition; parsing `""` fails rather
/// than producing an empty definition list.
#[test]
fn empty_input_is_error_at_position_zero() {
    let error = parse_err("");
    assert_eq!(error.start().byte_offset(), 0);
    assert_eq!(error.start().line(), 0);
    assert_eq!(error.start().col(), 0);
    assert_eq!(
        error.kind(),
        &SyntaxErrorKind::Unexpected {
            got: "<EOF>".to_string()
        }
    );
}

/// Whitespace-only input also has no definitions.
#[test]
fn whitespace_only_input_is_error() {
    assert!(crate::parse("  \n\t ").is_err());
    assert!(crate::parse("# only a comment\n").is_err());
}

/// Verifies that an unrecognized leading name raises an unexpected-token
/// error at its position.
#[test]
fn unknown_leading_name_is_unexpected_token() {
    let error = parse_err("notAnOperation Foo { field }");
    assert_eq!(error.start().byte_offset(), 0);
    assert_eq!(
        error.kind(),
        &SyntaxErrorKind::Unexpected {
            got: "notAnOperation".to_string()
        }
    );
}

/// A leading punctuator that starts no definition is rejected the same way.
#[test]
fn unknown_leading_punctuator_is_unexpected_token() {
    let error = parse_err("!{ field }");
    assert_eq!(error.start().byte_offset(), 0);
}

/// Verifies that multiple definitions of mixed kinds parse in order.
#[test]
fn multiple_definitions_parse_in_order() {
    let document = parse_ok(
        "query A { f }\n\
         fragment F on T { f }\n\
         type X { f: Int }",
    );
    assert_eq!(document.definitions.len(), 3);
    assert!(matches!(
        document.definitions[0],
        ast::Definition::Operation(_)
    ));
    assert!(matches!(
        document.definitions[1],
        ast::Definition::Fragment(_)
    ));
    assert!(matches!(document.definitions[2], ast::Definition::Type(_)));
}

/// Garbage after a complete definition fails rather than being ignored.
#[test]
fn trailing_garbage_is_error() {
    assert!(crate::parse("{ f } %").is_err());
}

/// A successful parse always yields at least one definition.
#[test]
fn successful_parse_has_nonempty_definitions() {
    for source in ["{ f }", "type T", "scalar S", "{ a b c }"] {
        let document = parse_ok(source);
        assert!(!document.definitions.is_empty(), "source: {source}");
    }
}
