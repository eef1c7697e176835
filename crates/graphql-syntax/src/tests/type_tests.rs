//! Tests for type references and the standalone `parse_type` entry point.

use crate::ast;
use crate::parse_type;

/// Verifies `parse_type("[MyType!]")`: a list of non-null named types.
#[test]
fn list_of_non_null() {
    let ty = parse_type("[MyType!]").unwrap();
    match ty {
        ast::Type::List(list) => match &list.ty {
            ast::Type::NonNull(non_null) => match &non_null.ty {
                ast::Type::Named(named) => assert_eq!(named.name.value, "MyType"),
                other => panic!("expected named type, got: {other:?}"),
            },
            other => panic!("expected non-null type, got: {other:?}"),
        },
        other => panic!("expected list type, got: {other:?}"),
    }
}

/// A bare name is a named type.
#[test]
fn named_type() {
    assert!(matches!(
        parse_type("String").unwrap(),
        ast::Type::Named(named) if named.name.value == "String"
    ));
}

/// `Type!` wraps once; the inner type of a non-null is never itself
/// non-null, at any nesting depth.
#[test]
fn non_null_never_nests_directly() {
    fn check(ty: &ast::Type<'_>) {
        match ty {
            ast::Type::Named(_) => {}
            ast::Type::List(list) => check(&list.ty),
            ast::Type::NonNull(non_null) => {
                assert!(!matches!(non_null.ty, ast::Type::NonNull(_)));
                check(&non_null.ty);
            }
        }
    }

    for source in ["Int!", "[Int!]!", "[[Int!]!]!", "[[ID]]"] {
        check(&parse_type(source).unwrap());
    }
}

/// A doubled `!` is a syntax error rather than a doubly wrapped type.
#[test]
fn double_bang_is_error() {
    assert!(parse_type("Int!!").is_err());
}

/// Nested list types parse inside-out.
#[test]
fn nested_lists() {
    let ty = parse_type("[[Int]]").unwrap();
    match ty {
        ast::Type::List(outer) => assert!(matches!(outer.ty, ast::Type::List(_))),
        other => panic!("expected list type, got: {other:?}"),
    }
}

/// An unclosed list type fails.
#[test]
fn unclosed_list_is_error() {
    let error = parse_type("[Int").unwrap_err();
    assert_eq!(error.start().byte_offset(), 4);
}

/// `parse_type` requires the reference to span the whole input.
#[test]
fn trailing_input_is_error() {
    assert!(parse_type("Int Int").is_err());
}

/// Keywords are valid type names.
#[test]
fn keyword_type_names() {
    assert!(matches!(
        parse_type("on").unwrap(),
        ast::Type::Named(named) if named.name.value == "on"
    ));
}
