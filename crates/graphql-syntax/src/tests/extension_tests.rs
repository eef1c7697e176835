//! Tests for type-system extensions: `extend <kind> ...` forms and the
//! at-least-one-clause rule.

use crate::ast;
use crate::tests::utils::parse_ok;

/// Extracts the first definition as a type extension.
fn extract_type_extension(source: &str) -> ast::TypeExtension<'_> {
    let document = parse_ok(source);
    match document.definitions.into_iter().next() {
        Some(ast::Definition::TypeExtension(extension)) => extension,
        other => panic!("expected type extension, got: {other:?}"),
    }
}

/// Verifies `extend schema` with directives and operation types.
#[test]
fn schema_extension() {
    let document = parse_ok("extend schema @core { subscription: Sub }");
    match &document.definitions[0] {
        ast::Definition::SchemaExtension(extension) => {
            assert_eq!(extension.directives.len(), 1);
            assert_eq!(extension.operation_types.len(), 1);
            assert_eq!(
                extension.operation_types[0].operation,
                ast::OperationKind::Subscription
            );
        }
        other => panic!("expected schema extension, got: {other:?}"),
    }

    // Directives alone are a sufficient extending clause.
    assert!(crate::parse("extend schema @core").is_ok());
}

/// Verifies object type extensions with each clause combination.
#[test]
fn object_type_extension() {
    match extract_type_extension("extend type User implements Tagged @hot { age: Int }") {
        ast::TypeExtension::Object(extension) => {
            assert_eq!(extension.name.value, "User");
            assert_eq!(extension.interfaces.len(), 1);
            assert_eq!(extension.directives.len(), 1);
            assert_eq!(extension.fields.len(), 1);
        }
        other => panic!("expected object extension, got: {other:?}"),
    }

    assert!(matches!(
        extract_type_extension("extend type User implements Tagged"),
        ast::TypeExtension::Object(_)
    ));
    assert!(matches!(
        extract_type_extension("extend type User @hot"),
        ast::TypeExtension::Object(_)
    ));
}

/// Verifies scalar, interface, union, enum, and input extensions.
#[test]
fn remaining_extension_kinds() {
    assert!(matches!(
        extract_type_extension("extend scalar Date @tz"),
        ast::TypeExtension::Scalar(_)
    ));
    assert!(matches!(
        extract_type_extension("extend interface Node { rev: Int }"),
        ast::TypeExtension::Interface(_)
    ));
    match extract_type_extension("extend union Pick = C | D") {
        ast::TypeExtension::Union(extension) => assert_eq!(extension.types.len(), 2),
        other => panic!("expected union extension, got: {other:?}"),
    }
    match extract_type_extension("extend enum Color { BLUE }") {
        ast::TypeExtension::Enum(extension) => assert_eq!(extension.values.len(), 1),
        other => panic!("expected enum extension, got: {other:?}"),
    }
    assert!(matches!(
        extract_type_extension("extend input Point { z: Float }"),
        ast::TypeExtension::InputObject(_)
    ));
}

/// Verifies that an extension with no extending clause is rejected: there
/// is nothing being extended.
#[test]
fn extension_without_clause_is_error() {
    for source in [
        "extend schema",
        "extend scalar Date",
        "extend type User",
        "extend interface Node",
        "extend union Pick",
        "extend enum Color",
        "extend input Point",
    ] {
        assert!(crate::parse(source).is_err(), "source: {source}");
    }
}

/// `extend` followed by a non-extendable keyword fails at that keyword.
#[test]
fn extend_unknown_kind_is_error() {
    assert!(crate::parse("extend fragment F on T { f }").is_err());
    assert!(crate::parse("extend directive @d on FIELD").is_err());
}
