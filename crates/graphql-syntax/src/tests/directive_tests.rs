//! Tests for directive definitions and directive locations.

use crate::ast;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::SyntaxErrorKind;

/// Extracts the first definition as a directive definition.
fn extract_directive_definition(source: &str) -> ast::DirectiveDefinition<'_> {
    let document = parse_ok(source);
    match document.definitions.into_iter().next() {
        Some(ast::Definition::Directive(definition)) => definition,
        other => panic!("expected directive definition, got: {other:?}"),
    }
}

/// Verifies a full directive definition: arguments, `repeatable`, and a
/// pipe-separated location list.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/June2018/#sec-Type-System.Directives>
#[test]
fn directive_definition() {
    let definition = extract_directive_definition(
        "directive @tag(name: String!) repeatable on FIELD | OBJECT | ENUM_VALUE",
    );
    assert_eq!(definition.name.value, "tag");
    assert_eq!(definition.arguments.len(), 1);
    assert!(definition.repeatable);
    assert_eq!(
        definition.locations,
        vec![
            ast::DirectiveLocation::Field,
            ast::DirectiveLocation::Object,
            ast::DirectiveLocation::EnumValue,
        ]
    );
}

/// `repeatable` is optional and defaults to false.
#[test]
fn directive_definition_not_repeatable() {
    let definition = extract_directive_definition("directive @skip on FIELD");
    assert!(!definition.repeatable);
    assert!(definition.arguments.is_empty());
}

/// A leading pipe before the first location is accepted.
#[test]
fn directive_locations_leading_pipe() {
    let definition =
        extract_directive_definition("directive @d on | QUERY | MUTATION | SUBSCRIPTION");
    assert_eq!(definition.locations.len(), 3);
}

/// Executable and type-system locations both belong to the fixed set.
#[test]
fn all_location_groups_accepted() {
    let definition = extract_directive_definition(
        "directive @d on QUERY | FRAGMENT_DEFINITION | FRAGMENT_SPREAD | INLINE_FRAGMENT \
         | VARIABLE_DEFINITION | SCHEMA | SCALAR | FIELD_DEFINITION | ARGUMENT_DEFINITION \
         | INTERFACE | UNION | ENUM | INPUT_OBJECT | INPUT_FIELD_DEFINITION",
    );
    assert_eq!(definition.locations.len(), 14);
}

/// Verifies that a location name outside the fixed set is a syntax error
/// at the location's position, not a silently accepted entry.
#[test]
fn unknown_directive_location_is_error() {
    let error = parse_err("directive @d on FIELD | SIDEWAYS");
    assert_eq!(error.start().byte_offset(), 24);
    assert_eq!(
        error.kind(),
        &SyntaxErrorKind::Unexpected {
            got: "SIDEWAYS".to_string()
        }
    );
}

/// Lowercase location names are outside the set too.
#[test]
fn lowercase_location_is_error() {
    assert!(crate::parse("directive @d on field").is_err());
}

/// A directive definition without `on` fails with that expectation.
#[test]
fn missing_on_is_error() {
    let error = parse_err("directive @d FIELD");
    assert_eq!(
        error.kind(),
        &SyntaxErrorKind::Expected {
            expected: "on".to_string(),
            got: "FIELD".to_string()
        }
    );
}

/// The `@` between `directive` and the name is required.
#[test]
fn missing_at_is_error() {
    let error = parse_err("directive d on FIELD");
    assert_eq!(
        error.kind(),
        &SyntaxErrorKind::Expected {
            expected: "@".to_string(),
            got: "d".to_string()
        }
    );
}

/// Directive definitions take descriptions like any other type-system
/// definition.
#[test]
fn directive_definition_with_description() {
    let definition =
        extract_directive_definition("\"marks a field\" directive @marked on FIELD");
    assert_eq!(definition.description.unwrap().value, "marks a field");
}
