//! Tests for selection sets, fields, aliases, and field arguments.

use crate::ast;
use crate::tests::utils::extract_selection_set;
use crate::tests::utils::field_at;
use crate::tests::utils::first_field;
use crate::tests::utils::parse_err;
use crate::SyntaxErrorKind;

/// Verifies that a simple selection set with a single field parses.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/June2018/#sec-Selection-Sets>
#[test]
fn selection_set_simple() {
    let selection_set = extract_selection_set("{ name }");
    assert_eq!(selection_set.selections.len(), 1);
    assert_eq!(first_field(&selection_set).name.value, "name");
}

/// Verifies that comma-separated and whitespace-separated fields are
/// equivalent (commas are ignored tokens).
#[test]
fn selection_set_multiple_fields() {
    let spaced = extract_selection_set("{ name age email }");
    let commas = extract_selection_set("{ name, age, email }");

    assert_eq!(spaced.selections.len(), 3);
    assert_eq!(field_at(&spaced, 0).name.value, "name");
    assert_eq!(field_at(&spaced, 1).name.value, "age");
    assert_eq!(field_at(&spaced, 2).name.value, "email");
    assert_eq!(spaced.selections.len(), commas.selections.len());
}

/// Verifies that nested selection sets parse recursively.
#[test]
fn selection_set_nested() {
    let selection_set = extract_selection_set("{ user { name } }");
    let user = first_field(&selection_set);
    assert_eq!(user.name.value, "user");
    let nested = user.selection_set.as_ref().unwrap();
    assert_eq!(nested.selections.len(), 1);
    assert_eq!(first_field(nested).name.value, "name");
}

/// A leaf field has no nested selection set at all.
#[test]
fn leaf_field_has_no_selection_set() {
    let selection_set = extract_selection_set("{ name }");
    assert!(first_field(&selection_set).selection_set.is_none());
}

/// Verifies that an empty selection set `{ }` is rejected: the set requires
/// at least one selection, so the closing brace arrives where a field name
/// was required.
#[test]
fn empty_selection_set_is_error() {
    let error = parse_err("{ }");
    assert_eq!(
        error.kind(),
        &SyntaxErrorKind::Expected {
            expected: "Name".to_string(),
            got: "}".to_string()
        }
    );
}

/// Verifies that `"{"` alone fails at offset 1 expecting a name and
/// finding end of input.
#[test]
fn lone_open_brace_fails_at_eof() {
    let error = parse_err("{");
    assert_eq!(error.start().byte_offset(), 1);
    assert_eq!(error.start().line(), 0);
    assert_eq!(error.start().col(), 1);
    assert_eq!(
        error.kind(),
        &SyntaxErrorKind::Expected {
            expected: "Name".to_string(),
            got: "<EOF>".to_string()
        }
    );
    assert_eq!(
        error.to_string(),
        "Syntax error. Got token `<EOF>` instead of `Name` at position 1:2"
    );
}

/// Verifies alias parsing: the first name is the alias iff a `:` follows.
#[test]
fn field_alias() {
    let selection_set = extract_selection_set("{ smallPic: profilePic(size: 64) }");
    let field = first_field(&selection_set);
    assert_eq!(field.alias.as_ref().unwrap().value, "smallPic");
    assert_eq!(field.name.value, "profilePic");
    assert_eq!(field.arguments.len(), 1);
}

/// An alias without a following name is an error.
#[test]
fn alias_without_name_is_error() {
    let error = parse_err("{ smallPic: }");
    assert_eq!(
        error.kind(),
        &SyntaxErrorKind::Expected {
            expected: "Name".to_string(),
            got: "}".to_string()
        }
    );
}

/// Verifies argument parsing, including multiple arguments.
#[test]
fn field_arguments() {
    let selection_set = extract_selection_set(r#"{ user(id: 4, name: "Mark") { id } }"#);
    let field = first_field(&selection_set);
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(field.arguments[0].name.value, "id");
    assert!(matches!(
        field.arguments[0].value,
        ast::Value::Int(ast::IntValue { value: 4, .. })
    ));
    assert_eq!(field.arguments[1].name.value, "name");
}

/// An empty argument list `()` is rejected: once opened, the list requires
/// at least one argument.
#[test]
fn empty_argument_list_is_error() {
    assert!(crate::parse("{ user() }").is_err());
}

/// Verifies that non-keywords are accepted as field names, aliases, and
/// argument names: `on`, `fragment`, `query`, `true`, and the rest are
/// ordinary names in these positions.
#[test]
fn keywords_are_valid_names_in_selections() {
    let selection_set = extract_selection_set(
        "{ on fragment query mutation subscription true false null type }",
    );
    assert_eq!(selection_set.selections.len(), 9);
    assert_eq!(field_at(&selection_set, 0).name.value, "on");
    assert_eq!(field_at(&selection_set, 5).name.value, "true");

    let aliased = extract_selection_set("{ query: on(fragment: 1) }");
    let field = first_field(&aliased);
    assert_eq!(field.alias.as_ref().unwrap().value, "query");
    assert_eq!(field.name.value, "on");
    assert_eq!(field.arguments[0].name.value, "fragment");
}

/// Verifies that field directives parse between arguments and the nested
/// selection set.
#[test]
fn field_directives() {
    let selection_set = extract_selection_set("{ name @skip(if: true) @other }");
    let field = first_field(&selection_set);
    assert_eq!(field.directives.len(), 2);
    assert_eq!(field.directives[0].name.value, "skip");
    assert_eq!(field.directives[1].name.value, "other");
    assert!(field.directives[1].arguments.is_empty());
}

/// Deeply nested selection sets beyond the recursion bound fail cleanly
/// instead of overflowing the stack.
#[test]
fn pathological_nesting_is_rejected() {
    let mut source = String::new();
    for _ in 0..200 {
        source.push_str("{ f ");
    }
    assert!(crate::parse(&source).is_err());
}
