//! Tests for the canonical tree-to-mapping projection and the
//! print-then-reparse idempotence it witnesses.

use crate::print;
use crate::tests::utils::parse_ok;
use crate::Mapping;

/// A document exercising every definition kind the parser can produce.
const KITCHEN_SINK: &str = r#"
query Named($x: [Int!] = [1, 2] @onVar) @onQuery {
  a: field(arg: { k: "v", list: [1, 1.5, true, null, RED], s: "line\nbreak" }) @skip(if: $x) {
    ... on Thing {
      id
    }
    ...Frag @dir
    ... {
      shorthand
    }
  }
}

mutation {
  doIt
}

subscription Sub {
  ev
}

fragment Frag on Thing {
  id
}

schema @core {
  query: Query
  mutation: Mut
}

"A point in time"
scalar Date @tag

type User implements Node & Entity @obj {
  "the id"
  id: ID!
  friends(first: Int = 10, after: String): [User!]
}

interface Node {
  id: ID!
}

union Pick @u = | A | B

enum Color @e {
  "warm"
  RED
  GREEN @deprecated
}

input Point {
  x: Float = 0.0
  y: Float
}

directive @tag(name: String!) repeatable on FIELD | OBJECT | ENUM_VALUE

extend schema @more {
  subscription: Sub2
}

extend type User @hot {
  age: Int
}

extend scalar Date @tz

extend interface Node @deep

extend union Pick = C

extend enum Color {
  BLUE
}

extend input Point @ext
"#;

/// Verifies the projected structure of the shorthand query scenario.
#[test]
fn shorthand_query_projection() {
    let document = parse_ok("{ node(id: 4) { id, name } }");
    let mapping = document.to_mapping();

    assert_eq!(mapping.kind(), Some("Document"));
    let definitions = mapping.get("definitions").unwrap().as_list().unwrap();
    assert_eq!(definitions.len(), 1);

    let operation = &definitions[0];
    assert_eq!(operation.kind(), Some("OperationDefinition"));
    assert_eq!(
        operation.get("operation").unwrap().as_str(),
        Some("query")
    );
    assert!(operation.get("name").unwrap().is_null());
    assert_eq!(
        operation
            .get("variable_definitions")
            .unwrap()
            .as_list()
            .unwrap()
            .len(),
        0
    );

    let selections = operation
        .get("selection_set")
        .unwrap()
        .get("selections")
        .unwrap()
        .as_list()
        .unwrap();
    assert_eq!(selections.len(), 1);

    let node = &selections[0];
    assert_eq!(node.kind(), Some("Field"));
    assert!(node.get("alias").unwrap().is_null());
    assert_eq!(
        node.get("name").unwrap().get("value").unwrap().as_str(),
        Some("node")
    );

    let arguments = node.get("arguments").unwrap().as_list().unwrap();
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].kind(), Some("Argument"));
    let argument_value = arguments[0].get("value").unwrap();
    assert_eq!(argument_value.kind(), Some("IntValue"));
    assert_eq!(argument_value.get("value").unwrap().as_i64(), Some(4));

    let nested = node
        .get("selection_set")
        .unwrap()
        .get("selections")
        .unwrap()
        .as_list()
        .unwrap();
    assert_eq!(nested.len(), 2);
}

/// Every projected node carries exactly its grammar-mandated slots, with
/// `kind` first and list slots present even when empty.
#[test]
fn projection_has_fixed_slots() {
    let document = parse_ok("query Q { f }");
    let mapping = document.to_mapping();
    let operation = &mapping.get("definitions").unwrap().as_list().unwrap()[0];

    let keys: Vec<&str> = match operation {
        Mapping::Map(map) => map.keys().map(String::as_str).collect(),
        other => panic!("expected map, got: {other:?}"),
    };
    assert_eq!(
        keys,
        vec![
            "kind",
            "operation",
            "name",
            "variable_definitions",
            "directives",
            "selection_set"
        ]
    );

    let field = &operation
        .get("selection_set")
        .unwrap()
        .get("selections")
        .unwrap()
        .as_list()
        .unwrap()[0];
    assert_eq!(field.get("arguments").unwrap().as_list().unwrap().len(), 0);
    assert_eq!(field.get("directives").unwrap().as_list().unwrap().len(), 0);
    assert!(field.get("selection_set").unwrap().is_null());
}

/// Type references project as nested kind-tagged nodes.
#[test]
fn type_projection() {
    let ty = crate::parse_type("[MyType!]").unwrap();
    let mapping = ty.to_mapping();
    assert_eq!(mapping.kind(), Some("ListType"));
    let inner = mapping.get("type").unwrap();
    assert_eq!(inner.kind(), Some("NonNullType"));
    assert_eq!(inner.get("type").unwrap().kind(), Some("NamedType"));
}

/// Verifies print/reparse idempotence over the kitchen-sink document:
/// parsing the canonical form yields the same projection as the original.
#[test]
fn print_reparse_is_idempotent() {
    let original = parse_ok(KITCHEN_SINK);
    let printed = print(&original);
    let reparsed = match crate::parse(&printed) {
        Ok(document) => document,
        Err(error) => panic!("canonical form failed to reparse: {error}\n{printed}"),
    };
    assert_eq!(original.to_mapping(), reparsed.to_mapping());

    // And the canonical form is a fixed point: printing again is identical.
    assert_eq!(printed, print(&reparsed));
}

/// The directive-definition projection includes `repeatable` and location
/// names.
#[test]
fn directive_definition_projection() {
    let document = parse_ok("directive @tag(name: String!) repeatable on FIELD | OBJECT");
    let mapping = document.to_mapping();
    let definition = &mapping.get("definitions").unwrap().as_list().unwrap()[0];

    assert_eq!(definition.kind(), Some("DirectiveDefinition"));
    assert_eq!(definition.get("repeatable").unwrap().as_bool(), Some(true));
    let locations = definition.get("locations").unwrap().as_list().unwrap();
    assert_eq!(locations[0].as_str(), Some("FIELD"));
    assert_eq!(locations[1].as_str(), Some("OBJECT"));
}
