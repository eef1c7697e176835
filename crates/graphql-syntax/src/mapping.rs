//! Canonical tree-to-mapping projection of the AST.
//!
//! `to_mapping()` recursively projects a node into a nested [`Mapping`]
//! value whose leaves are primitives. Every projected node is a `Map` with a
//! `kind` entry first, followed by exactly the child slots its grammar
//! production mandates: list slots are always present (possibly empty),
//! absent optional children project to `Null`, and spans do not project.
//! The map preserves insertion order, so projections compare and print
//! deterministically.
//!
//! This is the crate's single projection; tests assert against it, and it
//! doubles as a cheap structural-equality witness for whole trees.

use crate::ast;
use indexmap::IndexMap;

/// A projected AST node: a nested, insertion-ordered mapping with primitive
/// leaves.
#[derive(Clone, Debug, PartialEq)]
pub enum Mapping {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Mapping>),
    Map(IndexMap<String, Mapping>),
}

impl Mapping {
    /// Looks up an entry of a `Map`; `None` for other variants or missing
    /// keys.
    pub fn get(&self, key: &str) -> Option<&Mapping> {
        match self {
            Mapping::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// The `kind` entry of a projected node, if this is a `Map`.
    pub fn kind(&self) -> Option<&str> {
        self.get("kind").and_then(Mapping::as_str)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Mapping::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Mapping::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Mapping::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Mapping::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Mapping]> {
        match self {
            Mapping::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Mapping::Null)
    }
}

/// Starts a node map with its `kind` entry.
fn node(kind: &str) -> IndexMap<String, Mapping> {
    let mut map = IndexMap::new();
    map.insert("kind".to_string(), Mapping::String(kind.to_string()));
    map
}

/// Projects a slice of nodes through a per-node projection.
fn list<T>(items: &[T], project: impl Fn(&T) -> Mapping) -> Mapping {
    Mapping::List(items.iter().map(project).collect())
}

/// Projects an optional child, `Null` when absent.
fn optional<T>(item: &Option<T>, project: impl Fn(&T) -> Mapping) -> Mapping {
    match item {
        Some(item) => project(item),
        None => Mapping::Null,
    }
}

impl ast::Document<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("Document");
        m.insert(
            "definitions".to_string(),
            list(&self.definitions, ast::Definition::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::Definition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        match self {
            ast::Definition::Operation(d) => d.to_mapping(),
            ast::Definition::Fragment(d) => d.to_mapping(),
            ast::Definition::Schema(d) => d.to_mapping(),
            ast::Definition::Type(d) => d.to_mapping(),
            ast::Definition::Directive(d) => d.to_mapping(),
            ast::Definition::SchemaExtension(d) => d.to_mapping(),
            ast::Definition::TypeExtension(d) => d.to_mapping(),
        }
    }
}

impl ast::OperationDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("OperationDefinition");
        m.insert(
            "operation".to_string(),
            Mapping::String(self.operation.as_str().to_string()),
        );
        m.insert("name".to_string(), optional(&self.name, ast::Name::to_mapping));
        m.insert(
            "variable_definitions".to_string(),
            list(
                &self.variable_definitions,
                ast::VariableDefinition::to_mapping,
            ),
        );
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert("selection_set".to_string(), self.selection_set.to_mapping());
        Mapping::Map(m)
    }
}

impl ast::VariableDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("VariableDefinition");
        m.insert("variable".to_string(), self.variable.to_mapping());
        m.insert("type".to_string(), self.ty.to_mapping());
        m.insert(
            "default_value".to_string(),
            optional(&self.default_value, ast::Value::to_mapping),
        );
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::SelectionSet<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("SelectionSet");
        m.insert(
            "selections".to_string(),
            list(&self.selections, ast::Selection::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::Selection<'_> {
    pub fn to_mapping(&self) -> Mapping {
        match self {
            ast::Selection::Field(s) => s.to_mapping(),
            ast::Selection::FragmentSpread(s) => s.to_mapping(),
            ast::Selection::InlineFragment(s) => s.to_mapping(),
        }
    }
}

impl ast::Field<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("Field");
        m.insert("alias".to_string(), optional(&self.alias, ast::Name::to_mapping));
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "arguments".to_string(),
            list(&self.arguments, ast::Argument::to_mapping),
        );
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert(
            "selection_set".to_string(),
            optional(&self.selection_set, ast::SelectionSet::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::Argument<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("Argument");
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert("value".to_string(), self.value.to_mapping());
        Mapping::Map(m)
    }
}

impl ast::FragmentSpread<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("FragmentSpread");
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::InlineFragment<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("InlineFragment");
        m.insert(
            "type_condition".to_string(),
            optional(&self.type_condition, ast::NamedType::to_mapping),
        );
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert("selection_set".to_string(), self.selection_set.to_mapping());
        Mapping::Map(m)
    }
}

impl ast::FragmentDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("FragmentDefinition");
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert("type_condition".to_string(), self.type_condition.to_mapping());
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert("selection_set".to_string(), self.selection_set.to_mapping());
        Mapping::Map(m)
    }
}

impl ast::Value<'_> {
    pub fn to_mapping(&self) -> Mapping {
        match self {
            ast::Value::Variable(v) => v.to_mapping(),
            ast::Value::Int(v) => {
                let mut m = node("IntValue");
                m.insert("value".to_string(), Mapping::Int(v.value as i64));
                Mapping::Map(m)
            }
            ast::Value::Float(v) => {
                let mut m = node("FloatValue");
                m.insert("value".to_string(), Mapping::Float(v.value));
                Mapping::Map(m)
            }
            ast::Value::String(v) => v.to_mapping(),
            ast::Value::Boolean(v) => {
                let mut m = node("BooleanValue");
                m.insert("value".to_string(), Mapping::Bool(v.value));
                Mapping::Map(m)
            }
            ast::Value::Null(_) => Mapping::Map(node("NullValue")),
            ast::Value::Enum(v) => {
                let mut m = node("EnumValue");
                m.insert("value".to_string(), Mapping::String(v.value.to_string()));
                Mapping::Map(m)
            }
            ast::Value::List(v) => {
                let mut m = node("ListValue");
                m.insert("values".to_string(), list(&v.values, ast::Value::to_mapping));
                Mapping::Map(m)
            }
            ast::Value::Object(v) => {
                let mut m = node("ObjectValue");
                m.insert(
                    "fields".to_string(),
                    list(&v.fields, ast::ObjectField::to_mapping),
                );
                Mapping::Map(m)
            }
        }
    }
}

impl ast::Variable<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("Variable");
        m.insert("name".to_string(), self.name.to_mapping());
        Mapping::Map(m)
    }
}

impl ast::StringValue<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("StringValue");
        m.insert("value".to_string(), Mapping::String(self.value.to_string()));
        Mapping::Map(m)
    }
}

impl ast::ObjectField<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("ObjectField");
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert("value".to_string(), self.value.to_mapping());
        Mapping::Map(m)
    }
}

impl ast::Directive<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("Directive");
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "arguments".to_string(),
            list(&self.arguments, ast::Argument::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::Name<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("Name");
        m.insert("value".to_string(), Mapping::String(self.value.to_string()));
        Mapping::Map(m)
    }
}

impl ast::Type<'_> {
    pub fn to_mapping(&self) -> Mapping {
        match self {
            ast::Type::Named(t) => t.to_mapping(),
            ast::Type::List(t) => {
                let mut m = node("ListType");
                m.insert("type".to_string(), t.ty.to_mapping());
                Mapping::Map(m)
            }
            ast::Type::NonNull(t) => {
                let mut m = node("NonNullType");
                m.insert("type".to_string(), t.ty.to_mapping());
                Mapping::Map(m)
            }
        }
    }
}

impl ast::NamedType<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("NamedType");
        m.insert("name".to_string(), self.name.to_mapping());
        Mapping::Map(m)
    }
}

impl ast::SchemaDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("SchemaDefinition");
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert(
            "operation_types".to_string(),
            list(
                &self.operation_types,
                ast::OperationTypeDefinition::to_mapping,
            ),
        );
        Mapping::Map(m)
    }
}

impl ast::OperationTypeDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("OperationTypeDefinition");
        m.insert(
            "operation".to_string(),
            Mapping::String(self.operation.as_str().to_string()),
        );
        m.insert("type".to_string(), self.named_type.to_mapping());
        Mapping::Map(m)
    }
}

impl ast::TypeDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        match self {
            ast::TypeDefinition::Scalar(d) => d.to_mapping(),
            ast::TypeDefinition::Object(d) => d.to_mapping(),
            ast::TypeDefinition::Interface(d) => d.to_mapping(),
            ast::TypeDefinition::Union(d) => d.to_mapping(),
            ast::TypeDefinition::Enum(d) => d.to_mapping(),
            ast::TypeDefinition::InputObject(d) => d.to_mapping(),
        }
    }
}

impl ast::ScalarTypeDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("ScalarTypeDefinition");
        m.insert(
            "description".to_string(),
            optional(&self.description, ast::StringValue::to_mapping),
        );
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::ObjectTypeDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("ObjectTypeDefinition");
        m.insert(
            "description".to_string(),
            optional(&self.description, ast::StringValue::to_mapping),
        );
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "interfaces".to_string(),
            list(&self.interfaces, ast::NamedType::to_mapping),
        );
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert(
            "fields".to_string(),
            list(&self.fields, ast::FieldDefinition::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::FieldDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("FieldDefinition");
        m.insert(
            "description".to_string(),
            optional(&self.description, ast::StringValue::to_mapping),
        );
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "arguments".to_string(),
            list(&self.arguments, ast::InputValueDefinition::to_mapping),
        );
        m.insert("type".to_string(), self.ty.to_mapping());
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::InputValueDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("InputValueDefinition");
        m.insert(
            "description".to_string(),
            optional(&self.description, ast::StringValue::to_mapping),
        );
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert("type".to_string(), self.ty.to_mapping());
        m.insert(
            "default_value".to_string(),
            optional(&self.default_value, ast::Value::to_mapping),
        );
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::InterfaceTypeDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("InterfaceTypeDefinition");
        m.insert(
            "description".to_string(),
            optional(&self.description, ast::StringValue::to_mapping),
        );
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert(
            "fields".to_string(),
            list(&self.fields, ast::FieldDefinition::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::UnionTypeDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("UnionTypeDefinition");
        m.insert(
            "description".to_string(),
            optional(&self.description, ast::StringValue::to_mapping),
        );
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert(
            "types".to_string(),
            list(&self.types, ast::NamedType::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::EnumTypeDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("EnumTypeDefinition");
        m.insert(
            "description".to_string(),
            optional(&self.description, ast::StringValue::to_mapping),
        );
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert(
            "values".to_string(),
            list(&self.values, ast::EnumValueDefinition::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::EnumValueDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("EnumValueDefinition");
        m.insert(
            "description".to_string(),
            optional(&self.description, ast::StringValue::to_mapping),
        );
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::InputObjectTypeDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("InputObjectTypeDefinition");
        m.insert(
            "description".to_string(),
            optional(&self.description, ast::StringValue::to_mapping),
        );
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert(
            "fields".to_string(),
            list(&self.fields, ast::InputValueDefinition::to_mapping),
        );
        Mapping::Map(m)
    }
}

impl ast::DirectiveDefinition<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("DirectiveDefinition");
        m.insert(
            "description".to_string(),
            optional(&self.description, ast::StringValue::to_mapping),
        );
        m.insert("name".to_string(), self.name.to_mapping());
        m.insert(
            "arguments".to_string(),
            list(&self.arguments, ast::InputValueDefinition::to_mapping),
        );
        m.insert("repeatable".to_string(), Mapping::Bool(self.repeatable));
        m.insert(
            "locations".to_string(),
            Mapping::List(
                self.locations
                    .iter()
                    .map(|l| Mapping::String(l.as_str().to_string()))
                    .collect(),
            ),
        );
        Mapping::Map(m)
    }
}

impl ast::SchemaExtension<'_> {
    pub fn to_mapping(&self) -> Mapping {
        let mut m = node("SchemaExtension");
        m.insert(
            "directives".to_string(),
            list(&self.directives, ast::Directive::to_mapping),
        );
        m.insert(
            "operation_types".to_string(),
            list(
                &self.operation_types,
                ast::OperationTypeDefinition::to_mapping,
            ),
        );
        Mapping::Map(m)
    }
}

impl ast::TypeExtension<'_> {
    pub fn to_mapping(&self) -> Mapping {
        match self {
            ast::TypeExtension::Scalar(e) => {
                let mut m = node("ScalarTypeExtension");
                m.insert("name".to_string(), e.name.to_mapping());
                m.insert(
                    "directives".to_string(),
                    list(&e.directives, ast::Directive::to_mapping),
                );
                Mapping::Map(m)
            }
            ast::TypeExtension::Object(e) => {
                let mut m = node("ObjectTypeExtension");
                m.insert("name".to_string(), e.name.to_mapping());
                m.insert(
                    "interfaces".to_string(),
                    list(&e.interfaces, ast::NamedType::to_mapping),
                );
                m.insert(
                    "directives".to_string(),
                    list(&e.directives, ast::Directive::to_mapping),
                );
                m.insert(
                    "fields".to_string(),
                    list(&e.fields, ast::FieldDefinition::to_mapping),
                );
                Mapping::Map(m)
            }
            ast::TypeExtension::Interface(e) => {
                let mut m = node("InterfaceTypeExtension");
                m.insert("name".to_string(), e.name.to_mapping());
                m.insert(
                    "directives".to_string(),
                    list(&e.directives, ast::Directive::to_mapping),
                );
                m.insert(
                    "fields".to_string(),
                    list(&e.fields, ast::FieldDefinition::to_mapping),
                );
                Mapping::Map(m)
            }
            ast::TypeExtension::Union(e) => {
                let mut m = node("UnionTypeExtension");
                m.insert("name".to_string(), e.name.to_mapping());
                m.insert(
                    "directives".to_string(),
                    list(&e.directives, ast::Directive::to_mapping),
                );
                m.insert(
                    "types".to_string(),
                    list(&e.types, ast::NamedType::to_mapping),
                );
                Mapping::Map(m)
            }
            ast::TypeExtension::Enum(e) => {
                let mut m = node("EnumTypeExtension");
                m.insert("name".to_string(), e.name.to_mapping());
                m.insert(
                    "directives".to_string(),
                    list(&e.directives, ast::Directive::to_mapping),
                );
                m.insert(
                    "values".to_string(),
                    list(&e.values, ast::EnumValueDefinition::to_mapping),
                );
                Mapping::Map(m)
            }
            ast::TypeExtension::InputObject(e) => {
                let mut m = node("InputObjectTypeExtension");
                m.insert("name".to_string(), e.name.to_mapping());
                m.insert(
                    "directives".to_string(),
                    list(&e.directives, ast::Directive::to_mapping),
                );
                m.insert(
                    "fields".to_string(),
                    list(&e.fields, ast::InputValueDefinition::to_mapping),
                );
                Mapping::Map(m)
            }
        }
    }
}
