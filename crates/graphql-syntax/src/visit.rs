//! Pre-order traversal of the AST for downstream consumers.
//!
//! Implement [`Visitor`] with the hooks you care about (all default to
//! no-ops) and hand the tree to [`walk_document`]. Hooks fire before the
//! node's children are walked.
//!
//! ```
//! use graphql_syntax::ast;
//! use graphql_syntax::visit::{walk_document, Visitor};
//!
//! struct FieldNames(Vec<String>);
//!
//! impl<'src> Visitor<'src> for FieldNames {
//!     fn visit_field(&mut self, field: &ast::Field<'src>) {
//!         self.0.push(field.name.value.to_string());
//!     }
//! }
//!
//! let doc = graphql_syntax::parse("{ hero { name } }").unwrap();
//! let mut names = FieldNames(Vec::new());
//! walk_document(&mut names, &doc);
//! assert_eq!(names.0, ["hero", "name"]);
//! ```

use crate::ast;

/// Pre-order visitor over the AST. Every hook defaults to a no-op.
#[allow(unused_variables)]
pub trait Visitor<'src> {
    fn visit_document(&mut self, document: &ast::Document<'src>) {}
    fn visit_definition(&mut self, definition: &ast::Definition<'src>) {}
    fn visit_operation_definition(&mut self, operation: &ast::OperationDefinition<'src>) {}
    fn visit_variable_definition(&mut self, definition: &ast::VariableDefinition<'src>) {}
    fn visit_fragment_definition(&mut self, fragment: &ast::FragmentDefinition<'src>) {}
    fn visit_selection_set(&mut self, selection_set: &ast::SelectionSet<'src>) {}
    fn visit_field(&mut self, field: &ast::Field<'src>) {}
    fn visit_fragment_spread(&mut self, spread: &ast::FragmentSpread<'src>) {}
    fn visit_inline_fragment(&mut self, inline: &ast::InlineFragment<'src>) {}
    fn visit_argument(&mut self, argument: &ast::Argument<'src>) {}
    fn visit_directive(&mut self, directive: &ast::Directive<'src>) {}
    fn visit_value(&mut self, value: &ast::Value<'src>) {}
    fn visit_type(&mut self, ty: &ast::Type<'src>) {}
    fn visit_schema_definition(&mut self, schema: &ast::SchemaDefinition<'src>) {}
    fn visit_type_definition(&mut self, definition: &ast::TypeDefinition<'src>) {}
    fn visit_field_definition(&mut self, field: &ast::FieldDefinition<'src>) {}
    fn visit_input_value_definition(&mut self, value: &ast::InputValueDefinition<'src>) {}
    fn visit_enum_value_definition(&mut self, value: &ast::EnumValueDefinition<'src>) {}
    fn visit_directive_definition(&mut self, definition: &ast::DirectiveDefinition<'src>) {}
    fn visit_schema_extension(&mut self, extension: &ast::SchemaExtension<'src>) {}
    fn visit_type_extension(&mut self, extension: &ast::TypeExtension<'src>) {}
}

/// Walks a document and everything beneath it.
pub fn walk_document<'src, V: Visitor<'src>>(visitor: &mut V, document: &ast::Document<'src>) {
    visitor.visit_document(document);
    for definition in &document.definitions {
        walk_definition(visitor, definition);
    }
}

/// Walks a single top-level definition.
pub fn walk_definition<'src, V: Visitor<'src>>(
    visitor: &mut V,
    definition: &ast::Definition<'src>,
) {
    visitor.visit_definition(definition);
    match definition {
        ast::Definition::Operation(operation) => {
            visitor.visit_operation_definition(operation);
            for variable_definition in &operation.variable_definitions {
                walk_variable_definition(visitor, variable_definition);
            }
            walk_directives(visitor, &operation.directives);
            walk_selection_set(visitor, &operation.selection_set);
        }
        ast::Definition::Fragment(fragment) => {
            visitor.visit_fragment_definition(fragment);
            walk_directives(visitor, &fragment.directives);
            walk_selection_set(visitor, &fragment.selection_set);
        }
        ast::Definition::Schema(schema) => {
            visitor.visit_schema_definition(schema);
            walk_directives(visitor, &schema.directives);
        }
        ast::Definition::Type(definition) => walk_type_definition(visitor, definition),
        ast::Definition::Directive(definition) => {
            visitor.visit_directive_definition(definition);
            for argument in &definition.arguments {
                walk_input_value_definition(visitor, argument);
            }
        }
        ast::Definition::SchemaExtension(extension) => {
            visitor.visit_schema_extension(extension);
            walk_directives(visitor, &extension.directives);
        }
        ast::Definition::TypeExtension(extension) => {
            walk_type_extension(visitor, extension);
        }
    }
}

fn walk_variable_definition<'src, V: Visitor<'src>>(
    visitor: &mut V,
    definition: &ast::VariableDefinition<'src>,
) {
    visitor.visit_variable_definition(definition);
    walk_type(visitor, &definition.ty);
    if let Some(default) = &definition.default_value {
        walk_value(visitor, default);
    }
    walk_directives(visitor, &definition.directives);
}

/// Walks a selection set and its nested selections.
pub fn walk_selection_set<'src, V: Visitor<'src>>(
    visitor: &mut V,
    selection_set: &ast::SelectionSet<'src>,
) {
    visitor.visit_selection_set(selection_set);
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                visitor.visit_field(field);
                for argument in &field.arguments {
                    walk_argument(visitor, argument);
                }
                walk_directives(visitor, &field.directives);
                if let Some(nested) = &field.selection_set {
                    walk_selection_set(visitor, nested);
                }
            }
            ast::Selection::FragmentSpread(spread) => {
                visitor.visit_fragment_spread(spread);
                walk_directives(visitor, &spread.directives);
            }
            ast::Selection::InlineFragment(inline) => {
                visitor.visit_inline_fragment(inline);
                walk_directives(visitor, &inline.directives);
                walk_selection_set(visitor, &inline.selection_set);
            }
        }
    }
}

fn walk_argument<'src, V: Visitor<'src>>(visitor: &mut V, argument: &ast::Argument<'src>) {
    visitor.visit_argument(argument);
    walk_value(visitor, &argument.value);
}

fn walk_directives<'src, V: Visitor<'src>>(
    visitor: &mut V,
    directives: &[ast::Directive<'src>],
) {
    for directive in directives {
        visitor.visit_directive(directive);
        for argument in &directive.arguments {
            walk_argument(visitor, argument);
        }
    }
}

/// Walks a value, recursing into lists and objects.
pub fn walk_value<'src, V: Visitor<'src>>(visitor: &mut V, value: &ast::Value<'src>) {
    visitor.visit_value(value);
    match value {
        ast::Value::List(list) => {
            for item in &list.values {
                walk_value(visitor, item);
            }
        }
        ast::Value::Object(object) => {
            for field in &object.fields {
                walk_value(visitor, &field.value);
            }
        }
        _ => {}
    }
}

/// Walks a type reference, recursing through list and non-null wrappers.
pub fn walk_type<'src, V: Visitor<'src>>(visitor: &mut V, ty: &ast::Type<'src>) {
    visitor.visit_type(ty);
    match ty {
        ast::Type::Named(_) => {}
        ast::Type::List(list) => walk_type(visitor, &list.ty),
        ast::Type::NonNull(non_null) => walk_type(visitor, &non_null.ty),
    }
}

fn walk_type_definition<'src, V: Visitor<'src>>(
    visitor: &mut V,
    definition: &ast::TypeDefinition<'src>,
) {
    visitor.visit_type_definition(definition);
    match definition {
        ast::TypeDefinition::Scalar(d) => walk_directives(visitor, &d.directives),
        ast::TypeDefinition::Object(d) => {
            walk_directives(visitor, &d.directives);
            for field in &d.fields {
                walk_field_definition(visitor, field);
            }
        }
        ast::TypeDefinition::Interface(d) => {
            walk_directives(visitor, &d.directives);
            for field in &d.fields {
                walk_field_definition(visitor, field);
            }
        }
        ast::TypeDefinition::Union(d) => walk_directives(visitor, &d.directives),
        ast::TypeDefinition::Enum(d) => {
            walk_directives(visitor, &d.directives);
            for value in &d.values {
                visitor.visit_enum_value_definition(value);
                walk_directives(visitor, &value.directives);
            }
        }
        ast::TypeDefinition::InputObject(d) => {
            walk_directives(visitor, &d.directives);
            for field in &d.fields {
                walk_input_value_definition(visitor, field);
            }
        }
    }
}

fn walk_field_definition<'src, V: Visitor<'src>>(
    visitor: &mut V,
    field: &ast::FieldDefinition<'src>,
) {
    visitor.visit_field_definition(field);
    for argument in &field.arguments {
        walk_input_value_definition(visitor, argument);
    }
    walk_type(visitor, &field.ty);
    walk_directives(visitor, &field.directives);
}

fn walk_input_value_definition<'src, V: Visitor<'src>>(
    visitor: &mut V,
    value: &ast::InputValueDefinition<'src>,
) {
    visitor.visit_input_value_definition(value);
    walk_type(visitor, &value.ty);
    if let Some(default) = &value.default_value {
        walk_value(visitor, default);
    }
    walk_directives(visitor, &value.directives);
}

fn walk_type_extension<'src, V: Visitor<'src>>(
    visitor: &mut V,
    extension: &ast::TypeExtension<'src>,
) {
    visitor.visit_type_extension(extension);
    match extension {
        ast::TypeExtension::Scalar(e) => walk_directives(visitor, &e.directives),
        ast::TypeExtension::Object(e) => {
            walk_directives(visitor, &e.directives);
            for field in &e.fields {
                walk_field_definition(visitor, field);
            }
        }
        ast::TypeExtension::Interface(e) => {
            walk_directives(visitor, &e.directives);
            for field in &e.fields {
                walk_field_definition(visitor, field);
            }
        }
        ast::TypeExtension::Union(e) => walk_directives(visitor, &e.directives),
        ast::TypeExtension::Enum(e) => {
            walk_directives(visitor, &e.directives);
            for value in &e.values {
                visitor.visit_enum_value_definition(value);
                walk_directives(visitor, &value.directives);
            }
        }
        ast::TypeExtension::InputObject(e) => {
            walk_directives(visitor, &e.directives);
            for field in &e.fields {
                walk_input_value_definition(visitor, field);
            }
        }
    }
}
