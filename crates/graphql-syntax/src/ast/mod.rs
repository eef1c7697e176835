//! Typed AST for parsed GraphQL documents.
//!
//! All node types are parameterized over a `'src` lifetime that borrows
//! strings from the source text via [`Cow<'src, str>`]. Every node carries a
//! [`SourceSpan`] for location tracking. Each node kind owns exactly the
//! child slots its grammar production mandates: list children are always
//! present (possibly empty), optional children are `Option`s, and nothing
//! else is stored.
//!
//! Nodes are built bottom-up by the parser and are plain immutable data
//! afterwards; they hold no references back to the token stream.
//!
//! [`Cow<'src, str>`]: std::borrow::Cow
//! [`SourceSpan`]: crate::SourceSpan

mod document;
mod executable;
mod name;
mod shared;
mod type_system;
mod types;
mod values;

pub use document::Definition;
pub use document::Document;
pub use executable::Field;
pub use executable::FragmentDefinition;
pub use executable::FragmentSpread;
pub use executable::InlineFragment;
pub use executable::OperationDefinition;
pub use executable::OperationKind;
pub use executable::Selection;
pub use executable::SelectionSet;
pub use executable::VariableDefinition;
pub use name::Name;
pub use shared::Argument;
pub use shared::Directive;
pub use type_system::DirectiveDefinition;
pub use type_system::DirectiveLocation;
pub use type_system::EnumTypeDefinition;
pub use type_system::EnumTypeExtension;
pub use type_system::EnumValueDefinition;
pub use type_system::FieldDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputObjectTypeExtension;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::InterfaceTypeExtension;
pub use type_system::ObjectTypeDefinition;
pub use type_system::ObjectTypeExtension;
pub use type_system::OperationTypeDefinition;
pub use type_system::ScalarTypeDefinition;
pub use type_system::ScalarTypeExtension;
pub use type_system::SchemaDefinition;
pub use type_system::SchemaExtension;
pub use type_system::TypeDefinition;
pub use type_system::TypeExtension;
pub use type_system::UnionTypeDefinition;
pub use type_system::UnionTypeExtension;
pub use types::ListType;
pub use types::NamedType;
pub use types::NonNullType;
pub use types::Type;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;
