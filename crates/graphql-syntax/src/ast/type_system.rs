use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationKind;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::Value;
use crate::SourceSpan;

/// A `schema { query: Query ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub span: SourceSpan,
    pub directives: Vec<Directive<'src>>,
    pub operation_types: Vec<OperationTypeDefinition<'src>>,
}

/// A single `operation: NamedType` entry of a schema definition.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition<'src> {
    pub span: SourceSpan,
    pub operation: OperationKind,
    pub named_type: NamedType<'src>,
}

/// A [type definition](https://spec.graphql.org/June2018/#sec-Types):
/// scalar, object, interface, union, enum, or input object.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
}

impl<'src> TypeDefinition<'src> {
    /// The name of the defined type.
    pub fn name(&self) -> &Name<'src> {
        match self {
            TypeDefinition::Scalar(d) => &d.name,
            TypeDefinition::Object(d) => &d.name,
            TypeDefinition::Interface(d) => &d.name,
            TypeDefinition::Union(d) => &d.name,
            TypeDefinition::Enum(d) => &d.name,
            TypeDefinition::InputObject(d) => &d.name,
        }
    }
}

/// `scalar Name @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub span: SourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `type Name implements I & J @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub span: SourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// A field of an object or interface type:
/// `name(args): Type @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub span: SourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub ty: Type<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// An argument or input field: `name: Type = default @directives`.
///
/// The default value is a const context.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub span: SourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub ty: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
}

/// `interface Name @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub span: SourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `union Name @directives = A | B`
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub span: SourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub types: Vec<NamedType<'src>>,
}

/// `enum Name @directives { VALUES }`
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub span: SourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

/// A single enum value definition.
///
/// The value name may not be `true`, `false`, or `null`; those would be
/// ambiguous with literals in value contexts.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub span: SourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub span: SourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}

/// `directive @name(args) repeatable? on LOCATIONS`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub span: SourceSpan,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}

/// The fixed set of
/// [directive locations](https://spec.graphql.org/June2018/#sec-Type-System.Directives).
///
/// A location name outside this set is a syntax error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// The wire name of this location, e.g. `FIELD_DEFINITION`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Maps a location name to its variant. Returns `None` for names outside
    /// the fixed set.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => DirectiveLocation::Query,
            "MUTATION" => DirectiveLocation::Mutation,
            "SUBSCRIPTION" => DirectiveLocation::Subscription,
            "FIELD" => DirectiveLocation::Field,
            "FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
            "FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
            "INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
            "VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
            "SCHEMA" => DirectiveLocation::Schema,
            "SCALAR" => DirectiveLocation::Scalar,
            "OBJECT" => DirectiveLocation::Object,
            "FIELD_DEFINITION" => DirectiveLocation::FieldDefinition,
            "ARGUMENT_DEFINITION" => DirectiveLocation::ArgumentDefinition,
            "INTERFACE" => DirectiveLocation::Interface,
            "UNION" => DirectiveLocation::Union,
            "ENUM" => DirectiveLocation::Enum,
            "ENUM_VALUE" => DirectiveLocation::EnumValue,
            "INPUT_OBJECT" => DirectiveLocation::InputObject,
            "INPUT_FIELD_DEFINITION" => DirectiveLocation::InputFieldDefinition,
            _ => return None,
        })
    }
}

/// `extend schema @directives { operation types }`
///
/// At least one of the directive list or the operation-type block is
/// present.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension<'src> {
    pub span: SourceSpan,
    pub directives: Vec<Directive<'src>>,
    pub operation_types: Vec<OperationTypeDefinition<'src>>,
}

/// A type extension: `extend <kind> Name ...`.
///
/// Each variant requires at least one extending clause; a bare
/// `extend type Name` with nothing following is a syntax error.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension<'src> {
    Scalar(ScalarTypeExtension<'src>),
    Object(ObjectTypeExtension<'src>),
    Interface(InterfaceTypeExtension<'src>),
    Union(UnionTypeExtension<'src>),
    Enum(EnumTypeExtension<'src>),
    InputObject(InputObjectTypeExtension<'src>),
}

/// `extend scalar Name @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `extend type Name implements I @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `extend interface Name @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `extend union Name @directives = A | B`
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub types: Vec<NamedType<'src>>,
}

/// `extend enum Name @directives { VALUES }`
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

/// `extend input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}
