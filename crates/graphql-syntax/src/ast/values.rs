use crate::ast::Name;
use crate::SourceSpan;
use std::borrow::Cow;

/// A GraphQL input value.
///
/// Represents all value literals of the
/// [Input Values](https://spec.graphql.org/June2018/#sec-Input-Values)
/// grammar, plus variable references. In const contexts (default values,
/// const directive arguments) the parser rejects the `Variable` form.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Variable(Variable<'src>),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue<'src>),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
}

/// A variable reference: `$name`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
}

/// A GraphQL integer value.
///
/// Per the [Int Value](https://spec.graphql.org/June2018/#sec-Int-Value)
/// grammar, Int is a signed 32-bit integer; literals outside that range are
/// a syntax error.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub span: SourceSpan,
    pub value: i32,
}

/// A GraphQL float value (IEEE 754 double precision).
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub span: SourceSpan,
    pub value: f64,
}

/// A GraphQL string value.
///
/// Contains the processed content after escape-sequence resolution and
/// block-string indentation stripping.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub span: SourceSpan,
    pub value: Cow<'src, str>,
    /// Whether the literal used `"""block"""` form.
    pub is_block: bool,
}

/// A `true` or `false` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub span: SourceSpan,
    pub value: bool,
}

/// A `null` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub span: SourceSpan,
}

/// An enum value: any name that is not `true`, `false`, or `null`.
///
/// The parser maps those three names to [`BooleanValue`] / [`NullValue`]
/// before this variant is considered, so an `EnumValue` never carries them.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub span: SourceSpan,
    pub value: Cow<'src, str>,
}

/// A list value: `[1, 2, 3]`. May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub span: SourceSpan,
    pub values: Vec<Value<'src>>,
}

/// An object value: `{ lon: 12.43, lat: -53.211 }`. May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub span: SourceSpan,
    pub fields: Vec<ObjectField<'src>>,
}

/// A single `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub value: Value<'src>,
}
