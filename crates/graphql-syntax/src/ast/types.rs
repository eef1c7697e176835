use crate::ast::Name;
use crate::SourceSpan;

/// A [type reference](https://spec.graphql.org/June2018/#sec-Type-References):
/// `Name`, `[Type]`, or `Type!`.
#[derive(Clone, Debug, PartialEq)]
pub enum Type<'src> {
    Named(NamedType<'src>),
    List(Box<ListType<'src>>),
    NonNull(Box<NonNullType<'src>>),
}

impl<'src> Type<'src> {
    /// The span of the underlying node.
    pub fn span(&self) -> &SourceSpan {
        match self {
            Type::Named(t) => &t.span,
            Type::List(t) => &t.span,
            Type::NonNull(t) => &t.span,
        }
    }
}

/// A plain named type: `String`, `User`, ...
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
}

/// A list type: `[Item]`. The inner type may be any type, including a
/// non-null type.
#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'src> {
    pub span: SourceSpan,
    pub ty: Type<'src>,
}

/// A non-null type: `Item!`.
///
/// `ty` is never itself a `Type::NonNull`; the grammar admits only a single
/// `!` per nesting level, so double wrapping cannot be constructed by the
/// parser.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType<'src> {
    pub span: SourceSpan,
    pub ty: Type<'src>,
}
