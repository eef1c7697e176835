use crate::ast::Name;
use crate::ast::Value;
use crate::SourceSpan;

/// A single `name: value` argument.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub value: Value<'src>,
}

/// A directive annotation: `@name` or `@name(args)`.
///
/// In const positions (type-system definitions, variable definitions) the
/// parser forbids variable references inside the argument values.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
}
