use crate::SourceSpan;
use std::borrow::Cow;

/// A GraphQL [name](https://spec.graphql.org/June2018/#sec-Names)
/// (identifier).
///
/// Names are used for type names, field names, argument names, directive
/// names, enum values, and more. The `value` borrows from the source text
/// when possible. Keywords such as `on`, `query`, or `fragment` are
/// perfectly valid names anywhere a name is grammatically permitted.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub span: SourceSpan,
    pub value: Cow<'src, str>,
}
