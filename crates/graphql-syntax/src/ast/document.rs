use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::SourceSpan;

/// A parsed GraphQL document: one or more definitions.
///
/// An empty document is a syntax error, so `definitions` is always
/// non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub span: SourceSpan,
    pub definitions: Vec<Definition<'src>>,
}

/// Any top-level construct of a document: executable (operations,
/// fragments), type-system definitions, or type-system extensions.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
    Schema(SchemaDefinition<'src>),
    Type(TypeDefinition<'src>),
    Directive(DirectiveDefinition<'src>),
    SchemaExtension(SchemaExtension<'src>),
    TypeExtension(TypeExtension<'src>),
}
