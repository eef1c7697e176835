use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::SourceSpan;

/// The kind of an operation: `query`, `mutation`, or `subscription`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The keyword text of this operation kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// Maps an operation keyword to its kind. Returns `None` for any other
    /// name.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }
}

/// An [operation definition](https://spec.graphql.org/June2018/#sec-Language.Operations).
///
/// The shorthand form (a document starting with `{`) yields
/// `operation = Query`, no name, and empty variable definitions and
/// directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub span: SourceSpan,
    pub operation: OperationKind,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// A variable definition: `$name: Type = default @directives`.
///
/// The default value and directive arguments are const contexts.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub span: SourceSpan,
    pub variable: Variable<'src>,
    pub ty: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
}

/// A [selection set](https://spec.graphql.org/June2018/#sec-Selection-Sets):
/// `{ Selection+ }`.
///
/// `selections` is non-empty on every successfully parsed set; `{ }` is a
/// syntax error.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub span: SourceSpan,
    pub selections: Vec<Selection<'src>>,
}

/// A single selection: a field, a fragment spread, or an inline fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

/// A [field](https://spec.graphql.org/June2018/#sec-Language.Fields):
/// `alias: name(args) @directives { selections }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub span: SourceSpan,
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<crate::ast::Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

/// A fragment spread: `...FragmentName @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// An inline fragment: `... on Type @directives { selections }`, with the
/// type condition optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub span: SourceSpan,
    pub type_condition: Option<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// A [fragment definition](https://spec.graphql.org/June2018/#sec-Language.Fragments):
/// `fragment Name on Type @directives { selections }`.
///
/// The fragment name is never `on`; that name introduces the type condition
/// and is rejected in name position.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub span: SourceSpan,
    pub name: Name<'src>,
    pub type_condition: NamedType<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}
