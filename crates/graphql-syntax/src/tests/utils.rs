//! Shared helpers for the parser test suite.

use crate::ast;
use crate::token::Token;
use crate::token::TokenKind;
use crate::SourcePosition;
use crate::SourceSpan;
use crate::SyntaxError;

/// Parses a document, panicking with the rendered error on failure.
pub(super) fn parse_ok(source: &str) -> ast::Document<'_> {
    match crate::parse(source) {
        Ok(document) => document,
        Err(error) => panic!("expected successful parse, got: {error}"),
    }
}

/// Parses a document, panicking if it unexpectedly succeeds.
pub(super) fn parse_err(source: &str) -> SyntaxError {
    match crate::parse(source) {
        Ok(document) => panic!("expected parse error, got: {document:?}"),
        Err(error) => error,
    }
}

/// Parses source and extracts the first definition as an operation.
///
/// # Panics
/// Panics if parsing fails or the first definition is not an operation.
pub(super) fn extract_operation(source: &str) -> ast::OperationDefinition<'_> {
    let document = parse_ok(source);
    match document.definitions.into_iter().next() {
        Some(ast::Definition::Operation(operation)) => operation,
        other => panic!("expected operation definition, got: {other:?}"),
    }
}

/// Parses source and extracts the first definition as a fragment.
///
/// # Panics
/// Panics if parsing fails or the first definition is not a fragment.
pub(super) fn extract_fragment(source: &str) -> ast::FragmentDefinition<'_> {
    let document = parse_ok(source);
    match document.definitions.into_iter().next() {
        Some(ast::Definition::Fragment(fragment)) => fragment,
        other => panic!("expected fragment definition, got: {other:?}"),
    }
}

/// Parses source and extracts the selection set of the first operation.
pub(super) fn extract_selection_set(source: &str) -> ast::SelectionSet<'_> {
    extract_operation(source).selection_set
}

/// The selection at `index`, which must be a field.
///
/// # Panics
/// Panics if the selection at that index is not a field.
pub(super) fn field_at<'a, 'src>(
    selection_set: &'a ast::SelectionSet<'src>,
    index: usize,
) -> &'a ast::Field<'src> {
    match selection_set.selections.get(index) {
        Some(ast::Selection::Field(field)) => field,
        other => panic!("expected field at index {index}, got: {other:?}"),
    }
}

/// The first selection, which must be a field.
pub(super) fn first_field<'a, 'src>(
    selection_set: &'a ast::SelectionSet<'src>,
) -> &'a ast::Field<'src> {
    field_at(selection_set, 0)
}

/// Builds a token with a fixed dummy span, for feeding the parser directly.
pub(super) fn mock_token(kind: TokenKind<'static>) -> Token<'static> {
    let at = SourcePosition::new(0, 0, 0);
    Token::new(kind, SourceSpan::empty(at))
}

/// A token source producing a fixed sequence of tokens.
///
/// Uses `'static` tokens since mock payloads are owned or literal.
pub(super) struct MockTokenSource {
    tokens: std::vec::IntoIter<Token<'static>>,
}

impl MockTokenSource {
    pub(super) fn new(tokens: Vec<Token<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = Token<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}
