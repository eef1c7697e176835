//! A fail-fast recursive descent parser for GraphQL documents (June 2018
//! draft), covering executable operations, type-system definitions, and
//! type-system extensions.
//!
//! Given a source string, [`parse`] yields a typed, zero-copy
//! [`ast::Document`] — or a single [`SyntaxError`] pinpointing the first
//! offending source position. [`parse_value`] and [`parse_type`] parse a
//! standalone value literal or type reference.
//!
//! ```
//! let doc = graphql_syntax::parse("{ node(id: 4) { id, name } }").unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//!
//! let err = graphql_syntax::parse("{").unwrap_err();
//! assert_eq!(err.start().byte_offset(), 1);
//! ```
//!
//! The parser is generic over its token source; see [`Parser`] and
//! [`token_source::TokenSource`] for supplying tokens from somewhere other
//! than a string.

pub mod ast;
mod mapping;
mod parser;
pub mod print;
mod source_position;
mod source_span;
mod syntax_error;
mod syntax_error_kind;
pub mod token;
pub mod token_source;
mod token_stream;
pub mod visit;

pub use mapping::Mapping;
pub use parser::Parser;
pub use print::print;
pub use source_position::SourcePosition;
pub use source_span::SourceSpan;
pub use syntax_error::SyntaxError;
pub use syntax_error_kind::SyntaxErrorKind;
pub use token_stream::TokenStream;

#[cfg(test)]
mod tests;

/// Parses an entire GraphQL document.
///
/// The returned tree borrows name and string payloads from `source`; the
/// error, if any, is self-contained and owns everything it needs.
pub fn parse(source: &str) -> Result<ast::Document<'_>, SyntaxError> {
    Parser::new(source).parse_document()
}

/// Parses a single (non-const) value literal, e.g. `[123 "abc"]`.
pub fn parse_value(source: &str) -> Result<ast::Value<'_>, SyntaxError> {
    Parser::new(source).parse_value()
}

/// Parses a single type reference, e.g. `[MyType!]`.
pub fn parse_type(source: &str) -> Result<ast::Type<'_>, SyntaxError> {
    Parser::new(source).parse_type()
}
