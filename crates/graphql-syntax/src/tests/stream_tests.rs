//! Tests for the token stream, the lexer's token spans, and parsing from a
//! custom token source.

use crate::ast;
use crate::tests::utils::mock_token;
use crate::tests::utils::MockTokenSource;
use crate::token::TokenKind;
use crate::token_source::Lexer;
use crate::Parser;
use crate::TokenStream;

/// Collects `(kind-display, byte_offset)` pairs for a source.
fn lex_offsets(source: &str) -> Vec<usize> {
    Lexer::new(source)
        .map(|token| token.span.start_inclusive.byte_offset())
        .collect()
}

/// Verifies basic stream behavior: peek does not advance, consume does.
#[test]
fn peek_then_consume() {
    let tokens = vec![
        mock_token(TokenKind::CurlyBraceOpen),
        mock_token(TokenKind::name("f")),
        mock_token(TokenKind::CurlyBraceClose),
        mock_token(TokenKind::Eof),
    ];
    let mut stream = TokenStream::new(MockTokenSource::new(tokens));

    assert_eq!(stream.peek().unwrap().kind, TokenKind::CurlyBraceOpen);
    assert_eq!(stream.peek().unwrap().kind, TokenKind::CurlyBraceOpen);
    assert_eq!(stream.consume().unwrap().kind, TokenKind::CurlyBraceOpen);
    assert_eq!(stream.peek().unwrap().kind, TokenKind::name("f"));
}

/// Verifies single-token lookahead: `peek_nth(1)` sees past the current
/// token without advancing.
#[test]
fn single_token_lookahead() {
    let tokens = vec![
        mock_token(TokenKind::string_value("\"desc\"")),
        mock_token(TokenKind::name("scalar")),
        mock_token(TokenKind::Eof),
    ];
    let mut stream = TokenStream::new(MockTokenSource::new(tokens));

    assert_eq!(stream.peek_nth(1).unwrap().kind, TokenKind::name("scalar"));
    assert_eq!(
        stream.peek().unwrap().kind,
        TokenKind::string_value("\"desc\"")
    );
}

/// An exhausted stream returns `None` from both peek and consume.
#[test]
fn exhausted_stream_returns_none() {
    let mut stream = TokenStream::new(MockTokenSource::new(vec![mock_token(TokenKind::Eof)]));
    assert!(stream.consume().is_some());
    assert!(stream.peek().is_none());
    assert!(stream.consume().is_none());
}

/// The lexer terminates every stream with an `Eof` token.
#[test]
fn lexer_emits_final_eof() {
    let kinds: Vec<_> = Lexer::new("{ a }").map(|t| t.kind).collect();
    assert_eq!(kinds.last(), Some(&TokenKind::Eof));
    assert_eq!(kinds.len(), 4);
}

/// Verifies byte offsets over punctuators, names, and numbers.
#[test]
fn lexer_byte_offsets() {
    assert_eq!(lex_offsets("{ node(id: 4) }"), vec![0, 2, 6, 7, 9, 11, 12, 14, 15]);
}

/// Multi-byte characters inside comments and strings advance byte offsets
/// by their encoded length, and columns by one per character.
#[test]
fn lexer_multibyte_positions() {
    // "é" is 2 bytes; the name after it starts at byte 5, column 4.
    let tokens: Vec<_> = Lexer::new("\"é\" x").collect();
    assert_eq!(tokens[0].span.start_inclusive.byte_offset(), 0);
    assert_eq!(tokens[0].span.end_exclusive.byte_offset(), 4);
    assert_eq!(tokens[1].span.start_inclusive.byte_offset(), 5);
    assert_eq!(tokens[1].span.start_inclusive.col(), 4);
}

/// CR, LF, and CRLF each count as a single line terminator.
#[test]
fn lexer_line_terminators() {
    let tokens: Vec<_> = Lexer::new("a\nb\r\nc\rd").collect();
    let lines: Vec<_> = tokens
        .iter()
        .map(|t| t.span.start_inclusive.line())
        .collect();
    assert_eq!(lines, vec![0, 1, 2, 3, 3]);
}

/// Verifies that the parser accepts tokens from a custom source: the
/// token-source seam is the iterator, not the lexer.
#[test]
fn parse_from_custom_token_source() {
    // Equivalent of "{ f }".
    let tokens = vec![
        mock_token(TokenKind::CurlyBraceOpen),
        mock_token(TokenKind::name("f")),
        mock_token(TokenKind::CurlyBraceClose),
        mock_token(TokenKind::Eof),
    ];
    let parser = Parser::from_token_source("{ f }", MockTokenSource::new(tokens));
    let document = parser.parse_document().unwrap();
    assert!(matches!(
        document.definitions[0],
        ast::Definition::Operation(_)
    ));
}

/// A truncated custom token stream (no `Eof` token) still fails cleanly.
#[test]
fn truncated_token_source_fails_cleanly() {
    let tokens = vec![
        mock_token(TokenKind::CurlyBraceOpen),
        mock_token(TokenKind::name("f")),
    ];
    let parser = Parser::from_token_source("{ f", MockTokenSource::new(tokens));
    assert!(parser.parse_document().is_err());
}
