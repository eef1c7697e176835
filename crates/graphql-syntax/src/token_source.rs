//! Token sources: anything that can feed [`Token`]s to the parser.
//!
//! [`Lexer`] is the `&str`-backed token source. It implements zero-copy
//! lexing: token payloads borrow directly from the source string via
//! `Cow::Borrowed`. Whitespace, commas, and comments are ignored tokens per
//! the GraphQL grammar and are skipped outright; the parser core does not
//! preserve trivia.

use crate::token::Token;
use crate::token::TokenKind;
use crate::SourcePosition;
use crate::SourceSpan;

/// Marker trait for [`Token`] producers (iterators that generate tokens).
///
/// This trait enables extensibility over different sources of GraphQL text.
/// Implementors define an [`Iterator`] that produces tokens one at a time;
/// all lookahead and buffering is handled by
/// [`TokenStream`](crate::token_stream::TokenStream).
///
/// Token sources are responsible for:
/// - Skipping ignored tokens (whitespace, commas, comments)
/// - Emitting [`TokenKind::Error`] for lexical errors (the parser treats the
///   first one as fatal)
/// - Emitting a final [`TokenKind::Eof`] token
pub trait TokenSource<'src>: Iterator<Item = Token<'src>> {}

impl<'src, T> TokenSource<'src> for T where T: Iterator<Item = Token<'src>> {}

/// A [`TokenSource`] that lexes from a `&str` input.
///
/// Produces [`Token`]s with zero-copy payloads where possible; the `'src`
/// lifetime ties token values to the source string.
pub struct Lexer<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`. The remaining text to
    /// lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current 0-based character column within the line.
    curr_col: usize,

    /// Whether the previous character was `\r`, so a following `\n` is the
    /// second half of a `\r\n` pair and must not increment the line again.
    last_char_was_cr: bool,

    /// Whether the `Eof` token has been emitted.
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    /// Returns the current source position.
    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col, self.curr_byte_offset)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks at the nth character ahead without consuming.
    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character, updating line/column/offset tracking.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                // The `\n` of a `\r\n` pair; the line was already advanced.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col += 1;
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Creates a span from a start position to the current position.
    fn make_span(&self, start: SourcePosition) -> SourceSpan {
        SourceSpan::new(start, self.curr_position())
    }

    /// Consumes a single character and returns a token of the given kind.
    fn punctuator(&mut self, kind: TokenKind<'src>, start: SourcePosition) -> Token<'src> {
        self.consume();
        Token::new(kind, self.make_span(start))
    }

    /// Advances to the next significant token.
    fn next_token(&mut self) -> Token<'src> {
        loop {
            self.skip_ignored();

            let start = self.curr_position();

            return match self.peek_char() {
                None => Token::new(TokenKind::Eof, SourceSpan::empty(start)),

                Some('#') => {
                    // Comment: ignored token, runs to end of line.
                    while let Some(ch) = self.peek_char() {
                        if ch == '\n' || ch == '\r' {
                            break;
                        }
                        self.consume();
                    }
                    continue;
                }

                Some('!') => self.punctuator(TokenKind::Bang, start),
                Some('$') => self.punctuator(TokenKind::Dollar, start),
                Some('&') => self.punctuator(TokenKind::Ampersand, start),
                Some('(') => self.punctuator(TokenKind::ParenOpen, start),
                Some(')') => self.punctuator(TokenKind::ParenClose, start),
                Some(':') => self.punctuator(TokenKind::Colon, start),
                Some('=') => self.punctuator(TokenKind::Equals, start),
                Some('@') => self.punctuator(TokenKind::At, start),
                Some('[') => self.punctuator(TokenKind::SquareBracketOpen, start),
                Some(']') => self.punctuator(TokenKind::SquareBracketClose, start),
                Some('{') => self.punctuator(TokenKind::CurlyBraceOpen, start),
                Some('}') => self.punctuator(TokenKind::CurlyBraceClose, start),
                Some('|') => self.punctuator(TokenKind::Pipe, start),

                Some('.') => self.lex_ellipsis(start),
                Some('"') => self.lex_string(start),
                Some(c) if is_name_start(c) => self.lex_name(start),
                Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),

                Some(c) => {
                    self.consume();
                    Token::new(
                        TokenKind::Error {
                            message: format!("unexpected character `{c}`"),
                        },
                        self.make_span(start),
                    )
                }
            };
        }
    }

    /// Skips whitespace characters (space, tab, line terminators, BOM) and
    /// commas, all "ignored tokens" per the GraphQL grammar.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                }
                _ => break,
            }
        }
    }

    /// Lexes `...`, or an error token for one or two lone dots.
    fn lex_ellipsis(&mut self, start: SourcePosition) -> Token<'src> {
        let mut dots = 0;
        while dots < 3 && self.peek_char() == Some('.') {
            self.consume();
            dots += 1;
        }
        let span = self.make_span(start);
        if dots == 3 {
            Token::new(TokenKind::Ellipsis, span)
        } else {
            Token::new(
                TokenKind::Error {
                    message: format!("unexpected `{}` (use `...` for spreads)", ".".repeat(dots)),
                },
                span,
            )
        }
    }

    /// Lexes a name: `/[_A-Za-z][_0-9A-Za-z]*/`.
    fn lex_name(&mut self, start: SourcePosition) -> Token<'src> {
        let name_start = self.curr_byte_offset;
        self.consume();
        while let Some(ch) = self.peek_char() {
            if is_name_continue(ch) {
                self.consume();
            } else {
                break;
            }
        }
        let name = &self.source[name_start..self.curr_byte_offset];
        Token::new(TokenKind::name(name), self.make_span(start))
    }

    /// Lexes an integer or float literal: optional `-`, integer part,
    /// optional fraction, optional exponent.
    fn lex_number(&mut self, start: SourcePosition) -> Token<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                    return self.number_error(start, "leading zeros are not allowed");
                }
            }
            Some(ch) if ch.is_ascii_digit() => {
                while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                    self.consume();
                }
            }
            _ => {
                return Token::new(
                    TokenKind::Error {
                        message: "unexpected `-`".to_string(),
                    },
                    self.make_span(start),
                );
            }
        }

        // Fraction: a `.` followed by a digit (a bare `.` may be a spread).
        if self.peek_char() == Some('.')
            && matches!(self.peek_char_nth(1), Some(ch) if ch.is_ascii_digit())
        {
            is_float = true;
            self.consume();
            while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                self.consume();
            }
        }

        // Exponent.
        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                return self.number_error(start, "exponent requires digits");
            }
            while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                self.consume();
            }
        }

        // A number may not run directly into a name or another dot.
        if matches!(self.peek_char(), Some(ch) if is_name_start(ch) || ch == '.') {
            return self.number_error(start, "number cannot be followed by a name character");
        }

        let raw = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            TokenKind::float_value(raw)
        } else {
            TokenKind::int_value(raw)
        };
        Token::new(kind, self.make_span(start))
    }

    /// Consumes the rest of the current number-ish text and returns an error
    /// token covering it.
    fn number_error(&mut self, start: SourcePosition, reason: &str) -> Token<'src> {
        while matches!(self.peek_char(), Some(ch) if is_name_continue(ch) || ch == '.') {
            self.consume();
        }
        Token::new(
            TokenKind::Error {
                message: format!("invalid number: {reason}"),
            },
            self.make_span(start),
        )
    }

    /// Lexes a `"..."` string or `"""..."""` block string, storing the raw
    /// text (quotes included). Escape resolution happens later via
    /// [`TokenKind::parse_string_value`].
    fn lex_string(&mut self, start: SourcePosition) -> Token<'src> {
        let str_start = self.curr_byte_offset;

        if self.remaining().starts_with("\"\"\"") {
            self.consume();
            self.consume();
            self.consume();
            loop {
                if self.remaining().starts_with("\\\"\"\"") {
                    for _ in 0..4 {
                        self.consume();
                    }
                } else if self.remaining().starts_with("\"\"\"") {
                    self.consume();
                    self.consume();
                    self.consume();
                    let raw = &self.source[str_start..self.curr_byte_offset];
                    return Token::new(TokenKind::string_value(raw), self.make_span(start));
                } else if self.consume().is_none() {
                    return Token::new(
                        TokenKind::Error {
                            message: "unterminated block string".to_string(),
                        },
                        self.make_span(start),
                    );
                }
            }
        }

        self.consume();
        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    return Token::new(
                        TokenKind::Error {
                            message: "unterminated string literal".to_string(),
                        },
                        self.make_span(start),
                    );
                }
                Some('"') => {
                    self.consume();
                    let raw = &self.source[str_start..self.curr_byte_offset];
                    return Token::new(TokenKind::string_value(raw), self.make_span(start));
                }
                Some('\\') => {
                    self.consume();
                    // The escaped character is consumed blindly here; escape
                    // validity is checked by parse_string_value.
                    self.consume();
                }
                Some(_) => {
                    self.consume();
                }
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

/// Whether `c` can start a name.
fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Whether `c` can continue a name.
fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
