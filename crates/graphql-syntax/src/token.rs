use crate::SourceSpan;
use std::borrow::Cow;

/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) store only the
/// raw source text; use the `parse_*_value` helpers to obtain typed payloads.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: [`Lexer`] borrows string
/// slices directly from the source text using `Cow::Borrowed`, while token
/// sources without contiguous source text can use `Cow::Owned`.
///
/// # Matching Modes
///
/// Punctuators and `Eof` compare by identity; the payload-carrying variants
/// (`Name`, `IntValue`, `FloatValue`, `StringValue`) compare as a *class*,
/// ignoring the payload. See [`Parser`](crate::Parser) for the single
/// matching primitive that implements both modes.
///
/// [`Lexer`]: crate::token_source::Lexer
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'src> {
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    /// A GraphQL name (`/[_A-Za-z][_0-9A-Za-z]*/`).
    ///
    /// `true`, `false`, and `null` lex as ordinary names; the value grammar
    /// inspects the text.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including any negative sign
    /// (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(Cow<'src, str>),

    /// Raw source text of a string literal, including quotes
    /// (e.g. `"\"hello\\nworld\""`, `"\"\"\"block\"\"\""`).
    ///
    /// Use [`parse_string_value`](TokenKind::parse_string_value) to resolve
    /// escape sequences and block-string indentation.
    StringValue(Cow<'src, str>),

    /// End of input.
    Eof,

    /// A lexical error. The parser treats the first one it reaches as fatal.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

impl<'src> TokenKind<'src> {
    /// Create a `Name` token kind borrowing from the source text.
    #[inline]
    pub fn name(s: &'src str) -> Self {
        TokenKind::Name(Cow::Borrowed(s))
    }

    /// Create an `IntValue` token kind borrowing from the source text.
    #[inline]
    pub fn int_value(s: &'src str) -> Self {
        TokenKind::IntValue(Cow::Borrowed(s))
    }

    /// Create a `FloatValue` token kind borrowing from the source text.
    #[inline]
    pub fn float_value(s: &'src str) -> Self {
        TokenKind::FloatValue(Cow::Borrowed(s))
    }

    /// Create a `StringValue` token kind borrowing from the source text.
    #[inline]
    pub fn string_value(s: &'src str) -> Self {
        TokenKind::StringValue(Cow::Borrowed(s))
    }

    /// Parse an `IntValue` token's raw text into an `i32`.
    ///
    /// GraphQL `Int` is a signed 32-bit integer; out-of-range text is an
    /// error. Returns `None` when called on a non-`IntValue` kind.
    pub fn parse_int_value(&self) -> Option<Result<i32, std::num::ParseIntError>> {
        match self {
            TokenKind::IntValue(raw) => Some(raw.parse::<i32>()),
            _ => None,
        }
    }

    /// Parse a `FloatValue` token's raw text into an `f64`.
    ///
    /// Returns `None` when called on a non-`FloatValue` kind.
    pub fn parse_float_value(&self) -> Option<Result<f64, std::num::ParseFloatError>> {
        match self {
            TokenKind::FloatValue(raw) => Some(raw.parse::<f64>()),
            _ => None,
        }
    }

    /// Parse a `StringValue` token's raw text (including quotes) into its
    /// string content, resolving escape sequences and block-string
    /// indentation stripping.
    ///
    /// Returns `None` when called on a non-`StringValue` kind.
    pub fn parse_string_value(&self) -> Option<Result<String, StringValueError>> {
        match self {
            TokenKind::StringValue(raw) => Some(if let Some(inner) = raw
                .strip_prefix("\"\"\"")
                .and_then(|r| r.strip_suffix("\"\"\""))
            {
                Ok(dedent_block_string(inner))
            } else if let Some(inner) = raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
                resolve_escapes(inner)
            } else {
                Err(StringValueError::Unterminated)
            }),
            _ => None,
        }
    }

    /// Returns `true` for the payload-carrying literal variants (`Name`,
    /// `IntValue`, `FloatValue`, `StringValue`), which match as a class
    /// rather than by identity.
    pub fn is_payload_class(&self) -> bool {
        matches!(
            self,
            TokenKind::Name(_)
                | TokenKind::IntValue(_)
                | TokenKind::FloatValue(_)
                | TokenKind::StringValue(_)
        )
    }
}

/// Why a string literal's content could not be produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StringValueError {
    #[error("unterminated string literal")]
    Unterminated,
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
    #[error("invalid unicode escape sequence")]
    InvalidUnicodeEscape,
}

/// Resolve the escape sequences of a single-quoted (non-block) string body.
fn resolve_escapes(inner: &str) -> Result<String, StringValueError> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|c| c.to_digit(16))
                        .ok_or(StringValueError::InvalidUnicodeEscape)?;
                    code = code * 16 + digit;
                }
                let ch =
                    char::from_u32(code).ok_or(StringValueError::InvalidUnicodeEscape)?;
                out.push(ch);
            }
            Some(other) => return Err(StringValueError::InvalidEscape(other)),
            None => return Err(StringValueError::Unterminated),
        }
    }
    Ok(out)
}

/// Strip common indentation and blank delimiter lines from a block string
/// body, per the BlockStringValue algorithm of the GraphQL spec.
fn dedent_block_string(inner: &str) -> String {
    let inner = inner.replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = inner.split('\n').collect();

    // Common indent over all lines but the first.
    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        if indent < line.len() {
            common_indent = Some(match common_indent {
                Some(ci) => ci.min(indent),
                None => indent,
            });
        }
    }

    let mut stripped: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                *line
            } else {
                let ci = common_indent.unwrap_or(0).min(line.len());
                &line[ci..]
            }
        })
        .collect();

    while stripped
        .first()
        .is_some_and(|l| l.trim_matches([' ', '\t']).is_empty())
    {
        stripped.remove(0);
    }
    while stripped
        .last()
        .is_some_and(|l| l.trim_matches([' ', '\t']).is_empty())
    {
        stripped.pop();
    }

    stripped.join("\n")
}

/// A GraphQL token: a kind plus the source span it was lexed from.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub span: SourceSpan,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind<'src>, span: SourceSpan) -> Self {
        Self { kind, span }
    }
}
