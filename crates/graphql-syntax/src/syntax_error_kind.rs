/// Categorizes syntax errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise; the full testable rendering
/// (with source position) lives in [`SyntaxError`](crate::SyntaxError)'s
/// `Display`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A specific token or keyword was required but something else was found.
    ///
    /// # Example
    /// ```text
    /// fragment MissingOn Type
    ///                    ^^^^ expected `on`, found `Type`
    /// ```
    #[error("expected `{expected}`, found `{got}`")]
    Expected {
        /// Display form of the expected token kind or keyword.
        expected: String,
        /// Display form of the token that was found.
        got: String,
    },

    /// A token appeared where no specific expectation was active, e.g. an
    /// unrecognized leading token in definition dispatch or `on` in fragment
    /// name position.
    #[error("unexpected token `{got}`")]
    Unexpected {
        /// Display form of the token that was found.
        got: String,
    },

    /// A literal could not be lexed or converted: invalid characters,
    /// malformed numbers, out-of-range integers, bad escape sequences.
    #[error("{message}")]
    InvalidLiteral { message: String },
}
