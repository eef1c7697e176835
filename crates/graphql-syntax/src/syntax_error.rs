use crate::SourcePosition;
use crate::SourceSpan;
use crate::SyntaxErrorKind;

/// A fatal syntax error with location information.
///
/// Parsing is fail-fast: the first syntactic anomaly aborts the parse and is
/// surfaced as exactly one `SyntaxError`. The error is self-contained — it
/// owns a copy of the source text, so diagnostics can be rendered after the
/// borrowed AST lifetime has ended.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct SyntaxError {
    /// The source text that was being parsed.
    source_text: String,

    /// The span where the error was detected:
    /// - for "expected X" errors, where X should have appeared
    /// - for "unexpected token" errors, the offending token's span
    span: SourceSpan,

    /// Categorized error kind carrying the `got`/`expected` token displays.
    kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub(crate) fn new(
        source: impl Into<String>,
        span: SourceSpan,
        kind: SyntaxErrorKind,
    ) -> Self {
        Self {
            source_text: source.into(),
            span,
            kind,
        }
    }

    /// Returns the source text that was being parsed.
    pub fn source(&self) -> &str {
        &self.source_text
    }

    /// Returns the span where the error was detected.
    pub fn span(&self) -> &SourceSpan {
        &self.span
    }

    /// Returns the position where the error starts.
    pub fn start(&self) -> &SourcePosition {
        &self.span.start_inclusive
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Formats this error as a single-line summary, e.g.
    ///
    /// ```text
    /// Syntax error. Got token `Type` instead of `on` at position 1:37
    /// ```
    ///
    /// Line and column are displayed 1-based.
    pub fn format_oneline(&self) -> String {
        let line = self.span.start_inclusive.line() + 1;
        let col = self.span.start_inclusive.col() + 1;
        match &self.kind {
            SyntaxErrorKind::Expected { expected, got } => format!(
                "Syntax error. Got token `{got}` instead of `{expected}` at position {line}:{col}"
            ),
            SyntaxErrorKind::Unexpected { got } => {
                format!("Syntax error. Unexpected token `{got}` at position {line}:{col}")
            }
            SyntaxErrorKind::InvalidLiteral { message } => {
                format!("Syntax error. {message} at position {line}:{col}")
            }
        }
    }

    /// Formats this error as a multi-line diagnostic with a source snippet:
    ///
    /// ```text
    /// error: expected `on`, found `Type`
    ///   --> 1:37
    ///    |
    ///  1 | { ...MissingOn } fragment MissingOn Type
    ///    |                                     ^^^^
    /// ```
    pub fn format_detailed(&self) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.kind.to_string());
        output.push('\n');

        let line = self.span.start_inclusive.line() + 1;
        let col = self.span.start_inclusive.col() + 1;
        output.push_str(&format!("  --> {line}:{col}\n"));

        if let Some(snippet) = self.format_source_snippet() {
            output.push_str(&snippet);
        }

        output
    }

    /// Formats the underlined source line for the error span, if the line
    /// exists in the source.
    fn format_source_snippet(&self) -> Option<String> {
        let line_num = self.span.start_inclusive.line();
        let line_content = self.source_text.lines().nth(line_num)?;

        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let col_start = self.span.start_inclusive.col();
        let col_end = if self.span.end_exclusive.line() == line_num {
            self.span.end_exclusive.col()
        } else {
            line_content.chars().count()
        };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));
        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }
}
