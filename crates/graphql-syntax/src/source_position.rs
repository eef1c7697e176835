/// A position in the source text.
///
/// This is a pure data struct with no mutation methods; the lexer is
/// responsible for computing position values as it scans input.
///
/// # Indexing Convention
///
/// **All values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col`: character count within the current line (a 4-byte character
///   still advances the column by 1)
/// - `byte_offset`: byte offset from the start of the document
///
/// Error renderers add 1 to `line` and `col` for human display.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// Character count within the current line (0-based)
    col: usize,

    /// Byte offset from start of document (0-based)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new position from 0-based line, column, and byte offset.
    pub fn new(line: usize, col: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
