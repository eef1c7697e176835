use crate::SourcePosition;

/// The span of some source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: position of the first character of the source text
/// - `end_exclusive`: position immediately after the last character
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl SourceSpan {
    pub fn new(start_inclusive: SourcePosition, end_exclusive: SourcePosition) -> Self {
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// A zero-width span anchored at a single position.
    pub fn empty(at: SourcePosition) -> Self {
        Self {
            start_inclusive: at,
            end_exclusive: at,
        }
    }
}
