//! Buffered stream of [`Token`]s over some [`TokenSource`] with a bounded
//! lookahead buffer.

use crate::token::Token;
use crate::token_source::TokenSource;
use smallvec::SmallVec;

/// Buffered stream of [`Token`]s over some [`TokenSource`].
///
/// Centralizes buffering, peeking, and lookahead. The grammar needs a
/// lookahead of exactly one token past the current one (descriptions before
/// type-system keywords), so the buffer holds at most two unconsumed tokens;
/// `SmallVec<[Token; 2]>` keeps it off the heap.
///
/// The token source terminates with an `Eof` token, so after construction
/// `peek()` only returns `None` once `Eof` itself has been consumed — which
/// the grammar never does twice.
///
/// # Type Parameters
///
/// * `'src` - lifetime of the source text the tokens were lexed from.
/// * `TSource` - the underlying token source
///   (i.e. `Iterator<Item = Token>`).
pub struct TokenStream<'src, TSource: TokenSource<'src>> {
    token_source: TSource,
    /// Unconsumed tokens, front first. Grows only as far as lookahead
    /// requires.
    buffer: SmallVec<[Token<'src>; 2]>,
}

impl<'src, TSource: TokenSource<'src>> TokenStream<'src, TSource> {
    /// Creates a new token stream from a token source.
    pub fn new(token_source: TSource) -> Self {
        Self {
            token_source,
            buffer: SmallVec::new(),
        }
    }

    /// Fill the buffer to ensure it holds at least `count` tokens, stopping
    /// early if the source is exhausted.
    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => self.buffer.push(token),
                None => break,
            }
        }
    }

    /// Advance past the next token and return it (owned).
    ///
    /// Returns `None` if the stream is exhausted.
    pub fn consume(&mut self) -> Option<Token<'src>> {
        self.ensure_buffer_has(1);
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.buffer.remove(0))
        }
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<&Token<'src>> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed from the next unconsumed
    /// token). `peek_nth(0)` is equivalent to `peek()`.
    ///
    /// The grammar only ever calls this with `n <= 1`; see
    /// [`Parser`](crate::Parser) for the single `n = 1` call site.
    pub fn peek_nth(&mut self, n: usize) -> Option<&Token<'src>> {
        self.ensure_buffer_has(n + 1);
        self.buffer.get(n)
    }
}
