//! Byte ranges into source text.
//!
//! Offsets are `u32` so a span stays 8 bytes; a single line typed into
//! the read loop never comes close to that limit.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// A byte offset did not fit in a span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("source offset {offset} does not fit in a span (max {max})", max = u32::MAX)]
pub struct SpanError {
    pub offset: usize,
}

/// Half-open byte range `[start, end)` into one source string.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for tokens and nodes that were not read from source.
    pub const DUMMY: Span = Span::point(0);

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span::new(offset, offset)
    }

    /// Narrow a `usize` range, failing on the first offset past `u32::MAX`.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        let narrow = |offset: usize| u32::try_from(offset).map_err(|_| SpanError { offset });
        Ok(Span::new(narrow(range.start)?, narrow(range.end)?))
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Range usable for slicing the source string.
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
