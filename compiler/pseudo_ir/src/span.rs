//! Source location spans.

use std::fmt;

use crate::{Position, SourceId};

/// A half-open range `[start, end)` inside one source file.
///
/// Every token and AST node carries one. The file name and full text are
/// reached through [`SourceId`] in a [`crate::SourceMap`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub source: SourceId,
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub const fn new(source: SourceId, start: Position, end: Position) -> Self {
        Span { source, start, end }
    }

    /// Zero-width span at `pos`.
    #[inline]
    pub const fn point(source: SourceId, pos: Position) -> Self {
        Span {
            source,
            start: pos,
            end: pos,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.offset - self.start.offset
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        let start = if other.start.offset < self.start.offset {
            other.start
        } else {
            self.start
        };
        let end = if other.end.offset > self.end.offset {
            other.end
        } else {
            self.end
        };
        Span {
            source: self.source,
            start,
            end,
        }
    }

    /// Convert to a byte range for slicing the source text.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start.offset as usize..self.end.offset as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.offset, self.end.offset)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.offset, self.end.offset)
    }
}

#[cfg(test)]
mod tests;
