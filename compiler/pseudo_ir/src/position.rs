//! Cursor positions inside a source file.

use std::fmt;

/// A point in the source text.
///
/// `offset` is a byte offset; `line` and `column` are zero-based, with
/// `column` counted in characters. A position is a plain value: consumers
/// copy it and advance the copy, never an attached one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first character of a file.
    pub const START: Position = Position {
        offset: 0,
        line: 0,
        column: 0,
    };

    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }

    /// Move past `ch`, returning the position after it.
    ///
    /// The offset always grows by the UTF-8 width of `ch`. A newline moves to
    /// column zero of the next line.
    #[inline]
    #[must_use]
    pub fn advance(self, ch: char) -> Self {
        let offset = self.offset + ch.len_utf8() as u32;
        if ch == '\n' {
            Position {
                offset,
                line: self.line + 1,
                column: 0,
            }
        } else {
            Position {
                offset,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.line + 1, self.column + 1, self.offset)
    }
}

crate::static_assert_size!(Position, 12);

#[cfg(test)]
mod tests;
