//! Character cursor that tracks line and column as it moves.

use pseudo_ir::{Position, SourceId, Span};

/// Forward cursor over source text.
///
/// The cursor is [`Copy`]; saving a copy and restoring it later is how the
/// lexer rewinds when a number turns out to be an identifier.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    source: SourceId,
    pos: Position,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: SourceId, text: &'a str) -> Self {
        Cursor {
            text,
            source,
            pos: Position::START,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> Position {
        self.pos
    }

    #[inline]
    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos.offset as usize..]
    }

    /// Current character, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the current character.
    #[inline]
    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos = self.pos.advance(ch);
        Some(ch)
    }

    /// Consume `ch` if it is the current character.
    #[inline]
    pub(crate) fn eat(&mut self, ch: char) -> bool {
        if self.current() == Some(ch) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.current() {
            if !pred(ch) {
                break;
            }
            self.bump();
        }
    }

    /// Jump to just before the next `\n`, or to end of input.
    ///
    /// The newline itself is left for the caller so it still separates
    /// statements.
    pub(crate) fn skip_to_line_end(&mut self) {
        let rest = self.rest();
        let skipped = match memchr::memchr(b'\n', rest.as_bytes()) {
            Some(idx) => &rest[..idx],
            None => rest,
        };
        self.pos = Position::new(
            self.pos.offset + skipped.len() as u32,
            self.pos.line,
            self.pos.column + skipped.chars().count() as u32,
        );
    }

    /// Span from `start` to the current position.
    #[inline]
    pub(crate) fn span_from(&self, start: Position) -> Span {
        Span::new(self.source, start, self.pos)
    }

    /// Text from `start` to the current position.
    #[inline]
    pub(crate) fn slice_from(&self, start: Position) -> &'a str {
        &self.text[start.offset as usize..self.pos.offset as usize]
    }
}

#[cfg(test)]
mod tests;
