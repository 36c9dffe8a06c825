//! Token cursor for navigating the token stream.

use pseudo_ir::{Keyword, Span, Token, TokenKind};

/// Cursor over a token slice that always ends in `Eof`.
///
/// Advancing at `Eof` is a no-op, so the position never leaves the slice.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// `tokens` must be non-empty and end with `Eof`.
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(matches!(
            tokens.last().map(|t| &t.kind),
            Some(TokenKind::Eof)
        ));
        Cursor { tokens, pos: 0 }
    }

    /// Index of the current token. Used to measure progress.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Rewind (or jump) to a position saved earlier.
    pub(crate) fn set_position(&mut self, pos: usize) {
        if pos != self.pos {
            tracing::trace!(from = self.pos, to = pos, "rewinding token cursor");
        }
        self.pos = pos.min(self.tokens.len() - 1);
    }

    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one.
    pub(crate) fn peek_kind(&self) -> &'a TokenKind {
        let idx = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    /// Span of the most recently consumed token, or the current span at the
    /// start of input.
    pub(crate) fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(idx) => self.tokens[idx].span,
            None => self.current_span(),
        }
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn check_keyword(&self, kw: Keyword) -> bool {
        self.current_kind().is_keyword(kw)
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it is the keyword `kw`.
    pub(crate) fn eat_keyword(&mut self, kw: Keyword) -> bool {
        if self.check_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Span from `start` through the last consumed token.
    pub(crate) fn span_from(&self, start: Span) -> Span {
        if self.pos == 0 {
            return start;
        }
        start.merge(self.previous_span())
    }
}
