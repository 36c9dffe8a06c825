//! Recursive descent parser for Pseudo.
//!
//! [`parse`] turns a token stream into a single `Block` expression holding
//! the top-level statements.
//!
//! # Error selection
//!
//! Every error records the token index the parser had reached. When an
//! optional construct fails (a trailing statement in a list, the value after
//! `RETURN`) the cursor is rewound and parsing carries on, but the failure
//! is remembered. If parsing later fails at a shallower index, the
//! remembered error from the longer attempt is reported instead, since it
//! points at what actually went wrong.

mod cursor;
mod error;
mod grammar;

use pseudo_ir::{Expr, ExprKind, Keyword, Span, Token, TokenKind};
use pseudo_stack::ensure_sufficient_stack;

use crate::cursor::Cursor;
pub use crate::error::{ParseError, ParseErrorKind};

pub type ParseResult<T> = Result<T, ParseError>;

const EXPECTED_STATEMENT: &str = "Expected 'RETURN', 'CONTINUE', 'BREAK', 'VAR', 'IF', 'FOR', \
     'WHILE', 'REPEAT', 'FUN', int, float, identifier, '+', '-', '(', '[' or 'NOT'";

/// Parse a complete program.
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
        let span = tokens.last().map(|t| t.span).unwrap_or_default();
        return Err(ParseError::new(
            ParseErrorKind::EndOfFile,
            "Token stream is not terminated",
            span,
            tokens.len(),
        ));
    }
    Parser::new(tokens).parse_program()
}

/// Parser state.
struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Furthest error from an attempt that was rewound.
    abandoned: Option<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            abandoned: None,
        }
    }

    fn parse_program(mut self) -> ParseResult<Expr> {
        let result = self.statements().and_then(|program| {
            if self.cursor.is_at_end() {
                Ok(program)
            } else {
                Err(self.error("Expected '+', '-', '*', or '/'"))
            }
        });
        result.map_err(|err| self.furthest(err))
    }

    /// Error at the current token.
    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(
            ParseErrorKind::InvalidSyntax,
            message,
            self.cursor.current_span(),
            self.cursor.position(),
        )
    }

    /// Keep `err` if it went further than anything abandoned so far.
    fn abandon(&mut self, err: ParseError) {
        if err.kind == ParseErrorKind::EndOfFile {
            return;
        }
        let further = self
            .abandoned
            .as_ref()
            .map_or(true, |prev| err.position > prev.position);
        if further {
            self.abandoned = Some(err);
        }
    }

    /// Pick between a final error and the furthest abandoned one.
    fn furthest(&mut self, err: ParseError) -> ParseError {
        match self.abandoned.take() {
            Some(abandoned) if abandoned.position > err.position => abandoned,
            _ => err,
        }
    }

    /// Replace a child error with `message` when the child made no progress
    /// past `start`.
    fn or_expected<T>(&self, result: ParseResult<T>, start: usize, message: &str) -> ParseResult<T> {
        result.map_err(|err| {
            if err.position == start && err.kind == ParseErrorKind::InvalidSyntax {
                self.error(message)
            } else {
                err
            }
        })
    }

    /// Consume `kind` or fail with `message`.
    fn expect(&mut self, kind: &TokenKind, message: &str) -> ParseResult<()> {
        if self.cursor.eat(kind) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    fn expect_keyword(&mut self, kw: Keyword) -> ParseResult<()> {
        if self.cursor.eat_keyword(kw) {
            Ok(())
        } else {
            Err(self.error(format!("Expected '{kw}'")))
        }
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(name.clone())
            }
            _ => Err(self.error("Expected identifier")),
        }
    }

    fn skip_newlines(&mut self) -> usize {
        let mut count = 0;
        while self.cursor.eat(&TokenKind::Newline) {
            count += 1;
        }
        count
    }

    /// `statements = NEWLINE* statement (NEWLINE+ statement)* NEWLINE*`
    ///
    /// The list ends at the first token that cannot start a statement. That
    /// attempt is rewound and its error kept as a candidate.
    pub(crate) fn statements(&mut self) -> ParseResult<Expr> {
        self.skip_newlines();
        let start = self.cursor.current_span();
        let mut statements = Vec::new();

        match self.statement() {
            Ok(stmt) => statements.push(stmt),
            Err(err) if err.kind == ParseErrorKind::EndOfFile => {
                return Ok(Expr::new(
                    ExprKind::Block(statements),
                    Span::point(start.source, start.start),
                ));
            }
            Err(err) => return Err(err),
        }

        loop {
            if self.skip_newlines() == 0 {
                break;
            }
            let saved = self.cursor.position();
            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.cursor.set_position(saved);
                    self.abandon(err);
                    break;
                }
            }
        }

        let span = match statements.last() {
            Some(last) => start.merge(last.span),
            None => start,
        };
        Ok(Expr::new(ExprKind::Block(statements), span))
    }

    /// `statement = RETURN expr? | CONTINUE | BREAK | expr`
    pub(crate) fn statement(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Eof => Err(ParseError::new(
                ParseErrorKind::EndOfFile,
                "Unexpected end of file",
                start,
                self.cursor.position(),
            )),
            TokenKind::Keyword(Keyword::Return) => {
                self.cursor.advance();
                let saved = self.cursor.position();
                let value = match self.expr() {
                    Ok(value) => Some(Box::new(value)),
                    Err(err) => {
                        self.cursor.set_position(saved);
                        self.abandon(err);
                        None
                    }
                };
                Ok(Expr::new(ExprKind::Return(value), self.cursor.span_from(start)))
            }
            TokenKind::Keyword(Keyword::Continue) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Continue, start))
            }
            TokenKind::Keyword(Keyword::Break) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Break, start))
            }
            _ => {
                let pos = self.cursor.position();
                let result = self.expr();
                self.or_expected(result, pos, EXPECTED_STATEMENT)
            }
        }
    }
}
