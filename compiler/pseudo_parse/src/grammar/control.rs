//! Control-flow and function-definition productions.
//!
//! Every body comes in two shapes:
//! - inline: a single statement on the same line, whose value is kept
//! - block: `NEWLINE statements END`, which evaluates to NULL

use pseudo_ir::{Body, Expr, ExprKind, ForEachLoop, ForLoop, FunctionDef, IfCase, Keyword, TokenKind};

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `NEWLINE statements END | statement`
    fn body(&mut self) -> ParseResult<Body> {
        if self.cursor.eat(&TokenKind::Newline) {
            let block = self.statements()?;
            self.expect_keyword(Keyword::End)?;
            Ok(Body::new(block, true))
        } else {
            Ok(Body::new(self.statement()?, false))
        }
    }

    pub(crate) fn if_expr(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.current_span();
        let mut cases = Vec::new();
        let else_branch = self.if_cases(Keyword::If, &mut cases)?;
        Ok(Expr::new(
            ExprKind::If { cases, else_branch },
            self.cursor.span_from(start),
        ))
    }

    /// `(IF | ELIF) expr THEN body (ELIF ... | ELSE ... | END)?`
    ///
    /// Pushes the parsed cases and returns the else branch, if any.
    fn if_cases(&mut self, keyword: Keyword, cases: &mut Vec<IfCase>) -> ParseResult<Option<Body>> {
        self.expect_keyword(keyword)?;
        let cond = self.expr()?;
        self.expect_keyword(Keyword::Then)?;

        if self.cursor.eat(&TokenKind::Newline) {
            let block = self.statements()?;
            cases.push(IfCase {
                cond,
                body: Body::new(block, true),
            });
            if self.cursor.eat_keyword(Keyword::End) {
                return Ok(None);
            }
            if !self.cursor.check_keyword(Keyword::Elif) && !self.cursor.check_keyword(Keyword::Else) {
                return Err(self.error("Expected 'END'"));
            }
        } else {
            let stmt = self.statement()?;
            cases.push(IfCase {
                cond,
                body: Body::new(stmt, false),
            });
        }

        self.elif_or_else(cases)
    }

    fn elif_or_else(&mut self, cases: &mut Vec<IfCase>) -> ParseResult<Option<Body>> {
        if self.cursor.check_keyword(Keyword::Elif) {
            return self.if_cases(Keyword::Elif, cases);
        }
        if self.cursor.eat_keyword(Keyword::Else) {
            return self.body().map(Some);
        }
        Ok(None)
    }

    /// `FOR ident '=' expr TO expr (STEP expr)? THEN body`
    /// or `FOR EACH ident IN expr THEN body`
    pub(crate) fn for_expr(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.current_span();
        self.expect_keyword(Keyword::For)?;

        if self.cursor.eat_keyword(Keyword::Each) {
            let var = self.expect_ident()?;
            self.expect_keyword(Keyword::In)?;
            let iterable = self.expr()?;
            self.expect_keyword(Keyword::Then)?;
            let body = self.body()?;
            return Ok(Expr::new(
                ExprKind::ForEach(Box::new(ForEachLoop {
                    var,
                    iterable,
                    body,
                })),
                self.cursor.span_from(start),
            ));
        }

        let var = self.expect_ident()?;
        self.expect(&TokenKind::Eq, "Expected '='")?;
        let from = self.expr()?;
        self.expect_keyword(Keyword::To)?;
        let to = self.expr()?;
        let step = if self.cursor.eat_keyword(Keyword::Step) {
            Some(self.expr()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::Then)?;
        let body = self.body()?;

        Ok(Expr::new(
            ExprKind::For(Box::new(ForLoop {
                var,
                start: from,
                end: to,
                step,
                body,
            })),
            self.cursor.span_from(start),
        ))
    }

    /// `WHILE expr THEN body`
    pub(crate) fn while_expr(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.current_span();
        self.expect_keyword(Keyword::While)?;
        let cond = self.expr()?;
        self.expect_keyword(Keyword::Then)?;
        let body = self.body()?;
        Ok(Expr::new(
            ExprKind::While {
                cond: Box::new(cond),
                body,
            },
            self.cursor.span_from(start),
        ))
    }

    /// `REPEAT UNTIL expr THEN? body` or `REPEAT expr TIMES body`
    pub(crate) fn repeat_expr(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.current_span();
        self.expect_keyword(Keyword::Repeat)?;

        let kind = if self.cursor.eat_keyword(Keyword::Until) {
            let cond = self.expr()?;
            self.cursor.eat_keyword(Keyword::Then);
            let body = self.body()?;
            ExprKind::RepeatUntil {
                cond: Box::new(cond),
                body,
            }
        } else {
            let count = self.expr()?;
            self.expect_keyword(Keyword::Times)?;
            let body = self.body()?;
            ExprKind::RepeatTimes {
                count: Box::new(count),
                body,
            }
        };

        Ok(Expr::new(kind, self.cursor.span_from(start)))
    }

    /// `(FUN | PROCEDURE) ident? '(' params? ')' ( '->' expr | NEWLINE statements END )`
    pub(crate) fn function_def(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.current_span();
        if !self.cursor.eat_keyword(Keyword::Fun) {
            self.expect_keyword(Keyword::Procedure)?;
        }

        let name = match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                self.expect(&TokenKind::LParen, "Expected '('")?;
                Some(name.clone())
            }
            _ => {
                self.expect(&TokenKind::LParen, "Expected identifier or '('")?;
                None
            }
        };

        let mut params = Vec::new();
        if let TokenKind::Ident(first) = self.cursor.current_kind() {
            self.cursor.advance();
            params.push(first.clone());
            while self.cursor.eat(&TokenKind::Comma) {
                params.push(self.expect_ident()?);
            }
            self.expect(&TokenKind::RParen, "Expected ',' or ')'")?;
        } else {
            self.expect(&TokenKind::RParen, "Expected identifier or ')'")?;
        }

        let (body, auto_return) = if self.cursor.eat(&TokenKind::Arrow) {
            (self.expr()?, true)
        } else {
            self.expect(&TokenKind::Newline, "Expected '->' or NEWLINE")?;
            let block = self.statements()?;
            self.expect_keyword(Keyword::End)?;
            (block, false)
        };

        Ok(Expr::new(
            ExprKind::FunctionDef(
                FunctionDef {
                    name,
                    params,
                    body,
                    auto_return,
                }
                .into(),
            ),
            self.cursor.span_from(start),
        ))
    }
}
