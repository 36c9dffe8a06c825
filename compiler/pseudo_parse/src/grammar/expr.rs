//! Expression productions, lowest precedence first.
//!
//! ```text
//! expr    = VAR ident '=' expr | ident '=' expr | comp (( AND | OR ) comp)*
//! comp    = NOT comp | arith (( '==' | '!=' | '<' | '>' | '<=' | '>=' ) arith)*
//! arith   = term (( '+' | '-' ) term)*
//! term    = factor (( '*' | '/' | MOD ) factor)*
//! factor  = ( '+' | '-' ) factor | power
//! power   = call ( '**' factor )*
//! call    = atom ( '(' args? ')' )*
//! atom    = number | string | ident | '(' expr ')' | list
//!         | if | for | while | repeat | fun
//! ```

use pseudo_ir::{BinaryOp, Expr, ExprKind, Keyword, TokenKind, UnaryOp};
use pseudo_stack::ensure_sufficient_stack;

use crate::{ParseResult, Parser};

const EXPECTED_EXPR: &str = "Expected 'VAR', 'IF', 'FOR', 'WHILE', 'REPEAT', 'FUN', int, float, \
     identifier, '+', '-', '(', '[' or 'NOT'";
const EXPECTED_COMPARISON: &str = "Expected int, float, identifier, '+', '-', '(', '[' or 'NOT'";
const EXPECTED_ATOM: &str =
    "Expected int, float, identifier, '[', '(', 'IF', 'FOR', 'WHILE', 'REPEAT', 'FUN'";
const EXPECTED_ARGUMENT: &str =
    "Expected ')', 'VAR', int, float, identifier, '+', '-', '(', '[' or 'NOT'";
const EXPECTED_ELEMENT: &str =
    "Expected ']', 'VAR', int, float, identifier, '+', '-', '(', '[' or 'NOT'";

type Production<'a> = fn(&mut Parser<'a>) -> ParseResult<Expr>;

fn logic_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Keyword(Keyword::And) => Some(BinaryOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinaryOp::Or),
        _ => None,
    }
}

fn comparison_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::EqEq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        _ => None,
    }
}

fn additive_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Mul => Some(BinaryOp::Mul),
        TokenKind::Div => Some(BinaryOp::Div),
        TokenKind::Keyword(Keyword::Mod) => Some(BinaryOp::Mod),
        _ => None,
    }
}

fn power_op(kind: &TokenKind) -> Option<BinaryOp> {
    matches!(kind, TokenKind::Pow).then_some(BinaryOp::Pow)
}

impl<'a> Parser<'a> {
    pub(crate) fn expr(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.expr_inner())
    }

    fn expr_inner(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.current_span();

        if self.cursor.eat_keyword(Keyword::Var) {
            let name = self.expect_ident()?;
            self.expect(&TokenKind::Eq, "Expected '='")?;
            let value = self.expr()?;
            let span = start.merge(value.span);
            return Ok(Expr::new(
                ExprKind::Assign {
                    name,
                    value: Box::new(value),
                },
                span,
            ));
        }

        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            if self.cursor.peek_kind() == &TokenKind::Eq {
                self.cursor.advance();
                self.cursor.advance();
                let value = self.expr()?;
                let span = start.merge(value.span);
                return Ok(Expr::new(
                    ExprKind::Assign {
                        name: name.clone(),
                        value: Box::new(value),
                    },
                    span,
                ));
            }
        }

        let pos = self.cursor.position();
        let result = self.binary_chain(Parser::comparison, Parser::comparison, logic_op);
        self.or_expected(result, pos, EXPECTED_EXPR)
    }

    /// Left-associative chain: `operand (op rhs)*`.
    fn binary_chain(
        &mut self,
        operand: Production<'a>,
        rhs: Production<'a>,
        op_of: fn(&TokenKind) -> Option<BinaryOp>,
    ) -> ParseResult<Expr> {
        let mut left = operand(self)?;
        while let Some(op) = op_of(self.cursor.current_kind()) {
            self.cursor.advance();
            let right = rhs(self)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.current_span();
        if self.cursor.eat_keyword(Keyword::Not) {
            let operand = ensure_sufficient_stack(|| self.comparison())?;
            let span = start.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                },
                span,
            ));
        }

        let pos = self.cursor.position();
        let result = self.binary_chain(Parser::arith, Parser::arith, comparison_op);
        self.or_expected(result, pos, EXPECTED_COMPARISON)
    }

    fn arith(&mut self) -> ParseResult<Expr> {
        self.binary_chain(Parser::term, Parser::term, additive_op)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        self.binary_chain(Parser::factor, Parser::factor, multiplicative_op)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| {
            let start = self.cursor.current_span();
            let op = match self.cursor.current_kind() {
                TokenKind::Plus => UnaryOp::Pos,
                TokenKind::Minus => UnaryOp::Neg,
                _ => return self.power(),
            };
            self.cursor.advance();
            let operand = self.factor()?;
            let span = start.merge(operand.span);
            Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ))
        })
    }

    /// The right operand is a full `factor`, which makes `**` right-associative.
    fn power(&mut self) -> ParseResult<Expr> {
        self.binary_chain(Parser::call, Parser::factor, power_op)
    }

    fn call(&mut self) -> ParseResult<Expr> {
        let mut callee = self.atom()?;

        while self.cursor.eat(&TokenKind::LParen) {
            let mut args = Vec::new();
            if !self.cursor.eat(&TokenKind::RParen) {
                let pos = self.cursor.position();
                let first = self.expr();
                args.push(self.or_expected(first, pos, EXPECTED_ARGUMENT)?);
                while self.cursor.eat(&TokenKind::Comma) {
                    args.push(self.expr()?);
                }
                self.expect(&TokenKind::RParen, "Expected ',' or ')'")?;
            }
            let span = self.cursor.span_from(callee.span);
            callee = Expr::new(
                ExprKind::Call {
                    callee: Box::new(callee),
                    args,
                },
                span,
            );
        }

        Ok(callee)
    }

    fn atom(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.current();
        let span = token.span;
        let kind = match &token.kind {
            TokenKind::Int(n) => ExprKind::Int(*n),
            TokenKind::Float(bits) => ExprKind::Float(f64::from_bits(*bits)),
            TokenKind::Str(s) => ExprKind::Str(s.clone()),
            TokenKind::Ident(name) => ExprKind::Var(name.clone()),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.expr()?;
                self.expect(&TokenKind::RParen, "Expected ')'")?;
                return Ok(inner);
            }
            TokenKind::LBracket => return self.list(),
            TokenKind::Keyword(Keyword::If) => return self.if_expr(),
            TokenKind::Keyword(Keyword::For) => return self.for_expr(),
            TokenKind::Keyword(Keyword::While) => return self.while_expr(),
            TokenKind::Keyword(Keyword::Repeat) => return self.repeat_expr(),
            TokenKind::Keyword(Keyword::Fun | Keyword::Procedure) => return self.function_def(),
            _ => return Err(self.error(EXPECTED_ATOM)),
        };
        self.cursor.advance();
        Ok(Expr::new(kind, span))
    }

    /// `'[' ( expr ( ',' expr )* )? ']'`
    fn list(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.current_span();
        self.expect(&TokenKind::LBracket, "Expected '['")?;
        let mut elements = Vec::new();

        if !self.cursor.eat(&TokenKind::RBracket) {
            let pos = self.cursor.position();
            let first = self.expr();
            elements.push(self.or_expected(first, pos, EXPECTED_ELEMENT)?);
            while self.cursor.eat(&TokenKind::Comma) {
                elements.push(self.expr()?);
            }
            self.expect(&TokenKind::RBracket, "Expected ',' or ']'")?;
        }

        Ok(Expr::new(ExprKind::List(elements), self.cursor.span_from(start)))
    }
}
