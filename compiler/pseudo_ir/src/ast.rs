//! AST nodes.
//!
//! The tree is built once by the parser and never mutated afterwards. Each
//! node owns its children and carries the span covering them. Function
//! definitions sit behind an `Rc` so a runtime function value can keep its
//! body alive without cloning the subtree.

use std::fmt;
use std::rc::Rc;

use crate::Span;

/// An expression node with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants, one per grammar production.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Int(i64),
    Float(f64),
    Str(String),

    /// `[a, b, c]`
    List(Vec<Expr>),

    /// A statement list. Evaluates to a list of the statement values.
    Block(Vec<Expr>),

    /// Variable read.
    Var(String),

    /// `VAR name = value` or `name = value`
    Assign { name: String, value: Box<Expr> },

    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `IF c THEN .. ELIF c THEN .. ELSE ..`
    If {
        cases: Vec<IfCase>,
        else_branch: Option<Body>,
    },

    /// `FOR i = start TO end [STEP s] THEN body`
    For(Box<ForLoop>),

    /// `FOR EACH x IN list THEN body`
    ForEach(Box<ForEachLoop>),

    /// `WHILE cond THEN body`
    While { cond: Box<Expr>, body: Body },

    /// `REPEAT count TIMES body`
    RepeatTimes { count: Box<Expr>, body: Body },

    /// `REPEAT UNTIL cond [THEN] body`
    RepeatUntil { cond: Box<Expr>, body: Body },

    FunctionDef(Rc<FunctionDef>),

    Call { callee: Box<Expr>, args: Vec<Expr> },

    Return(Option<Box<Expr>>),
    Continue,
    Break,
}

/// The body of a branch or loop.
///
/// `returns_null` is set for the block form (`NEWLINE ... END`); the
/// construct then evaluates to NULL instead of the collected values.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub expr: Box<Expr>,
    pub returns_null: bool,
}

impl Body {
    pub fn new(expr: Expr, returns_null: bool) -> Self {
        Body {
            expr: Box::new(expr),
            returns_null,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfCase {
    pub cond: Expr,
    pub body: Body,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop {
    pub var: String,
    pub start: Expr,
    pub end: Expr,
    pub step: Option<Expr>,
    pub body: Body,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForEachLoop {
    pub var: String,
    pub iterable: Expr,
    pub body: Body,
}

/// `FUN name(params) -> expr` or `FUN name(params) NEWLINE ... END`.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
    /// `None` for anonymous functions.
    pub name: Option<String>,
    pub params: Vec<String>,
    pub body: Expr,
    /// Arrow form: the body value is the return value.
    pub auto_return: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "MOD",
            BinaryOp::Pow => "**",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Pos,
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Pos => "+",
            UnaryOp::Not => "NOT",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
