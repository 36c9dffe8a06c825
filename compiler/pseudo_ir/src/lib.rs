//! Pseudo IR - shared data types for every phase.
//!
//! This crate contains:
//! - Positions and spans for source locations
//! - The source map that owns file names and text
//! - Tokens produced by the lexer
//! - AST nodes produced by the parser
//!
//! Nothing here depends on any other `pseudo_*` crate.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod position;
mod source;
mod span;
mod token;

pub use ast::{BinaryOp, Body, Expr, ExprKind, ForEachLoop, ForLoop, FunctionDef, IfCase, UnaryOp};
pub use position::Position;
pub use source::{SourceFile, SourceId, SourceMap};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
