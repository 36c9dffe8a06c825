//! Lexer errors.

use std::fmt;

use pseudo_diagnostic::{Diagnostic, ErrorKind};
use pseudo_ir::Span;

/// A lexer error. Lexing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    IllegalChar(char),
    /// A two-character operator whose second character is missing, such as
    /// `!` without `=`.
    ExpectedChar { expected: char, after: char },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::IllegalChar(ch) => write!(f, "'{ch}'"),
            LexErrorKind::ExpectedChar { expected, after } => {
                write!(f, "'{expected}' (after '{after}')")
            }
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let kind = match self.kind {
            LexErrorKind::IllegalChar(_) => ErrorKind::IllegalCharacter,
            LexErrorKind::ExpectedChar { .. } => ErrorKind::ExpectedCharacter,
        };
        Diagnostic::new(kind, self.kind.to_string(), self.span)
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        err.into_diagnostic()
    }
}
