//! Parse error types.

use std::fmt;

use pseudo_diagnostic::{Diagnostic, ErrorKind};
use pseudo_ir::Span;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    InvalidSyntax,
    /// A statement was requested at end of input. Statement lists stop
    /// quietly on this kind; it only escapes if a construct is left open.
    EndOfFile,
}

/// A syntax error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: Span,
    /// Index of the token the parser had reached. Comparing positions is how
    /// the error from the furthest partial parse is chosen.
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span, position: usize) -> Self {
        ParseError {
            kind,
            message: message.into(),
            span,
            position,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::new(ErrorKind::InvalidSyntax, self.message, self.span)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.span)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(err: ParseError) -> Self {
        err.into_diagnostic()
    }
}
