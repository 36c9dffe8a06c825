//! Runtime errors and the control-flow channel.
//!
//! Every evaluation step returns [`EvalResult`]. The error side carries
//! both real failures and the non-local signals (`RETURN`, `BREAK`,
//! `CONTINUE`), so `?` threads all of them up the tree and only loops and
//! call boundaries match on the signal variants.

use std::fmt;

use pseudo_diagnostic::{Diagnostic, ErrorKind, TraceFrame};
use pseudo_ir::Span;

use crate::robot::GridError;
use crate::value::Value;

/// Result of evaluating one node.
pub type EvalResult = Result<Value, ControlAction>;

/// Which list operation went out of range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexAction {
    Retrieve,
    Remove,
    Pop,
}

/// Typed category of a runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    UndefinedVariable { name: String },
    TooManyArguments { name: String, count: usize },
    TooFewArguments { name: String, count: usize },
    IllegalOperation,
    DivisionByZero,
    IntegerOverflow { operation: &'static str },
    IndexOutOfBounds(IndexAction),
    /// An argument or operand of the wrong type, with a fixed message.
    WrongType(&'static str),
    RecursionLimit,
    InputExhausted,
    ScriptLoad { path: String, reason: String },
    ScriptFailed { path: String, rendered: String },
    Grid(GridError),
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::UndefinedVariable { name } => write!(f, "'{name}' is not defined"),
            EvalErrorKind::TooManyArguments { name, count } => {
                write!(f, "{count} too many arguments passed into '{name}'")
            }
            EvalErrorKind::TooFewArguments { name, count } => {
                write!(f, "{count} too few arguments passed into '{name}'")
            }
            EvalErrorKind::IllegalOperation => f.write_str("Illegal operation"),
            EvalErrorKind::DivisionByZero => f.write_str("Division by zero"),
            EvalErrorKind::IntegerOverflow { operation } => {
                write!(f, "Integer overflow in {operation}")
            }
            EvalErrorKind::IndexOutOfBounds(IndexAction::Retrieve) => f.write_str(
                "Element at this index could not be retrieved from list because index is out of bounds",
            ),
            EvalErrorKind::IndexOutOfBounds(IndexAction::Remove) => f.write_str(
                "Element at this index could not be removed from list because index is out of bounds",
            ),
            EvalErrorKind::IndexOutOfBounds(IndexAction::Pop) => f.write_str(
                "Element at this index couldn't be removed because index is out of bounds",
            ),
            EvalErrorKind::WrongType(message) => f.write_str(message),
            EvalErrorKind::RecursionLimit => f.write_str("Maximum recursion depth exceeded"),
            EvalErrorKind::InputExhausted => f.write_str("No more input available"),
            EvalErrorKind::ScriptLoad { path, reason } => {
                write!(f, "Failed to load script {path}\n{reason}")
            }
            EvalErrorKind::ScriptFailed { path, rendered } => {
                write!(f, "Failed to finish executing script \"{path}\"\n{rendered}")
            }
            EvalErrorKind::Grid(err) => write!(f, "{err}"),
        }
    }
}

impl From<GridError> for EvalErrorKind {
    fn from(err: GridError) -> Self {
        EvalErrorKind::Grid(err)
    }
}

/// A runtime error with its location and call-context traceback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
    /// Outermost frame first.
    pub traceback: Vec<TraceFrame>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError {
            kind,
            span,
            traceback: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_traceback(mut self, traceback: Vec<TraceFrame>) -> Self {
        self.traceback = traceback;
        self
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let kind = match self.kind {
            EvalErrorKind::Grid(_) => ErrorKind::Grid,
            _ => ErrorKind::Runtime,
        };
        Diagnostic::new(kind, self.kind.to_string(), self.span).with_traceback(self.traceback)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl From<EvalError> for Diagnostic {
    fn from(err: EvalError) -> Self {
        err.into_diagnostic()
    }
}

/// Anything that stops normal evaluation of a node.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    Error(EvalError),
    Return(Value),
    Break,
    Continue,
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(err)
    }
}

// Factory functions

pub fn undefined_variable(name: &str) -> EvalErrorKind {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
}

/// Arity check shared by user functions and built-ins.
pub fn check_arity(name: &str, expected: usize, got: usize) -> Result<(), EvalErrorKind> {
    if got > expected {
        Err(EvalErrorKind::TooManyArguments {
            name: name.to_string(),
            count: got - expected,
        })
    } else if got < expected {
        Err(EvalErrorKind::TooFewArguments {
            name: name.to_string(),
            count: expected - got,
        })
    } else {
        Ok(())
    }
}
