//! Diagnostic system for Pseudo.
//!
//! Every phase error (lex, parse, runtime) is converted into a single
//! [`Diagnostic`] shape:
//! - an error kind (`Invalid Syntax`, `Runtime Error`, ...)
//! - details (what went wrong)
//! - a primary span (where it went wrong)
//! - for runtime errors, the call traceback (how execution got there)
//!
//! Rendering needs the [`pseudo_ir::SourceMap`] because spans only carry a
//! file id.

mod diagnostic;
pub mod emitter;
mod excerpt;

pub use diagnostic::{Diagnostic, ErrorKind, TraceFrame};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use excerpt::caret_excerpt;
