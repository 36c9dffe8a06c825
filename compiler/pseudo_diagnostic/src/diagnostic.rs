//! The rendered error type shared by every phase.

use std::fmt::{self, Write as _};

use pseudo_ir::{SourceMap, Span};

use crate::caret_excerpt;

/// Category of a diagnostic. The display name is the header of the
/// rendered message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IllegalCharacter,
    ExpectedCharacter,
    InvalidSyntax,
    Runtime,
    Grid,
}

impl ErrorKind {
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::IllegalCharacter => "Illegal Character",
            ErrorKind::ExpectedCharacter => "Expected Character",
            ErrorKind::InvalidSyntax => "Invalid Syntax",
            ErrorKind::Runtime => "Runtime Error",
            ErrorKind::Grid => "Grid Error",
        }
    }

    /// Runtime kinds carry a traceback.
    pub const fn is_runtime(self) -> bool {
        matches!(self, ErrorKind::Runtime | ErrorKind::Grid)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One traceback line: the position reached inside a call context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceFrame {
    /// Display name of the context (`<program>` or a function name).
    pub name: String,
    pub span: Span,
}

impl TraceFrame {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        TraceFrame {
            name: name.into(),
            span,
        }
    }
}

/// A fully described error, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub details: String,
    pub span: Span,
    /// Outermost frame first.
    pub traceback: Vec<TraceFrame>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, details: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            kind,
            details: details.into(),
            span,
            traceback: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_traceback(mut self, traceback: Vec<TraceFrame>) -> Self {
        self.traceback = traceback;
        self
    }

    /// `Kind: details` without location or excerpt.
    pub fn headline(&self) -> String {
        format!("{}: {}", self.kind, self.details)
    }

    /// The `Traceback (most recent call last):` block, if any.
    pub fn traceback_text(&self, sources: &SourceMap) -> Option<String> {
        if self.traceback.is_empty() {
            return None;
        }
        let mut out = String::from("Traceback (most recent call last):\n");
        for frame in &self.traceback {
            let _ = writeln!(
                out,
                "  File {}, line {}, in {}",
                sources.name(frame.span.source),
                frame.span.start.line + 1,
                frame.name
            );
        }
        Some(out)
    }

    /// `File <name>, line <N>` for the primary span.
    pub fn location(&self, sources: &SourceMap) -> String {
        format!(
            "File {}, line {}",
            sources.name(self.span.source),
            self.span.start.line + 1
        )
    }

    /// Render the complete message as plain text.
    pub fn render(&self, sources: &SourceMap) -> String {
        let mut out = self.traceback_text(sources).unwrap_or_default();
        out.push_str(&self.headline());
        out.push('\n');
        out.push_str(&self.location(sources));
        if let Some(file) = sources.get(self.span.source) {
            out.push_str("\n\n");
            out.push_str(&caret_excerpt(file, self.span));
        }
        out
    }
}
