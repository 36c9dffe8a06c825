//! Terminal output for diagnostics, with optional ANSI color.

use std::io::{self, Write};

use pseudo_ir::SourceMap;

use crate::{caret_excerpt, Diagnostic};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic, sources: &SourceMap);

    fn flush(&mut self);
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, sources: &SourceMap) {
        if let Some(traceback) = diagnostic.traceback_text(sources) {
            self.write_colored(&traceback, colors::DIM);
        }

        self.write_colored(diagnostic.kind.name(), colors::ERROR);
        let _ = writeln!(self.writer, ": {}", diagnostic.details);
        let location = diagnostic.location(sources);
        self.write_colored(&location, colors::BOLD);
        let _ = writeln!(self.writer);

        if let Some(file) = sources.get(diagnostic.span.source) {
            let _ = writeln!(self.writer);
            let excerpt = caret_excerpt(file, diagnostic.span);
            // Excerpt lines alternate between source text and carets.
            for (i, line) in excerpt.lines().enumerate() {
                if i % 2 == 1 {
                    self.write_colored(line, colors::ERROR);
                } else {
                    let _ = write!(self.writer, "{line}");
                }
                let _ = writeln!(self.writer);
            }
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
