//! Command handlers for the `pseudo` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! files and reporting diagnostics live here.

use std::io::{self, IsTerminal};

use pseudo_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter, TerminalEmitter};
use pseudo_eval::Interpreter;
use pseudo_ir::SourceMap;

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use repl::{repl, PROMPT, REPL_SOURCE};
pub use run::{run_file, run_source};

/// Emitter writing to stderr, colored when `mode` allows it.
pub fn stderr_emitter(mode: ColorMode) -> TerminalEmitter<io::Stderr> {
    TerminalEmitter::stderr(mode, io::stderr().is_terminal())
}

/// Read a source file, reporting failures on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            None
        }
    }
}

fn report<E: DiagnosticEmitter>(emitter: &mut E, diagnostic: &Diagnostic, sources: &SourceMap) {
    emitter.emit(diagnostic, sources);
    emitter.flush();
}

/// Run `text` and report any error. Returns whether it succeeded.
fn execute<E: DiagnosticEmitter>(
    interp: &mut Interpreter,
    name: &str,
    text: &str,
    emitter: &mut E,
) -> bool {
    match interp.run(name, text) {
        Ok(_) => true,
        Err(diagnostic) => {
            report(emitter, &diagnostic, interp.sources());
            false
        }
    }
}
