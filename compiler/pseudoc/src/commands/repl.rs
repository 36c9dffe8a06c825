//! Interactive prompt.

use std::io::Write;

use pseudo_diagnostic::DiagnosticEmitter;
use pseudo_eval::{Interpreter, SharedInputHandler};

use super::execute;

pub const PROMPT: &str = ">>> ";

/// File name reported for code typed at the prompt.
pub const REPL_SOURCE: &str = "<stdin>";

/// Read lines from `input` until it runs out, running each one against the
/// same interpreter so definitions carry over.
///
/// `input` should be the interpreter's own input handler; `INPUT()` then
/// reads the lines that follow the statement calling it.
pub fn repl<W: Write, E: DiagnosticEmitter>(
    interp: &mut Interpreter,
    input: &SharedInputHandler,
    prompt: &mut W,
    emitter: &mut E,
) {
    loop {
        let _ = write!(prompt, "{PROMPT}");
        let _ = prompt.flush();
        let Some(line) = input.read_line() else {
            let _ = writeln!(prompt);
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        execute(interp, REPL_SOURCE, &line, emitter);
    }
}
