//! The `run` command.

use pseudo_diagnostic::DiagnosticEmitter;
use pseudo_eval::Interpreter;

use super::{execute, read_file, stderr_emitter};
use crate::Options;

/// Run a Pseudo file with stdout/stdin attached. Returns whether it
/// finished without error.
pub fn run_file(path: &str, options: &Options) -> bool {
    let Some(text) = read_file(path) else {
        return false;
    };
    let mut interp = options.interpreter().build();
    let mut emitter = stderr_emitter(options.color);
    run_source(&mut interp, path, &text, &mut emitter)
}

/// Run `text` as the file `name` on an existing interpreter.
#[tracing::instrument(level = "debug", skip(interp, text, emitter))]
pub fn run_source<E: DiagnosticEmitter>(
    interp: &mut Interpreter,
    name: &str,
    text: &str,
    emitter: &mut E,
) -> bool {
    execute(interp, name, text, emitter)
}
