//! Whole-program tests: source text in, printed output and values out.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod builtins_tests;
mod diagnostics_tests;
mod functions_tests;

use pseudo_diagnostic::Diagnostic;

use crate::{buffer_handler, scripted_handler, Interpreter, InterpreterBuilder, SharedPrintHandler, Value};

pub(super) const FILE: &str = "test.psd";

/// Interpreter with captured output and no input.
pub(super) fn interpreter() -> (Interpreter, SharedPrintHandler) {
    configured(Interpreter::builder())
}

pub(super) fn configured(builder: InterpreterBuilder) -> (Interpreter, SharedPrintHandler) {
    let output = buffer_handler();
    let interp = builder
        .print_handler(output.clone())
        .input_handler(scripted_handler(Vec::<String>::new()))
        .build();
    (interp, output)
}

/// Run `src` and return everything it printed. Panics on error.
pub(super) fn output(src: &str) -> String {
    let (mut interp, out) = interpreter();
    if let Err(diag) = interp.run(FILE, src) {
        panic!("unexpected error:\n{}", diag.render(interp.sources()));
    }
    out.get_output()
}

/// Run `src` and return its value.
pub(super) fn value(src: &str) -> Value {
    let (mut interp, _) = interpreter();
    interp.run(FILE, src).unwrap()
}

/// Run `src`, which must fail.
pub(super) fn error(src: &str) -> Diagnostic {
    let (mut interp, _) = interpreter();
    match interp.run(FILE, src) {
        Ok(value) => panic!("expected an error, got {value}"),
        Err(diag) => diag,
    }
}

/// Source text covered by the error's span.
pub(super) fn error_text(src: &str) -> String {
    let diag = error(src);
    src[diag.span.to_range()].to_string()
}
