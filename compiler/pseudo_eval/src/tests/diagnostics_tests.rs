//! Error positions, tracebacks and rendering.

use pretty_assertions::assert_eq;
use pseudo_diagnostic::ErrorKind;

use super::{error, error_text, interpreter, FILE};

#[test]
fn undefined_variable() {
    let diag = error("PRINT(z)");
    assert_eq!(diag.kind, ErrorKind::Runtime);
    assert_eq!(diag.details, "'z' is not defined");
    assert_eq!(error_text("PRINT(z)"), "z");
}

#[test]
fn runtime_errors_have_traceback() {
    let diag = error("VAR x = 1\nPRINT(x / 0)");
    assert_eq!(diag.traceback.len(), 1);
    assert_eq!(diag.traceback[0].name, "<program>");
    assert_eq!(diag.traceback[0].span.start.line, 1);
}

#[test]
fn traceback_follows_call_chain() {
    let src = "\
FUN inner()
  RETURN 1 / 0
END
FUN outer() -> inner()
outer()";
    let (mut interp, _) = interpreter();
    let diag = interp.run(FILE, src).unwrap_err();
    assert_eq!(
        diag.render(interp.sources()),
        "Traceback (most recent call last):
  File test.psd, line 5, in <program>
  File test.psd, line 4, in outer
  File test.psd, line 2, in inner
Runtime Error: Division by zero
File test.psd, line 2

  RETURN 1 / 0
             ^"
    );
}

#[test]
fn traceback_follows_calls_not_definitions() {
    let src = "\
FUN make()
  RETURN FUN () -> missing
END
VAR f = make()
f()";
    let diag = error(src);
    let names: Vec<_> = diag.traceback.iter().map(|frame| frame.name.as_str()).collect();
    assert_eq!(names, ["<program>", "<anonymous>"]);
}

#[test]
fn illegal_character() {
    let diag = error("PRINT(1 $ 2)");
    assert_eq!(diag.kind, ErrorKind::IllegalCharacter);
    assert_eq!(diag.details, "'$'");
    assert!(diag.traceback.is_empty());
}

#[test]
fn expected_character() {
    let diag = error("1 ! 2");
    assert_eq!(diag.kind, ErrorKind::ExpectedCharacter);
    assert_eq!(diag.details, "'=' (after '!')");
}

#[test]
fn syntax_errors_stop_before_evaluation() {
    let (mut interp, out) = interpreter();
    let diag = interp.run(FILE, "PRINT(1)\nPRINT(1 +)").unwrap_err();
    assert_eq!(diag.kind, ErrorKind::InvalidSyntax);
    assert_eq!(out.get_output(), "");
}

#[test]
fn empty_block_is_a_syntax_error() {
    assert_eq!(error("WHILE 1 THEN\nEND").kind, ErrorKind::InvalidSyntax);
}

#[test]
fn sources_are_kept_per_run() {
    let (mut interp, _) = interpreter();
    interp.run("first.psd", "VAR a = 1").unwrap();
    let diag = interp.run("second.psd", "PRINT(b)").unwrap_err();
    assert!(diag.render(interp.sources()).contains("File second.psd, line 1"));
}
