use pretty_assertions::assert_eq;

use super::{configured, error, error_text, interpreter, output, FILE};
use crate::{Interpreter, Value};

#[test]
fn recursive_factorial() {
    let src = "\
FUN fact(n)
  IF n <= 1 THEN RETURN 1
  RETURN n * fact(n - 1)
END
PRINT(fact(5))";
    assert_eq!(output(src), "120\n");
}

#[test]
fn closures_capture_defining_scope() {
    let src = "\
FUN make_adder(n)
  RETURN FUN (x) -> x + n
END
VAR add5 = make_adder(5)
PRINT(add5(10))";
    assert_eq!(output(src), "15\n");
}

#[test]
fn scoping_is_lexical() {
    let src = "\
VAR x = 1
FUN show() -> x
FUN shadow()
  VAR x = 2
  RETURN show()
END
PRINT(shadow())";
    assert_eq!(output(src), "1\n");
}

#[test]
fn assignment_inside_function_is_local() {
    let src = "VAR x = 1\nFUN set()\n  x = 5\nEND\nset()\nPRINT(x)";
    assert_eq!(output(src), "1\n");
}

#[test]
fn block_body_without_return_yields_null() {
    assert_eq!(output("FUN f()\n  42\nEND\nPRINT(f())"), "0\n");
    assert_eq!(output("FUN f() -> 42\nPRINT(f())"), "42\n");
    assert_eq!(output("FUN f()\n  RETURN\nEND\nPRINT(f())"), "0\n");
}

#[test]
fn procedure_is_a_synonym() {
    assert_eq!(output("PROCEDURE twice(x) -> x * 2\nPRINT(twice(4))"), "8\n");
}

#[test]
fn definition_evaluates_to_the_function() {
    assert_eq!(output("PRINT(FUN named() -> 1)"), "<function named>\n");
    assert_eq!(output("PRINT(FUN () -> 1)"), "<function <anonymous>>\n");
    assert_eq!(output("PRINT(PRINT)"), "<built-in function PRINT>\n");
}

#[test]
fn anonymous_function_called_directly() {
    assert_eq!(output("PRINT((FUN (a, b) -> a - b)(10, 3))"), "7\n");
}

#[test]
fn arity_errors_name_the_function() {
    let src = "FUN f(a, b) -> a\nf(1)";
    assert_eq!(error(src).details, "1 too few arguments passed into 'f'");
    assert_eq!(error_text(src), "f(1)");

    assert_eq!(
        error("FUN f(a) -> a\nf(1, 2, 3)").details,
        "2 too many arguments passed into 'f'"
    );
    assert_eq!(
        error("PRINT()").details,
        "1 too few arguments passed into 'PRINT'"
    );
}

#[test]
fn arity_error_is_raised_in_the_caller() {
    let diag = error("FUN f(a) -> a\nf()");
    let names: Vec<_> = diag.traceback.iter().map(|frame| frame.name.as_str()).collect();
    assert_eq!(names, ["<program>"]);
}

#[test]
fn loop_signal_stops_at_function_boundary() {
    assert_eq!(output("FUN f()\n  BREAK\n  PRINT(\"after\")\nEND\nPRINT(f())"), "0\n");
}

#[test]
fn return_leaves_enclosing_loops() {
    let src = "\
FUN first_even(xs)
  FOR EACH x IN xs THEN
    IF x MOD 2 == 0 THEN RETURN x
  END
  RETURN -1
END
PRINT(first_even([3, 5, 8, 10]))
PRINT(first_even([1]))";
    assert_eq!(output(src), "8\n-1\n");
}

#[test]
fn non_callable_is_illegal() {
    let src = "VAR x = 5\nx(1)";
    assert_eq!(error(src).details, "Illegal operation");
    assert_eq!(error_text(src), "x");
}

#[test]
fn recursion_limit_is_reported() {
    let (mut interp, _) = configured(Interpreter::builder().max_call_depth(50));
    let diag = interp.run(FILE, "FUN loop(n) -> loop(n + 1)\nloop(0)").unwrap_err();
    assert_eq!(diag.details, "Maximum recursion depth exceeded");
    assert_eq!(diag.traceback.len(), 51);
}

#[test]
fn deep_recursion_within_limit() {
    let src = "FUN count(n) -> IF n == 0 THEN 0 ELSE 1 + count(n - 1)\nPRINT(count(500))";
    assert_eq!(output(src), "500\n");
}

#[test]
fn definitions_persist_across_runs() {
    let (mut interp, out) = interpreter();
    interp.run("<stdin>", "VAR base = 10").unwrap();
    interp.run("<stdin>", "FUN add(x) -> x + base").unwrap();
    interp.run("<stdin>", "PRINT(add(5))").unwrap();
    assert_eq!(out.get_output(), "15\n");
    assert_eq!(interp.lookup_global("base"), Some(Value::int(10)));
}

#[test]
fn functions_see_later_globals() {
    let src = "FUN f() -> late\nVAR late = 3\nPRINT(f())";
    assert_eq!(output(src), "3\n");
}
