use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use pseudo_diagnostic::ErrorKind;

use super::{configured, error, output, FILE};
use crate::{buffer_handler, scripted_handler, GridRobot, Interpreter, Value};

fn with_input(lines: &[&str], src: &str) -> String {
    let out = buffer_handler();
    let mut interp = Interpreter::builder()
        .print_handler(out.clone())
        .input_handler(scripted_handler(lines.iter().copied()))
        .build();
    interp.run(FILE, src).unwrap();
    out.get_output()
}

/// Scratch directory for `RUN` scripts, unique to this test process.
fn script_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pseudo_eval_run_{}_{test}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn print_and_print_ret() {
    assert_eq!(output("PRINT(\"hi\")\nPRINT([1, \"a\"])"), "hi\n[1, \"a\"]\n");
    assert_eq!(output("PRINT(PRINT_RET(1.5) + \"!\")"), "1.5!\n");
    assert_eq!(output("PRINT(PRINT(1))"), "1\n0\n");
}

#[test]
fn type_predicates() {
    let src = "\
PRINT(IS_NUM(1.0))
PRINT(IS_STR(1))
PRINT(IS_LIST([]))
PRINT(IS_FUN(PRINT))
PRINT(IS_FUN(FUN () -> 1))";
    assert_eq!(output(src), "1\n0\n1\n1\n1\n");
}

#[test]
fn append_and_len_share_the_list() {
    let src = "VAR a = [1, 2]\nVAR b = a\nAPPEND(b, 3)\nPRINT(LEN(a))";
    assert_eq!(output(src), "3\n");
}

#[test]
fn pop_returns_removed_element() {
    let src = "VAR a = [1, 2, 3]\nPRINT(POP(a, -1))\nPRINT(POP(a, 0))\nPRINT(a)";
    assert_eq!(output(src), "3\n1\n[2]\n");
}

#[test]
fn pop_out_of_range() {
    assert_eq!(
        error("POP([1], 5)").details,
        "Element at this index couldn't be removed because index is out of bounds"
    );
}

#[test]
fn extend_with_itself_doubles() {
    assert_eq!(output("VAR a = [1, 2]\nEXTEND(a, a)\nPRINT(a)"), "[1, 2, 1, 2]\n");
}

#[test]
fn list_builtins_check_argument_types() {
    assert_eq!(error("APPEND(1, 2)").details, "First argument must be a list");
    assert_eq!(error("POP([1], \"0\")").details, "Second argument must be a number");
    assert_eq!(error("EXTEND([], 3)").details, "Second argument must be a list");
    assert_eq!(error("LEN(\"abc\")").details, "Argument must be a list");
}

#[test]
fn builtin_errors_carry_builtin_frame() {
    let diag = error("APPEND(1, 2)");
    let names: Vec<_> = diag.traceback.iter().map(|frame| frame.name.as_str()).collect();
    assert_eq!(names, ["<program>", "APPEND"]);
}

#[test]
fn input_reads_lines() {
    assert_eq!(with_input(&["hello"], "PRINT(INPUT() + \"!\")"), "hello!\n");
}

#[test]
fn input_int_retries_until_integer() {
    assert_eq!(
        with_input(&["abc", "42"], "PRINT(INPUT_INT() + 1)"),
        "'abc' must be an integer. Try again!\n43\n"
    );
}

#[test]
fn exhausted_input_is_an_error() {
    assert_eq!(error("INPUT()").details, "No more input available");
    assert_eq!(error("INPUT_INT()").details, "No more input available");
}

#[test]
fn clear_empties_captured_output() {
    assert_eq!(output("PRINT(1)\nCLEAR()\nPRINT(2)"), "2\n");
    assert_eq!(output("PRINT(1)\nCLS()\nPRINT(3)"), "3\n");
}

#[test]
fn run_executes_script_in_shared_globals() {
    let dir = script_dir("shared");
    fs::write(dir.join("lib.psd"), "VAR greeting = \"hi\"\nFUN shout(x) -> x + \"!\"").unwrap();

    let (mut interp, out) = configured(Interpreter::builder().working_dir(&dir));
    interp
        .run(FILE, "RUN(\"lib.psd\")\nPRINT(shout(greeting))")
        .unwrap();
    assert_eq!(out.get_output(), "hi!\n");
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn run_reports_missing_file() {
    let dir = script_dir("missing");
    let (mut interp, _) = configured(Interpreter::builder().working_dir(&dir));
    let diag = interp.run(FILE, "RUN(\"nope.psd\")").unwrap_err();
    assert!(diag.details.starts_with("Failed to load script nope.psd\n"));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn run_reports_failing_script() {
    let dir = script_dir("failing");
    fs::write(dir.join("bad.psd"), "PRINT(1 / 0)").unwrap();

    let (mut interp, _) = configured(Interpreter::builder().working_dir(&dir));
    let diag = interp.run(FILE, "RUN(\"bad.psd\")").unwrap_err();
    assert!(diag
        .details
        .starts_with("Failed to finish executing script \"bad.psd\"\n"));
    assert!(diag.details.contains("Runtime Error: Division by zero"));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn self_running_script_hits_recursion_limit() {
    let dir = script_dir("self_run");
    fs::write(dir.join("self.psd"), "VAR n = n + 1\nRUN(\"self.psd\")").unwrap();
    fs::write(dir.join("once.psd"), "VAR after = 1").unwrap();

    let (mut interp, _) = configured(Interpreter::builder().working_dir(&dir).max_call_depth(50));
    let diag = interp.run(FILE, "VAR n = 0\nRUN(\"self.psd\")").unwrap_err();
    assert!(diag
        .details
        .starts_with("Failed to finish executing script \"self.psd\"\n"));
    assert!(diag.details.contains("Maximum recursion depth exceeded"));
    assert_eq!(interp.lookup_global("n"), Some(Value::int(50)));

    // The nesting count unwinds with the failure.
    interp.run(FILE, "RUN(\"once.psd\")").unwrap();
    assert_eq!(interp.lookup_global("after"), Some(Value::int(1)));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn run_requires_string_path() {
    assert_eq!(error("RUN(5)").details, "Argument must be a string");
}

#[test]
fn robot_commands_drive_the_grid() {
    let (mut interp, out) = configured(Interpreter::builder().robot(GridRobot::new(3, 3)));
    let src = "\
CREATE_GRID()
PRINT(CAN_MOVE(\"FORWARD\"))
PRINT(CAN_MOVE(\"BACKWARD\"))
MOVE_FORWARD()
MOVE_FORWARD()
PRINT(CAN_MOVE(\"FORWARD\"))
ROTATE_RIGHT()
PRINT(CAN_MOVE(\"FORWARD\"))";
    interp.run(FILE, src).unwrap();
    assert_eq!(out.get_output(), "1\n0\n0\n1\n");
}

#[test]
fn robot_reports_walls() {
    let robot = GridRobot::new(3, 3).with_walls([(0, 1)]);
    let (mut interp, _) = configured(Interpreter::builder().robot(robot));
    let diag = interp.run(FILE, "CREATE_GRID()\nMOVE_FORWARD()").unwrap_err();
    assert_eq!(diag.kind, ErrorKind::Grid);
    assert_eq!(diag.details, "Robot cannot move into the wall at (0, 1)");
}

#[test]
fn robot_requires_grid() {
    let (mut interp, _) = configured(Interpreter::builder().robot(GridRobot::new(2, 2)));
    let diag = interp.run(FILE, "MOVE_FORWARD()").unwrap_err();
    assert_eq!(diag.kind, ErrorKind::Grid);
    assert_eq!(
        diag.details,
        "Grid has not been created yet, call CREATE_GRID() first"
    );
}

#[test]
fn robot_direction_must_be_known() {
    let (mut interp, _) = configured(Interpreter::builder().robot(GridRobot::new(2, 2)));
    let diag = interp.run(FILE, "CAN_MOVE(\"UP\")").unwrap_err();
    assert_eq!(diag.details, "Direction must be FORWARD, BACKWARD, LEFT or RIGHT");
}

#[test]
fn robot_commands_absent_without_robot() {
    assert_eq!(error("MOVE_FORWARD()").details, "'MOVE_FORWARD' is not defined");
}
