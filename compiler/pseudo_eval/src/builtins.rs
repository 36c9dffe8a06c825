//! Native functions bound in the global scope.
//!
//! A [`BuiltinRegistry`] is built once per interpreter and installed into
//! its global scope. Each entry has a fixed parameter list; calls are
//! arity-checked like user functions and the arguments are bound into a
//! fresh [`Scope`] that the native code reads by parameter name.

use std::fmt;

use crate::environment::Scope;
use crate::errors::{EvalErrorKind, IndexAction};
use crate::interpreter::Interpreter;
use crate::robot::{Direction, GridError, Robot};
use crate::value::Value;

/// Native implementation of a built-in.
pub type BuiltinFn = fn(&mut Interpreter, &Scope) -> Result<Value, EvalErrorKind>;

#[derive(Copy, Clone)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub func: BuiltinFn,
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<built-in function {}>", self.name)
    }
}

const fn builtin(
    name: &'static str,
    params: &'static [&'static str],
    func: BuiltinFn,
) -> BuiltinFunction {
    BuiltinFunction { name, params, func }
}

const STANDARD: &[BuiltinFunction] = &[
    builtin("PRINT", &["value"], print),
    builtin("PRINT_RET", &["value"], print_ret),
    builtin("INPUT", &[], input),
    builtin("INPUT_INT", &[], input_int),
    builtin("CLEAR", &[], clear),
    builtin("IS_NUM", &["value"], is_number),
    builtin("IS_STR", &["value"], is_string),
    builtin("IS_LIST", &["value"], is_list),
    builtin("IS_FUN", &["value"], is_function),
    builtin("APPEND", &["list", "value"], append),
    builtin("POP", &["list", "index"], pop),
    builtin("EXTEND", &["listA", "listB"], extend),
    builtin("LEN", &["list"], len),
    builtin("RUN", &["fn"], run),
];

const ROBOT: &[BuiltinFunction] = &[
    builtin("CREATE_GRID", &[], create_grid),
    builtin("MOVE_FORWARD", &[], move_forward),
    builtin("ROTATE_LEFT", &[], rotate_left),
    builtin("ROTATE_RIGHT", &[], rotate_right),
    builtin("CAN_MOVE", &["direction"], can_move),
];

/// Extra global names for existing built-ins.
const ALIASES: &[(&str, &str)] = &[("CLS", "CLEAR")];

/// The set of built-ins available to one interpreter.
#[derive(Clone, Debug)]
pub struct BuiltinRegistry {
    functions: Vec<BuiltinFunction>,
}

impl BuiltinRegistry {
    pub fn standard() -> Self {
        BuiltinRegistry {
            functions: STANDARD.to_vec(),
        }
    }

    /// Add the robot commands.
    #[must_use]
    pub fn with_robot(mut self) -> Self {
        self.functions.extend_from_slice(ROBOT);
        self
    }

    pub fn get(&self, name: &str) -> Option<BuiltinFunction> {
        self.functions.iter().find(|f| f.name == name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.iter().map(|f| f.name)
    }

    /// Bind every built-in, plus aliases, in `scope`.
    pub fn install(&self, scope: &mut Scope) {
        for function in &self.functions {
            scope.define(function.name, Value::BuiltIn(*function));
        }
        for (alias, target) in ALIASES {
            if let Some(function) = self.get(target) {
                scope.define(*alias, Value::BuiltIn(function));
            }
        }
    }
}

fn arg(scope: &Scope, name: &str) -> Value {
    scope.get_local(name).cloned().unwrap_or_else(Value::null)
}

fn print(interp: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    interp.print_handler.println(&arg(scope, "value").to_string());
    Ok(Value::null())
}

fn print_ret(_: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    Ok(Value::string(arg(scope, "value").to_string()))
}

fn input(interp: &mut Interpreter, _: &Scope) -> Result<Value, EvalErrorKind> {
    interp
        .input_handler
        .read_line()
        .map(Value::Str)
        .ok_or(EvalErrorKind::InputExhausted)
}

fn input_int(interp: &mut Interpreter, _: &Scope) -> Result<Value, EvalErrorKind> {
    loop {
        let text = interp
            .input_handler
            .read_line()
            .ok_or(EvalErrorKind::InputExhausted)?;
        match text.trim().parse::<i64>() {
            Ok(n) => return Ok(Value::int(n)),
            Err(_) => interp
                .print_handler
                .println(&format!("'{text}' must be an integer. Try again!")),
        }
    }
}

fn clear(interp: &mut Interpreter, _: &Scope) -> Result<Value, EvalErrorKind> {
    interp.print_handler.clear_screen();
    Ok(Value::null())
}

fn is_number(_: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    Ok(Value::bool(matches!(arg(scope, "value"), Value::Number(_))))
}

fn is_string(_: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    Ok(Value::bool(matches!(arg(scope, "value"), Value::Str(_))))
}

fn is_list(_: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    Ok(Value::bool(matches!(arg(scope, "value"), Value::List(_))))
}

fn is_function(_: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    Ok(Value::bool(matches!(
        arg(scope, "value"),
        Value::Function(_) | Value::BuiltIn(_)
    )))
}

fn append(_: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    let Value::List(list) = arg(scope, "list") else {
        return Err(EvalErrorKind::WrongType("First argument must be a list"));
    };
    list.push(arg(scope, "value"));
    Ok(Value::null())
}

fn pop(_: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    let Value::List(list) = arg(scope, "list") else {
        return Err(EvalErrorKind::WrongType("First argument must be a list"));
    };
    let Value::Number(index) = arg(scope, "index") else {
        return Err(EvalErrorKind::WrongType("Second argument must be a number"));
    };
    index
        .as_integer()
        .and_then(|i| list.resolve_index(i))
        .and_then(|i| list.remove(i))
        .ok_or(EvalErrorKind::IndexOutOfBounds(IndexAction::Pop))
}

fn extend(_: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    let Value::List(target) = arg(scope, "listA") else {
        return Err(EvalErrorKind::WrongType("First argument must be a list"));
    };
    let Value::List(source) = arg(scope, "listB") else {
        return Err(EvalErrorKind::WrongType("Second argument must be a list"));
    };
    target.extend_from(&source);
    Ok(Value::null())
}

fn len(_: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    let Value::List(list) = arg(scope, "list") else {
        return Err(EvalErrorKind::WrongType("Argument must be a list"));
    };
    let len = i64::try_from(list.len()).unwrap_or(i64::MAX);
    Ok(Value::int(len))
}

fn run(interp: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    let Value::Str(path) = arg(scope, "fn") else {
        return Err(EvalErrorKind::WrongType("Argument must be a string"));
    };
    interp.run_file(&path)?;
    Ok(Value::null())
}

fn robot(interp: &mut Interpreter) -> Result<&mut (dyn Robot + 'static), EvalErrorKind> {
    interp
        .robot
        .as_deref_mut()
        .ok_or(EvalErrorKind::Grid(GridError::NotCreated))
}

fn create_grid(interp: &mut Interpreter, _: &Scope) -> Result<Value, EvalErrorKind> {
    robot(interp)?.create_grid()?;
    Ok(Value::null())
}

fn move_forward(interp: &mut Interpreter, _: &Scope) -> Result<Value, EvalErrorKind> {
    robot(interp)?.move_forward()?;
    Ok(Value::null())
}

fn rotate_left(interp: &mut Interpreter, _: &Scope) -> Result<Value, EvalErrorKind> {
    robot(interp)?.rotate_left()?;
    Ok(Value::null())
}

fn rotate_right(interp: &mut Interpreter, _: &Scope) -> Result<Value, EvalErrorKind> {
    robot(interp)?.rotate_right()?;
    Ok(Value::null())
}

fn can_move(interp: &mut Interpreter, scope: &Scope) -> Result<Value, EvalErrorKind> {
    let direction = match arg(scope, "direction") {
        Value::Str(name) => Direction::from_name(&name),
        _ => None,
    }
    .ok_or(EvalErrorKind::WrongType(
        "Direction must be FORWARD, BACKWARD, LEFT or RIGHT",
    ))?;
    Ok(Value::bool(robot(interp)?.can_move(direction)?))
}
