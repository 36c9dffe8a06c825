//! Tree-walking interpreter for Pseudo.
//!
//! The evaluator threads a single [`EvalResult`] through every node:
//! values on the `Ok` side, and errors plus the `RETURN`/`BREAK`/`CONTINUE`
//! signals on the `Err` side as [`ControlAction`]. Name resolution follows
//! the lexical [`Scope`] chain; tracebacks follow the separate
//! [`CallContext`] chain.
//!
//! # Example
//!
//! ```
//! use pseudo_eval::{buffer_handler, Interpreter};
//!
//! let output = buffer_handler();
//! let mut interp = Interpreter::builder().print_handler(output.clone()).build();
//! assert!(interp.run("<doc>", "PRINT(1 + 2)").is_ok());
//! assert_eq!(output.get_output(), "3\n");
//! ```

mod builtins;
mod environment;
mod errors;
mod input_handler;
mod interpreter;
mod operators;
mod print_handler;
mod robot;
mod value;

pub use builtins::{BuiltinFn, BuiltinFunction, BuiltinRegistry};
pub use environment::{CallContext, Frame, LocalScope, Scope};
pub use errors::{
    check_arity, undefined_variable, ControlAction, EvalError, EvalErrorKind, EvalResult,
    IndexAction,
};
pub use input_handler::{
    scripted_handler, stdin_handler, InputHandlerImpl, ScriptedInputHandler, SharedInputHandler,
    StdinInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::{evaluate_binary, evaluate_unary, Blame, OpError, OpResult};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use robot::{Direction, GridCloseHandle, GridError, GridRobot, Heading, Robot};
pub use value::{FunctionValue, ListRef, Number, Value};

#[cfg(test)]
mod tests;
