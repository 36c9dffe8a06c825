//! `InterpreterBuilder` for configuring an [`Interpreter`].

use std::path::PathBuf;

use pseudo_ir::SourceMap;

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::builtins::BuiltinRegistry;
use crate::environment::{LocalScope, Scope};
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::robot::Robot;
use crate::value::Value;

/// Builder for [`Interpreter`].
///
/// Defaults: stdout output, stdin input, no robot, a call depth limit of
/// [`DEFAULT_MAX_CALL_DEPTH`], and `RUN` paths resolved against the
/// process working directory.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
    robot: Option<Box<dyn Robot>>,
    max_call_depth: usize,
    working_dir: PathBuf,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            print_handler: None,
            input_handler: None,
            robot: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            working_dir: PathBuf::new(),
        }
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Attach a robot; this also registers the robot built-ins.
    #[must_use]
    pub fn robot(mut self, robot: impl Robot + 'static) -> Self {
        self.robot = Some(Box::new(robot));
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    pub fn build(self) -> Interpreter {
        let mut builtins = BuiltinRegistry::standard();
        if self.robot.is_some() {
            builtins = builtins.with_robot();
        }

        let mut globals = Scope::new();
        globals.define("NULL", Value::null());
        globals.define("TRUE", Value::bool(true));
        globals.define("FALSE", Value::bool(false));
        builtins.install(&mut globals);

        Interpreter {
            globals: LocalScope::new(globals),
            sources: SourceMap::new(),
            builtins,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
            robot: self.robot,
            max_call_depth: self.max_call_depth,
            script_depth: 0,
            working_dir: self.working_dir,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
