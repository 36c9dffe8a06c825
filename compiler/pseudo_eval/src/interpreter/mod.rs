//! Tree-walking interpreter.
//!
//! [`Interpreter::run`] drives one source text through lexing, parsing and
//! evaluation against the interpreter's persistent global scope, so a REPL
//! or a `RUN(...)` call sees definitions made by earlier runs.

mod builder;
pub(crate) mod control;
mod function_call;

use std::path::PathBuf;
use std::rc::Rc;

use pseudo_diagnostic::Diagnostic;
use pseudo_ir::{Expr, ExprKind, SourceFile, SourceMap, Span};
use pseudo_stack::ensure_sufficient_stack;

pub use builder::InterpreterBuilder;

use crate::builtins::BuiltinRegistry;
use crate::environment::{CallContext, Frame, LocalScope, Scope};
use crate::errors::{undefined_variable, ControlAction, EvalError, EvalErrorKind, EvalResult};
use crate::input_handler::SharedInputHandler;
use crate::operators::{evaluate_binary, evaluate_unary, Blame, OpError};
use crate::print_handler::SharedPrintHandler;
use crate::robot::Robot;
use crate::value::{FunctionValue, Value};

/// Default limit on nested user-function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

pub struct Interpreter {
    pub(crate) globals: LocalScope<Scope>,
    pub(crate) sources: SourceMap,
    pub(crate) builtins: BuiltinRegistry,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input_handler: SharedInputHandler,
    pub(crate) robot: Option<Box<dyn Robot>>,
    pub(crate) max_call_depth: usize,
    /// Scripts currently running through nested `RUN` calls.
    pub(crate) script_depth: usize,
    /// Base directory for relative `RUN` paths.
    pub(crate) working_dir: PathBuf,
}

impl Interpreter {
    /// Interpreter printing to stdout and reading from stdin.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Lex, parse and evaluate `text`.
    ///
    /// Returns the list of top-level statement values, or the first error.
    /// Render the error with [`Interpreter::sources`].
    #[tracing::instrument(level = "debug", skip(self, text))]
    pub fn run(&mut self, name: &str, text: &str) -> Result<Value, Diagnostic> {
        let source = self.sources.add(SourceFile::new(name, text));
        let tokens = pseudo_lexer::lex(source, text)?;
        let tree = pseudo_parse::parse(&tokens)?;
        let frame = Frame::new(self.globals.clone(), CallContext::program());
        match self.eval(&tree, &frame) {
            Ok(value) | Err(ControlAction::Return(value)) => Ok(value),
            Err(ControlAction::Break | ControlAction::Continue) => {
                tracing::trace!("loop signal reached top level");
                Ok(Value::null())
            }
            Err(ControlAction::Error(err)) => Err(err.into_diagnostic()),
        }
    }

    /// Files seen so far, for rendering diagnostics.
    pub fn sources(&self) -> &SourceMap {
        &self.sources
    }

    pub fn globals(&self) -> &LocalScope<Scope> {
        &self.globals
    }

    pub fn lookup_global(&self, name: &str) -> Option<Value> {
        self.globals.borrow().lookup(name)
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Load and run a script for `RUN(path)`.
    ///
    /// Nested `RUN` calls count against the call-depth limit, since each one
    /// starts its script at call depth zero.
    pub(crate) fn run_file(&mut self, path: &str) -> Result<Value, EvalErrorKind> {
        if self.script_depth >= self.max_call_depth {
            return Err(EvalErrorKind::RecursionLimit);
        }
        let full_path = self.working_dir.join(path);
        let text = std::fs::read_to_string(&full_path).map_err(|err| EvalErrorKind::ScriptLoad {
            path: path.to_string(),
            reason: err.to_string(),
        })?;
        tracing::debug!(path, depth = self.script_depth, "running script");
        self.script_depth += 1;
        let result = self.run(path, &text);
        self.script_depth -= 1;
        result.map_err(|diag| EvalErrorKind::ScriptFailed {
            path: path.to_string(),
            rendered: diag.render(&self.sources),
        })
    }

    pub(crate) fn eval(&mut self, expr: &Expr, frame: &Frame) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, frame))
    }

    fn eval_inner(&mut self, expr: &Expr, frame: &Frame) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::int(*n)),
            ExprKind::Float(f) => Ok(Value::float(*f)),
            ExprKind::Str(s) => Ok(Value::string(s.clone())),
            ExprKind::List(items) | ExprKind::Block(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(self.eval(item, frame)?);
                }
                Ok(Value::list(values))
            }
            ExprKind::Var(name) => {
                let found = frame.scope.borrow().lookup(name);
                found.ok_or_else(|| error(frame, undefined_variable(name), expr.span))
            }
            ExprKind::Assign { name, value } => {
                let value = self.eval(value, frame)?;
                frame.scope.borrow_mut().define(name.clone(), value.clone());
                Ok(value)
            }
            ExprKind::Binary { op, left, right } => {
                let lhs = self.eval(left, frame)?;
                let rhs = self.eval(right, frame)?;
                evaluate_binary(*op, &lhs, &rhs)
                    .map_err(|err| op_error(frame, err, expr.span, right.span))
            }
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand, frame)?;
                evaluate_unary(*op, &value).map_err(|err| op_error(frame, err, expr.span, expr.span))
            }
            ExprKind::If { cases, else_branch } => self.eval_if(cases, else_branch.as_ref(), frame),
            ExprKind::For(for_loop) => self.eval_for(for_loop, frame),
            ExprKind::ForEach(each) => self.eval_for_each(each, frame),
            ExprKind::While { cond, body } => self.eval_while(cond, body, frame),
            ExprKind::RepeatTimes { count, body } => self.eval_repeat_times(count, body, frame),
            ExprKind::RepeatUntil { cond, body } => self.eval_repeat_until(cond, body, frame),
            ExprKind::FunctionDef(def) => {
                let function = Value::Function(FunctionValue::new(Rc::clone(def), frame.scope.clone()));
                if let Some(name) = &def.name {
                    frame.scope.borrow_mut().define(name.clone(), function.clone());
                }
                Ok(function)
            }
            ExprKind::Call { callee, args } => self.eval_call(callee, args, expr.span, frame),
            ExprKind::Return(value) => {
                let value = match value {
                    Some(value) => self.eval(value, frame)?,
                    None => Value::null(),
                };
                Err(ControlAction::Return(value))
            }
            ExprKind::Continue => Err(ControlAction::Continue),
            ExprKind::Break => Err(ControlAction::Break),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// A runtime error raised at `span` in `frame`'s call context.
pub(crate) fn error(frame: &Frame, kind: EvalErrorKind, span: Span) -> ControlAction {
    error_in(&frame.context, kind, span)
}

pub(crate) fn error_in(context: &CallContext, kind: EvalErrorKind, span: Span) -> ControlAction {
    ControlAction::Error(EvalError::new(kind, span).with_traceback(context.traceback(span)))
}

fn op_error(frame: &Frame, err: OpError, whole: Span, right: Span) -> ControlAction {
    let span = match err.blame {
        Blame::Whole => whole,
        Blame::Right => right,
    };
    error(frame, err.kind, span)
}
