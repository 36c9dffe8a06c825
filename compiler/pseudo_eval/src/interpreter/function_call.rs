//! Calling user functions and built-ins.

use pseudo_ir::{Expr, Span};
use smallvec::SmallVec;

use super::{error, error_in, Interpreter};
use crate::builtins::BuiltinFunction;
use crate::environment::{CallContext, Frame, LocalScope, Scope};
use crate::errors::{check_arity, ControlAction, EvalErrorKind, EvalResult};
use crate::value::{FunctionValue, Value};

type Args = SmallVec<[Value; 4]>;

impl Interpreter {
    /// Evaluate the callee, then the arguments left to right, then call.
    pub(super) fn eval_call(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        span: Span,
        frame: &Frame,
    ) -> EvalResult {
        let target = self.eval(callee, frame)?;
        let mut values = Args::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg, frame)?);
        }
        match target {
            Value::Function(function) => self.call_function(&function, &values, span, frame),
            Value::BuiltIn(builtin) => self.call_builtin(builtin, &values, span, frame),
            _ => Err(error(frame, EvalErrorKind::IllegalOperation, callee.span)),
        }
    }

    /// Run a user function in a fresh scope whose parent is the function's
    /// closure, not the caller's scope.
    #[tracing::instrument(level = "debug", skip_all, fields(name = function.name()))]
    pub(crate) fn call_function(
        &mut self,
        function: &FunctionValue,
        args: &[Value],
        span: Span,
        frame: &Frame,
    ) -> EvalResult {
        let def = &function.def;
        check_arity(function.name(), def.params.len(), args.len())
            .map_err(|kind| error(frame, kind, span))?;
        if frame.context.depth >= self.max_call_depth {
            return Err(error(frame, EvalErrorKind::RecursionLimit, span));
        }

        let scope = LocalScope::new(Scope::with_parent(function.closure.clone()));
        {
            let mut bindings = scope.borrow_mut();
            for (param, value) in def.params.iter().zip(args) {
                bindings.define(param.clone(), value.clone());
            }
        }
        let inner = Frame::new(scope, CallContext::child(&frame.context, function.name(), span));

        match self.eval(&def.body, &inner) {
            Ok(value) if def.auto_return => Ok(value),
            Ok(_) => Ok(Value::null()),
            Err(ControlAction::Return(value)) => Ok(value),
            Err(ControlAction::Break | ControlAction::Continue) => {
                tracing::trace!("loop signal reached function boundary");
                Ok(Value::null())
            }
            Err(err) => Err(err),
        }
    }

    /// Bind the arguments to the built-in's parameter names and run it.
    /// Errors are reported in the built-in's own call context.
    #[tracing::instrument(level = "debug", skip_all, fields(name = builtin.name))]
    pub(crate) fn call_builtin(
        &mut self,
        builtin: BuiltinFunction,
        args: &[Value],
        span: Span,
        frame: &Frame,
    ) -> EvalResult {
        check_arity(builtin.name, builtin.params.len(), args.len())
            .map_err(|kind| error(frame, kind, span))?;

        let mut scope = Scope::new();
        for (param, value) in builtin.params.iter().zip(args) {
            scope.define(*param, value.clone());
        }
        let context = CallContext::child(&frame.context, builtin.name, span);
        (builtin.func)(self, &scope).map_err(|kind| error_in(&context, kind, span))
    }
}
