//! Conditionals and loops.
//!
//! Every loop collects the value of each completed iteration. A block
//! body (`returns_null`) discards the collection and yields NULL.
//! `CONTINUE` skips collecting, `BREAK` ends the loop, and every other
//! signal leaves the loop unchanged.

use pseudo_ir::{BinaryOp, Body, Expr, ForEachLoop, ForLoop, IfCase};

use super::{error, Interpreter};
use crate::environment::Frame;
use crate::errors::{ControlAction, EvalErrorKind, EvalResult};
use crate::operators::number_op;
use crate::value::{Number, Value};

/// What a loop does after one evaluation of its body.
#[derive(Debug)]
pub(crate) enum LoopAction {
    Collect(Value),
    Skip,
    Exit,
}

/// Absorb the loop signals; pass everything else up.
pub(crate) fn to_loop_action(result: EvalResult) -> Result<LoopAction, ControlAction> {
    match result {
        Ok(value) => Ok(LoopAction::Collect(value)),
        Err(ControlAction::Continue) => Ok(LoopAction::Skip),
        Err(ControlAction::Break) => Ok(LoopAction::Exit),
        Err(other) => Err(other),
    }
}

fn finish(body: &Body, elements: Vec<Value>) -> Value {
    if body.returns_null {
        Value::null()
    } else {
        Value::list(elements)
    }
}

impl Interpreter {
    /// Run the body once. Returns `false` when the loop should stop.
    fn loop_step(
        &mut self,
        body: &Body,
        frame: &Frame,
        elements: &mut Vec<Value>,
    ) -> Result<bool, ControlAction> {
        match to_loop_action(self.eval(&body.expr, frame))? {
            LoopAction::Collect(value) => {
                elements.push(value);
                Ok(true)
            }
            LoopAction::Skip => {
                tracing::trace!("continue");
                Ok(true)
            }
            LoopAction::Exit => {
                tracing::trace!("break");
                Ok(false)
            }
        }
    }

    fn eval_number(
        &mut self,
        expr: &Expr,
        frame: &Frame,
        message: &'static str,
    ) -> Result<Number, ControlAction> {
        match self.eval(expr, frame)? {
            Value::Number(n) => Ok(n),
            _ => Err(error(frame, EvalErrorKind::WrongType(message), expr.span)),
        }
    }

    pub(super) fn eval_if(
        &mut self,
        cases: &[IfCase],
        else_branch: Option<&Body>,
        frame: &Frame,
    ) -> EvalResult {
        for case in cases {
            if self.eval(&case.cond, frame)?.is_truthy() {
                return self.eval_branch(&case.body, frame);
            }
        }
        match else_branch {
            Some(body) => self.eval_branch(body, frame),
            None => Ok(Value::null()),
        }
    }

    fn eval_branch(&mut self, body: &Body, frame: &Frame) -> EvalResult {
        let value = self.eval(&body.expr, frame)?;
        Ok(if body.returns_null { Value::null() } else { value })
    }

    /// The body runs before the next counter value is computed. A next
    /// value that overflows lies past the end, so the loop stops there.
    pub(super) fn eval_for(&mut self, for_loop: &ForLoop, frame: &Frame) -> EvalResult {
        let start = self.eval_number(&for_loop.start, frame, "Start value must be a number")?;
        let end = self.eval_number(&for_loop.end, frame, "End value must be a number")?;
        let step = match &for_loop.step {
            Some(step) => self.eval_number(step, frame, "Step value must be a number")?,
            None => Number::Int(1),
        };
        let ascending = step >= Number::Int(0);
        let in_range = |i: Number| if ascending { i < end } else { i > end };

        let mut elements = Vec::new();
        let mut i = start;
        while in_range(i) {
            frame
                .scope
                .borrow_mut()
                .define(for_loop.var.clone(), Value::Number(i));
            if !self.loop_step(&for_loop.body, frame, &mut elements)? {
                break;
            }
            match number_op(BinaryOp::Add, i, step) {
                Ok(Value::Number(next)) => i = next,
                _ => break,
            }
        }
        Ok(finish(&for_loop.body, elements))
    }

    pub(super) fn eval_for_each(&mut self, each: &ForEachLoop, frame: &Frame) -> EvalResult {
        let Value::List(list) = self.eval(&each.iterable, frame)? else {
            return Err(error(
                frame,
                EvalErrorKind::WrongType("Value to iterate over must be a list"),
                each.iterable.span,
            ));
        };

        let mut elements = Vec::new();
        let mut index = 0;
        // The list may grow or shrink through an alias while the body runs.
        while let Some(element) = list.get(index) {
            frame.scope.borrow_mut().define(each.var.clone(), element);
            index += 1;
            if !self.loop_step(&each.body, frame, &mut elements)? {
                break;
            }
        }
        Ok(finish(&each.body, elements))
    }

    pub(super) fn eval_while(&mut self, cond: &Expr, body: &Body, frame: &Frame) -> EvalResult {
        let mut elements = Vec::new();
        while self.eval(cond, frame)?.is_truthy() {
            if !self.loop_step(body, frame, &mut elements)? {
                break;
            }
        }
        Ok(finish(body, elements))
    }

    /// The condition is tested before each iteration.
    pub(super) fn eval_repeat_until(&mut self, cond: &Expr, body: &Body, frame: &Frame) -> EvalResult {
        let mut elements = Vec::new();
        while !self.eval(cond, frame)?.is_truthy() {
            if !self.loop_step(body, frame, &mut elements)? {
                break;
            }
        }
        Ok(finish(body, elements))
    }

    pub(super) fn eval_repeat_times(&mut self, count: &Expr, body: &Body, frame: &Frame) -> EvalResult {
        let times = match self.eval_number(count, frame, "Repeat count must be a number")? {
            Number::Int(n) => n,
            Number::Float(f) => f.trunc() as i64,
        };

        let mut elements = Vec::new();
        for _ in 0..times.max(0) {
            if !self.loop_step(body, frame, &mut elements)? {
                break;
            }
        }
        Ok(finish(body, elements))
    }
}
