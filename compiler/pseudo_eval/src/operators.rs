//! Binary and unary operators on [`Value`].
//!
//! Every operator is illegal unless a row below handles the operand
//! types. Errors say which operand is to blame so the interpreter can
//! point the caret at it.

use pseudo_ir::{BinaryOp, UnaryOp};

use crate::errors::{EvalErrorKind, IndexAction};
use crate::value::{ListRef, Number, Value};

/// Which part of the expression an operator error points at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Blame {
    Right,
    Whole,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpError {
    pub kind: EvalErrorKind,
    pub blame: Blame,
}

impl OpError {
    fn whole(kind: EvalErrorKind) -> Self {
        OpError {
            kind,
            blame: Blame::Whole,
        }
    }

    fn right(kind: EvalErrorKind) -> Self {
        OpError {
            kind,
            blame: Blame::Right,
        }
    }

    fn illegal() -> Self {
        Self::whole(EvalErrorKind::IllegalOperation)
    }
}

pub type OpResult = Result<Value, OpError>;

/// Apply a binary operator. Both operands are already evaluated.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> OpResult {
    match op {
        BinaryOp::And => return Ok(Value::bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => return Ok(Value::bool(left.is_truthy() || right.is_truthy())),
        _ => {}
    }
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => number_op(op, *a, *b),
        (Value::Str(a), Value::Str(b)) => string_op(op, a, b),
        (Value::Str(s), Value::Number(n)) if op == BinaryOp::Mul => repeat(s, *n),
        (Value::List(list), _) => list_op(op, list, right),
        _ => Err(OpError::illegal()),
    }
}

/// Apply a unary operator.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> OpResult {
    match op {
        UnaryOp::Neg => evaluate_binary(BinaryOp::Mul, operand, &Value::int(-1))
            .map_err(|err| OpError::whole(err.kind)),
        UnaryOp::Pos => Ok(operand.clone()),
        UnaryOp::Not => Ok(Value::bool(!operand.is_truthy())),
    }
}

/// Apply a binary operator to two numbers.
pub(crate) fn number_op(op: BinaryOp, a: Number, b: Number) -> OpResult {
    use Number::{Float, Int};

    let value = match (op, a, b) {
        (BinaryOp::Add, Int(x), Int(y)) => Int(checked(x.checked_add(y), "addition")?),
        (BinaryOp::Sub, Int(x), Int(y)) => Int(checked(x.checked_sub(y), "subtraction")?),
        (BinaryOp::Mul, Int(x), Int(y)) => Int(checked(x.checked_mul(y), "multiplication")?),
        (BinaryOp::Add, x, y) => Float(x.as_f64() + y.as_f64()),
        (BinaryOp::Sub, x, y) => Float(x.as_f64() - y.as_f64()),
        (BinaryOp::Mul, x, y) => Float(x.as_f64() * y.as_f64()),
        (BinaryOp::Div, x, y) => {
            if y.is_zero() {
                return Err(OpError::right(EvalErrorKind::DivisionByZero));
            }
            Float(x.as_f64() / y.as_f64())
        }
        (BinaryOp::Mod, x, y) => {
            if y.is_zero() {
                return Err(OpError::right(EvalErrorKind::DivisionByZero));
            }
            floored_mod(x, y)
        }
        (BinaryOp::Pow, x, y) => power(x, y)?,
        (BinaryOp::Eq, x, y) => return Ok(Value::bool(x == y)),
        (BinaryOp::NotEq, x, y) => return Ok(Value::bool(x != y)),
        (BinaryOp::Lt, x, y) => return Ok(Value::bool(x < y)),
        (BinaryOp::Gt, x, y) => return Ok(Value::bool(x > y)),
        (BinaryOp::LtEq, x, y) => return Ok(Value::bool(x <= y)),
        (BinaryOp::GtEq, x, y) => return Ok(Value::bool(x >= y)),
        (BinaryOp::And | BinaryOp::Or, ..) => return Err(OpError::illegal()),
    };
    Ok(Value::Number(value))
}

fn checked(result: Option<i64>, operation: &'static str) -> Result<i64, OpError> {
    result.ok_or_else(|| OpError::whole(EvalErrorKind::IntegerOverflow { operation }))
}

/// Modulo taking the sign of the divisor.
fn floored_mod(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            let r = x.wrapping_rem(y);
            if r != 0 && (r < 0) != (y < 0) {
                Number::Int(r + y)
            } else {
                Number::Int(r)
            }
        }
        (x, y) => {
            let (x, y) = (x.as_f64(), y.as_f64());
            let r = x % y;
            if r != 0.0 && (r < 0.0) != (y < 0.0) {
                Number::Float(r + y)
            } else {
                Number::Float(r)
            }
        }
    }
}

fn power(base: Number, exponent: Number) -> Result<Number, OpError> {
    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if e >= 0 {
            match b {
                0 if e > 0 => return Ok(Number::Int(0)),
                1 => return Ok(Number::Int(1)),
                -1 => return Ok(Number::Int(if e % 2 == 0 { 1 } else { -1 })),
                _ => {}
            }
            let value = u32::try_from(e).ok().and_then(|e| b.checked_pow(e));
            return checked(value, "exponentiation").map(Number::Int);
        }
    }
    if base.is_zero() && exponent.as_f64() < 0.0 {
        return Err(OpError::right(EvalErrorKind::DivisionByZero));
    }
    Ok(Number::Float(base.as_f64().powf(exponent.as_f64())))
}

fn string_op(op: BinaryOp, a: &str, b: &str) -> OpResult {
    let result = match op {
        BinaryOp::Add => return Ok(Value::string(format!("{a}{b}"))),
        BinaryOp::Eq => a == b,
        BinaryOp::NotEq => a != b,
        BinaryOp::Lt => a < b,
        BinaryOp::Gt => a > b,
        BinaryOp::LtEq => a <= b,
        BinaryOp::GtEq => a >= b,
        _ => return Err(OpError::illegal()),
    };
    Ok(Value::bool(result))
}

/// Longest string a repetition may build, in bytes.
const MAX_REPEAT_LEN: usize = 1 << 30;

fn repeat(s: &str, count: Number) -> OpResult {
    let count = count.as_integer().ok_or_else(OpError::illegal)?;
    let count = usize::try_from(count).unwrap_or(0);
    match s.len().checked_mul(count) {
        Some(len) if len <= MAX_REPEAT_LEN => Ok(Value::string(s.repeat(count))),
        _ => Err(OpError::right(EvalErrorKind::IntegerOverflow {
            operation: "multiplication",
        })),
    }
}

fn list_op(op: BinaryOp, list: &ListRef, right: &Value) -> OpResult {
    match (op, right) {
        (BinaryOp::Add, value) => {
            list.push(value.clone());
            Ok(Value::List(list.clone()))
        }
        (BinaryOp::Sub, Value::Number(index)) => {
            let index = index
                .as_integer()
                .and_then(|i| list.resolve_index(i))
                .ok_or_else(|| OpError::right(EvalErrorKind::IndexOutOfBounds(IndexAction::Remove)))?;
            list.remove(index);
            Ok(Value::List(list.clone()))
        }
        (BinaryOp::Mul, Value::List(other)) => {
            list.extend_from(other);
            Ok(Value::List(list.clone()))
        }
        (BinaryOp::Div, Value::Number(index)) => index
            .as_integer()
            .and_then(|i| list.resolve_index(i))
            .and_then(|i| list.get(i))
            .ok_or_else(|| OpError::right(EvalErrorKind::IndexOutOfBounds(IndexAction::Retrieve))),
        _ => Err(OpError::illegal()),
    }
}

#[cfg(test)]
mod tests;
