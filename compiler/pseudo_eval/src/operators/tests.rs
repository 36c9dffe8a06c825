#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

fn bin(op: BinaryOp, left: Value, right: Value) -> OpResult {
    evaluate_binary(op, &left, &right)
}

fn ints(values: &[i64]) -> Value {
    Value::list(values.iter().copied().map(Value::int).collect())
}

#[test]
fn integer_arithmetic_stays_integral() {
    assert_eq!(bin(BinaryOp::Add, Value::int(2), Value::int(3)).unwrap(), Value::int(5));
    assert_eq!(bin(BinaryOp::Sub, Value::int(2), Value::int(3)).unwrap(), Value::int(-1));
    assert_eq!(bin(BinaryOp::Mul, Value::int(4), Value::int(3)).unwrap(), Value::int(12));
}

#[test]
fn mixed_arithmetic_widens_to_float() {
    let sum = bin(BinaryOp::Add, Value::int(1), Value::float(0.5)).unwrap();
    assert_eq!(sum.to_string(), "1.5");
}

#[test]
fn division_is_always_float() {
    let quotient = bin(BinaryOp::Div, Value::int(6), Value::int(3)).unwrap();
    assert_eq!(quotient.to_string(), "2.0");
}

#[test]
fn division_by_zero_blames_right_operand() {
    for op in [BinaryOp::Div, BinaryOp::Mod] {
        let err = bin(op, Value::int(5), Value::int(0)).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        assert_eq!(err.blame, Blame::Right);
    }
}

#[test]
fn modulo_takes_divisor_sign() {
    assert_eq!(bin(BinaryOp::Mod, Value::int(7), Value::int(3)).unwrap(), Value::int(1));
    assert_eq!(bin(BinaryOp::Mod, Value::int(-7), Value::int(3)).unwrap(), Value::int(2));
    assert_eq!(bin(BinaryOp::Mod, Value::int(7), Value::int(-3)).unwrap(), Value::int(-2));
    assert_eq!(
        bin(BinaryOp::Mod, Value::float(-1.5), Value::int(1)).unwrap(),
        Value::float(0.5)
    );
}

#[test]
fn power_rules() {
    assert_eq!(bin(BinaryOp::Pow, Value::int(2), Value::int(10)).unwrap(), Value::int(1024));
    assert_eq!(bin(BinaryOp::Pow, Value::int(2), Value::int(-1)).unwrap(), Value::float(0.5));
    let err = bin(BinaryOp::Pow, Value::int(0), Value::int(-1)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn power_of_trivial_bases_ignores_exponent_size() {
    let huge = Value::int(5_000_000_000);
    assert_eq!(bin(BinaryOp::Pow, Value::int(1), huge.clone()).unwrap(), Value::int(1));
    assert_eq!(bin(BinaryOp::Pow, Value::int(0), huge.clone()).unwrap(), Value::int(0));
    assert_eq!(bin(BinaryOp::Pow, Value::int(-1), huge).unwrap(), Value::int(1));
    assert_eq!(
        bin(BinaryOp::Pow, Value::int(-1), Value::int(5_000_000_001)).unwrap(),
        Value::int(-1)
    );
    assert_eq!(bin(BinaryOp::Pow, Value::int(0), Value::int(0)).unwrap(), Value::int(1));
}

#[test]
fn overflow_is_an_error() {
    let err = bin(BinaryOp::Add, Value::int(i64::MAX), Value::int(1)).unwrap_err();
    assert_eq!(err.kind.to_string(), "Integer overflow in addition");
    let err = bin(BinaryOp::Pow, Value::int(10), Value::int(40)).unwrap_err();
    assert_eq!(err.kind.to_string(), "Integer overflow in exponentiation");
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_eq!(bin(BinaryOp::Lt, Value::int(1), Value::float(1.5)).unwrap(), Value::int(1));
    assert_eq!(bin(BinaryOp::Eq, Value::int(2), Value::float(2.0)).unwrap(), Value::int(1));
    assert_eq!(bin(BinaryOp::GtEq, Value::int(1), Value::int(2)).unwrap(), Value::int(0));
    assert_eq!(
        bin(BinaryOp::Lt, Value::string("abc"), Value::string("abd")).unwrap(),
        Value::int(1)
    );
}

#[test]
fn string_concat_and_repeat() {
    assert_eq!(
        bin(BinaryOp::Add, Value::string("ab"), Value::string("cd")).unwrap(),
        Value::string("abcd")
    );
    assert_eq!(
        bin(BinaryOp::Mul, Value::string("ab"), Value::int(3)).unwrap(),
        Value::string("ababab")
    );
    assert_eq!(
        bin(BinaryOp::Mul, Value::string("ab"), Value::int(-2)).unwrap(),
        Value::string("")
    );
}

#[test]
fn mismatched_types_are_illegal() {
    let err = bin(BinaryOp::Add, Value::string("a"), Value::int(1)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IllegalOperation);
    assert_eq!(err.blame, Blame::Whole);
    assert!(bin(BinaryOp::Sub, Value::string("a"), Value::string("b")).is_err());
    assert!(bin(BinaryOp::Mul, Value::int(2), Value::string("b")).is_err());
}

#[test]
fn logic_uses_truthiness_of_any_value() {
    assert_eq!(
        bin(BinaryOp::And, Value::string("x"), ints(&[1])).unwrap(),
        Value::int(1)
    );
    assert_eq!(bin(BinaryOp::Or, Value::null(), Value::string("")).unwrap(), Value::int(0));
}

#[test]
fn list_add_appends_to_shared_backing() {
    let list = ints(&[1]);
    let result = bin(BinaryOp::Add, list.clone(), Value::int(2)).unwrap();
    assert_eq!(list.to_string(), "[1, 2]");
    match (&list, &result) {
        (Value::List(a), Value::List(b)) => assert!(a.ptr_eq(b)),
        _ => panic!("expected lists"),
    }
}

#[test]
fn list_index_ops() {
    let list = ints(&[10, 20, 30]);
    assert_eq!(bin(BinaryOp::Div, list.clone(), Value::int(1)).unwrap(), Value::int(20));
    assert_eq!(bin(BinaryOp::Div, list.clone(), Value::int(-1)).unwrap(), Value::int(30));
    bin(BinaryOp::Sub, list.clone(), Value::int(0)).unwrap();
    assert_eq!(list.to_string(), "[20, 30]");

    let err = bin(BinaryOp::Div, list.clone(), Value::int(5)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IndexOutOfBounds(IndexAction::Retrieve));
    assert_eq!(err.blame, Blame::Right);
    let err = bin(BinaryOp::Sub, list, Value::int(2)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IndexOutOfBounds(IndexAction::Remove));
}

#[test]
fn list_mul_extends() {
    let list = ints(&[1]);
    bin(BinaryOp::Mul, list.clone(), ints(&[2, 3])).unwrap();
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert!(bin(BinaryOp::Mul, list, Value::int(2)).is_err());
}

#[test]
fn unary_ops() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, &Value::int(4)).unwrap(), Value::int(-4));
    assert_eq!(evaluate_unary(UnaryOp::Pos, &Value::string("s")).unwrap(), Value::string("s"));
    assert_eq!(evaluate_unary(UnaryOp::Not, &Value::null()).unwrap(), Value::int(1));
    let err = evaluate_unary(UnaryOp::Neg, &Value::list(vec![])).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IllegalOperation);
}
