//! Runtime values.
//!
//! Numbers and strings behave as values: reading a variable clones them.
//! Lists behave as references: a [`ListRef`] is a handle to a shared
//! backing vector, so cloning the handle (which every variable read does)
//! leaves all aliases pointing at the same elements.

use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use pseudo_ir::FunctionDef;
use rustc_hash::FxHashSet;

use crate::builtins::BuiltinFunction;
use crate::environment::{LocalScope, Scope};

/// A numeric scalar.
#[derive(Copy, Clone, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    /// The value as a list index or repeat count, if it is integral.
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(n),
            Number::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(f as i64),
            Number::Float(_) => None,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// Shared handle to a list's elements.
#[derive(Clone, Default)]
pub struct ListRef(Rc<RefCell<Vec<Value>>>);

impl ListRef {
    pub fn new(elements: Vec<Value>) -> Self {
        ListRef(Rc::new(RefCell::new(elements)))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    /// Append every element of `other`. Extending a list with itself
    /// doubles it.
    pub fn extend_from(&self, other: &ListRef) {
        let copied: Vec<Value> = other.0.borrow().clone();
        self.0.borrow_mut().extend(copied);
    }

    pub fn remove(&self, index: usize) -> Option<Value> {
        let mut elements = self.0.borrow_mut();
        (index < elements.len()).then(|| elements.remove(index))
    }

    pub fn elements(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    /// Whether both handles share one backing vector.
    pub fn ptr_eq(&self, other: &ListRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn as_ptr(&self) -> ListPtr {
        Rc::as_ptr(&self.0)
    }

    /// Resolve a possibly negative index against the current length.
    pub fn resolve_index(&self, index: i64) -> Option<usize> {
        let len = i64::try_from(self.len()).ok()?;
        let resolved = if index < 0 { len + index } else { index };
        if (0..len).contains(&resolved) {
            usize::try_from(resolved).ok()
        } else {
            None
        }
    }
}

impl fmt::Debug for ListRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(self, f, &mut FxHashSet::default())
    }
}

type ListPtr = *const RefCell<Vec<Value>>;

/// Render a list, printing `[...]` for any list already on `path`. Strings
/// inside lists are quoted.
fn write_list(
    list: &ListRef,
    f: &mut fmt::Formatter<'_>,
    path: &mut FxHashSet<ListPtr>,
) -> fmt::Result {
    if !path.insert(list.as_ptr()) {
        return f.write_str("[...]");
    }
    f.write_str("[")?;
    for (i, element) in list.elements().iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match element {
            Value::List(inner) => write_list(inner, f, path)?,
            Value::Str(s) => write!(f, "\"{s}\"")?,
            other => write!(f, "{other}")?,
        }
    }
    path.remove(&list.as_ptr());
    f.write_str("]")
}

/// Structural equality. A pair of lists already being compared further up
/// the path counts as equal, so cyclic lists terminate.
fn lists_eq(a: &ListRef, b: &ListRef, path: &mut FxHashSet<(ListPtr, ListPtr)>) -> bool {
    if a.ptr_eq(b) {
        return true;
    }
    let key = (a.as_ptr(), b.as_ptr());
    if !path.insert(key) {
        return true;
    }
    let (left, right) = (a.elements(), b.elements());
    let equal = left.len() == right.len()
        && left.iter().zip(right.iter()).all(|pair| match pair {
            (Value::List(x), Value::List(y)) => lists_eq(x, y, path),
            (x, y) => x == y,
        });
    path.remove(&key);
    equal
}

/// A user-defined function together with the scope it was defined in.
#[derive(Clone)]
pub struct FunctionValue {
    pub def: Rc<FunctionDef>,
    pub closure: LocalScope<Scope>,
}

impl FunctionValue {
    pub fn new(def: Rc<FunctionDef>, closure: LocalScope<Scope>) -> Self {
        FunctionValue { def, closure }
    }

    pub fn name(&self) -> &str {
        self.def.name.as_deref().unwrap_or("<anonymous>")
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name())
    }
}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Number(Number),
    Str(String),
    List(ListRef),
    Function(FunctionValue),
    BuiltIn(BuiltinFunction),
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Number(Number::Int(n))
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn list(elements: Vec<Value>) -> Self {
        Value::List(ListRef::new(elements))
    }

    /// `NULL` is the number zero.
    #[inline]
    pub fn null() -> Self {
        Value::int(0)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::int(i64::from(b))
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => !n.is_zero(),
            Value::Str(s) => !s.is_empty(),
            Value::List(l) => !l.is_empty(),
            Value::Function(_) | Value::BuiltIn(_) => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => lists_eq(a, b, &mut FxHashSet::default()),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(&a.def, &b.def),
            (Value::BuiltIn(a), Value::BuiltIn(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::List(list) => write_list(list, f, &mut FxHashSet::default()),
            Value::Function(func) => write!(f, "<function {}>", func.name()),
            Value::BuiltIn(builtin) => write!(f, "<built-in function {}>", builtin.name),
        }
    }
}
