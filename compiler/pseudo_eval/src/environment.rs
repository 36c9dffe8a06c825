//! Lexical scopes and the call-context chain.
//!
//! The two chains are independent. [`Scope`] parents follow where a
//! function was *defined* and are used for name resolution.
//! [`CallContext`] parents follow who *called* whom and are used only to
//! build tracebacks.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use pseudo_diagnostic::TraceFrame;
use pseudo_ir::Span;

use crate::value::Value;

/// A single-threaded shared, mutable cell.
///
/// Wraps `Rc<RefCell<T>>` so every scope allocation goes through
/// [`LocalScope::new`]. Not thread-safe; evaluation runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Variable bindings plus an optional enclosing scope.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Resolve `name`, innermost scope first.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    /// Binding in this scope only.
    pub fn get_local(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}

// Closures capture their defining scope, which may hold the closure itself;
// printing the parent would recurse forever.
impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Scope")
            .field("bindings", &names)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// One link in the dynamic call chain.
#[derive(Debug)]
pub struct CallContext {
    pub display_name: String,
    pub parent: Option<Rc<CallContext>>,
    /// Call site in the parent context.
    pub entry_span: Option<Span>,
    pub depth: usize,
}

impl CallContext {
    pub const PROGRAM: &'static str = "<program>";

    pub fn program() -> Rc<Self> {
        Rc::new(CallContext {
            display_name: Self::PROGRAM.to_string(),
            parent: None,
            entry_span: None,
            depth: 0,
        })
    }

    pub fn child(parent: &Rc<Self>, display_name: impl Into<String>, entry_span: Span) -> Rc<Self> {
        Rc::new(CallContext {
            display_name: display_name.into(),
            parent: Some(Rc::clone(parent)),
            entry_span: Some(entry_span),
            depth: parent.depth + 1,
        })
    }

    /// Frames for an error raised at `span` inside this context, outermost
    /// first. Each parent frame is located at the call site recorded in its
    /// child.
    pub fn traceback(&self, span: Span) -> Vec<TraceFrame> {
        let mut frames = vec![TraceFrame::new(self.display_name.clone(), span)];
        let mut current = self;
        while let (Some(parent), Some(entry)) = (current.parent.as_deref(), current.entry_span) {
            frames.push(TraceFrame::new(parent.display_name.clone(), entry));
            current = parent;
        }
        frames.reverse();
        frames
    }
}

/// The pair of chains active while evaluating a node.
#[derive(Clone, Debug)]
pub struct Frame {
    pub scope: LocalScope<Scope>,
    pub context: Rc<CallContext>,
}

impl Frame {
    pub fn new(scope: LocalScope<Scope>, context: Rc<CallContext>) -> Self {
        Frame { scope, context }
    }
}
