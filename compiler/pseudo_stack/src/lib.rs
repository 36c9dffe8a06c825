//! Stack growth for deeply nested programs.
//!
//! The parser descends once per precedence level and the evaluator once per
//! AST node, so a long chain like `((((1))))` or a deeply recursive user
//! function can exhaust the host thread's stack. Every recursive entry point
//! wraps its body in [`ensure_sufficient_stack`], which moves execution onto
//! a freshly allocated segment when the current one runs low.
//!
//! On `wasm32` the call is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
