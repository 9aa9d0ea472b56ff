//! Stack guard for matching deeply nested patterns and values.
//!
//! The dispatcher recurses once per pattern node and once per sequence element
//! it descends into. Patterns built programmatically (long `Or` chains folded
//! into nested nodes, values nested thousands of levels deep) can exceed the
//! default thread stack, so every recursive entry goes through
//! [`ensure_sufficient_stack`].
//!
//! On WASM targets, where stacker isn't available, the closure is called
//! directly.

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (100KB red zone).
    const RED_ZONE: usize = 100 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
