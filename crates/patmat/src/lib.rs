//! Patmat - structural pattern matching over dynamic values.
//!
//! This crate provides:
//! - [`Pattern`], a composable pattern algebra: wildcards, literals,
//!   predicates, `or`/`and`/`not`, transforms, projections, guards, captures,
//!   and sequence destructuring with at most one rest element
//! - [`Bindings`], the per-attempt table that receives capture commitments
//! - [`match_pattern`], the matching dispatcher
//! - [`is_matchable`], a static (value type, pattern) compatibility query
//! - [`par_match`] and [`par_filter`] for matching one pattern against many
//!   values on a rayon pool (feature `parallel`)
//!
//! # Example
//!
//! ```
//! use patmat::{match_pattern, rest, Bindings, Id, Pattern};
//! use patmat_value::Value;
//!
//! let last = Id::new("last");
//! let pattern = Pattern::ds([
//!     Pattern::lit(1).into(),
//!     rest(Pattern::meet(|v| v.as_int().is_some_and(|n| n % 2 == 0))),
//!     (&last).into(),
//! ])
//! .unwrap();
//!
//! let value = Value::list(vec![1.into(), 2.into(), 4.into(), 7.into()]);
//! let mut bindings = Bindings::new();
//! assert!(match_pattern(&value, &pattern, &mut bindings));
//! assert_eq!(bindings.get(&last), Some(&Value::int(7)));
//! ```

#[cfg(feature = "parallel")]
mod batch;
mod capture;
mod compat;
mod errors;
mod matcher;
mod pattern;
mod stack;

use std::sync::Once;

#[cfg(feature = "parallel")]
pub use batch::{par_filter, par_match};
pub use capture::{Bindings, Capture, Id, RefId, Slot};
pub use compat::is_matchable;
pub use errors::{CaptureError, PatternError};
pub use matcher::{match_pattern, reset_bindings};
pub use pattern::{
    rest, Element, GuardFn, Pattern, PostCheck, Predicate, PredicateFn, Project, ProjectFn,
    SeqPattern, ShapeFn, Transform, TransformFn, VariantPattern,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=patmat=trace` to follow every rest split.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
