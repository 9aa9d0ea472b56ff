//! Matching one pattern against many values in parallel.
//!
//! A pattern tree is read-only during matching and every attempt gets its own
//! [`Bindings`], so attempts on the rayon pool share the tree and nothing
//! else.

use patmat_value::Value;
use rayon::prelude::*;

use crate::capture::Bindings;
use crate::pattern::Pattern;

/// Match `pattern` against each value, in parallel.
///
/// The result is positionally aligned with `values`: the bindings of a
/// successful attempt, `None` otherwise.
pub fn par_match<'v>(pattern: &Pattern, values: &'v [Value]) -> Vec<Option<Bindings<'v>>> {
    tracing::debug!(count = values.len(), "batch match");
    values.par_iter().map(|value| pattern.matches(value)).collect()
}

/// Indices of the values `pattern` matches, in ascending order.
pub fn par_filter(pattern: &Pattern, values: &[Value]) -> Vec<usize> {
    values
        .par_iter()
        .enumerate()
        .filter(|(_, value)| pattern.is_match(value))
        .map(|(index, _)| index)
        .collect()
}
