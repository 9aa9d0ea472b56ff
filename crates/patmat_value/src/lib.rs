//! Patmat Value - the host value model for the patmat matching engine.
//!
//! This crate provides:
//! - `Value`, a dynamically typed, immutable value tree (scalars, strings,
//!   lists, tuples, options, results, user-defined variants)
//! - `Heap<T>`, the `Arc`-backed payload wrapper composite values are built on
//! - `Name`, shared identifiers for variant names and capture cells
//! - `Ty`, static type descriptors used to ask whether a pattern can apply to
//!   values of a given type before any value exists

mod heap;
mod name;
mod ty;
mod value;

pub use heap::Heap;
pub use name::Name;
pub use ty::Ty;
pub use value::Value;
