//! Errors reported at the edges of the engine.
//!
//! Matching itself never fails with an error: a pattern that does not apply
//! to a value yields `false`. Errors only come from building a malformed
//! pattern or from reading a capture that was never committed.

use patmat_value::Name;

/// A pattern that cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// A sequence may contain at most one rest element.
    #[error("sequence pattern has a second rest element at position {second} (first at {first})")]
    MultipleRest { first: usize, second: usize },

    /// The value under a transform is a temporary; nothing may borrow it.
    #[error("referencing capture `{name}` cannot bind the output of a transform")]
    ReferenceUnderTransform { name: Name },
}

/// A capture read that breaks the accessor contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("capture `{name}` is not bound")]
    Unbound { name: Name },

    /// The name was committed by an owning capture, so there is no borrow to hand out.
    #[error("capture `{name}` holds a copy, not a reference into the matched value")]
    NotReferenced { name: Name },
}
