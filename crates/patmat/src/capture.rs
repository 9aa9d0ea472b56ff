//! Capture cells and the per-attempt binding table.
//!
//! A capture cell is a named handle ([`Id`] or [`RefId`]) placed in a pattern
//! tree. The values committed to cells during a match attempt live outside the
//! tree, in a [`Bindings`] table threaded through the match. The pattern tree
//! itself is never written to, so one tree can serve many attempts, on many
//! threads, each with its own table.
//!
//! # Ownership modes
//!
//! - [`Id`] commits an owned [`Value`]. The commitment is independent of the
//!   matched value and can be detached with [`Bindings::take`].
//! - [`RefId`] commits `&'v Value`, a borrow into the matched value. The table
//!   is `Bindings<'v>`, so the borrow checker stops a referencing capture from
//!   outliving the value it points into:
//!
//! ```compile_fail
//! use patmat::{match_pattern, Bindings, Pattern, RefId};
//! use patmat_value::Value;
//!
//! let xs = RefId::new("xs");
//! let pattern = Pattern::from(&xs);
//! let escaped;
//! {
//!     let source = Value::list(vec![Value::int(1)]);
//!     let mut bindings = Bindings::new();
//!     match_pattern(&source, &pattern, &mut bindings);
//!     escaped = bindings.get_ref(&xs);
//! }
//! // `source` is gone; the borrow cannot reach here.
//! println!("{escaped:?}");
//! ```
//!
//! # Consistency
//!
//! A name is committed at most once per attempt. Every later encounter of the
//! same name must be equal to the committed value, otherwise the match fails.
//! This gives non-linear patterns: `(x, x)` only matches pairs of equal values.

use std::fmt;

use patmat_value::{Name, Value};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::CaptureError;

/// Owning capture cell.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Id {
    name: Name,
}

impl Id {
    pub fn new(name: impl Into<Name>) -> Self {
        Id { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.name)
    }
}

/// Referencing capture cell.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RefId {
    name: Name,
}

impl RefId {
    pub fn new(name: impl Into<Name>) -> Self {
        RefId { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl fmt::Debug for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RefId({})", self.name)
    }
}

/// A capture cell as it appears in a pattern tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Capture {
    Owning(Id),
    Referencing(RefId),
}

impl Capture {
    pub fn name(&self) -> &Name {
        match self {
            Capture::Owning(id) => id.name(),
            Capture::Referencing(id) => id.name(),
        }
    }

    pub fn is_referencing(&self) -> bool {
        matches!(self, Capture::Referencing(_))
    }
}

/// A committed value.
#[derive(Clone, Debug)]
pub enum Slot<'v> {
    Owned(Value),
    Borrowed(&'v Value),
}

impl Slot<'_> {
    #[inline]
    pub fn value(&self) -> &Value {
        match self {
            Slot::Owned(v) => v,
            Slot::Borrowed(v) => *v,
        }
    }
}

struct Binding<'v> {
    name: Name,
    slot: Slot<'v>,
}

/// Position in the binding trail.
///
/// Rolling back to a mark undoes every commitment made after it was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Mark(usize);

/// Capture commitments of one match attempt.
///
/// Commitments are kept in the order they were made, which doubles as the
/// undo trail for backtracking (`Or` alternatives, rest splits, negation).
#[derive(Default)]
pub struct Bindings<'v> {
    trail: SmallVec<[Binding<'v>; 4]>,
}

impl<'v> Bindings<'v> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    fn find(&self, name: &str) -> Option<&Binding<'v>> {
        self.trail.iter().find(|b| b.name.as_str() == name)
    }

    /// Committed value for a capture name, whatever its mode.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.find(name).map(|b| b.slot.value())
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn get(&self, id: &Id) -> Option<&Value> {
        self.lookup(id.name().as_str())
    }

    /// Committed value of an owning capture.
    ///
    /// Reading a cell that no successful match committed is a usage error.
    pub fn value(&self, id: &Id) -> Result<&Value, CaptureError> {
        self.get(id).ok_or_else(|| CaptureError::Unbound {
            name: id.name().clone(),
        })
    }

    /// Borrow into the matched value committed by a referencing capture.
    ///
    /// Returns `None` when the name is unbound, or when an owning capture of
    /// the same name committed first.
    pub fn get_ref(&self, id: &RefId) -> Option<&'v Value> {
        match &self.find(id.name().as_str())?.slot {
            Slot::Borrowed(v) => Some(*v),
            Slot::Owned(_) => None,
        }
    }

    pub fn value_ref(&self, id: &RefId) -> Result<&'v Value, CaptureError> {
        match self.find(id.name().as_str()).map(|b| &b.slot) {
            Some(Slot::Borrowed(v)) => Ok(*v),
            Some(Slot::Owned(_)) => Err(CaptureError::NotReferenced {
                name: id.name().clone(),
            }),
            None => Err(CaptureError::Unbound {
                name: id.name().clone(),
            }),
        }
    }

    /// Detach an owning commitment from the table.
    ///
    /// The returned value does not borrow from the matched value, so it stays
    /// usable after the matched value and this table are gone.
    pub fn take(&mut self, id: &Id) -> Option<Value> {
        let pos = self
            .trail
            .iter()
            .position(|b| b.name == *id.name() && matches!(b.slot, Slot::Owned(_)))?;
        match self.trail.remove(pos).slot {
            Slot::Owned(v) => Some(v),
            Slot::Borrowed(_) => None,
        }
    }

    /// Commitments in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> + '_ {
        self.trail.iter().map(|b| (&b.name, b.slot.value()))
    }

    /// Discard every commitment.
    pub fn clear(&mut self) {
        self.trail.clear();
    }

    #[inline]
    pub(crate) fn mark(&self) -> Mark {
        Mark(self.trail.len())
    }

    #[inline]
    pub(crate) fn rollback(&mut self, mark: Mark) {
        self.trail.truncate(mark.0);
    }

    /// Commit a copy of `value`, or compare against an earlier commitment.
    pub(crate) fn commit_owned(&mut self, name: &Name, value: &Value) -> bool {
        if let Some(existing) = self.find(name.as_str()) {
            return existing.slot.value() == value;
        }
        self.trail.push(Binding {
            name: name.clone(),
            slot: Slot::Owned(value.clone()),
        });
        true
    }

    /// Commit a borrow of `value`, or compare against an earlier commitment.
    pub(crate) fn commit_borrowed(&mut self, name: &Name, value: &'v Value) -> bool {
        if let Some(existing) = self.find(name.as_str()) {
            return existing.slot.value() == value;
        }
        self.trail.push(Binding {
            name: name.clone(),
            slot: Slot::Borrowed(value),
        });
        true
    }

    /// Drop the commitments of the given names.
    pub(crate) fn forget(&mut self, names: &FxHashSet<Name>) {
        self.trail.retain(|b| !names.contains(&b.name));
    }
}

impl fmt::Debug for Bindings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
