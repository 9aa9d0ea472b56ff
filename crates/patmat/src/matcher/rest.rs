//! Resolution of a rest element inside a sequence pattern.
//!
//! For `head ++ [..each] ++ tail` against `n` items, the head and the
//! structural minimum are settled first. The rest then takes `k` items for
//! ascending `k`, and `tail` must match exactly what is left:
//!
//! - `k = 0`: `tail` against all remaining items.
//! - `k > 0`: item `k - 1` must match `each`. If it doesn't, no larger `k`
//!   can succeed either (that item is covered by every larger split), so the
//!   search stops there.
//!
//! At most `n + 1` splits are tried. A failed `tail` attempt is rolled back
//! before the next split; commitments made by `each` persist, since every
//! larger split covers the same items.

use super::sequence::match_fixed;
use super::{dispatch, Items};
use crate::capture::Bindings;
use crate::pattern::seq::RestSplit;
use crate::pattern::Pattern;

pub(super) fn match_with_rest<'v: 't, 't>(
    items: Items<'v, 't>,
    head: &[Pattern],
    split: &RestSplit,
    bindings: &mut Bindings<'v>,
) -> bool {
    let min = head.len() + split.tail.len();
    if items.len() < min {
        tracing::trace!(min, found = items.len(), "sequence too short for its fixed elements");
        return false;
    }
    if !match_fixed(items.take(head.len()), head, bindings) {
        return false;
    }
    resolve(items.skip(head.len()), &split.each, &split.tail, bindings)
}

fn resolve<'v: 't, 't>(
    items: Items<'v, 't>,
    each: &Pattern,
    tail: &[Pattern],
    bindings: &mut Bindings<'v>,
) -> bool {
    for k in 0..=items.len() {
        if k > 0 && !dispatch(items.at(k - 1), each, bindings) {
            tracing::trace!(k, "rest element rejected an item; no longer split can match");
            return false;
        }
        tracing::trace!(k, "trying rest split");
        let mark = bindings.mark();
        if match_fixed(items.skip(k), tail, bindings) {
            return true;
        }
        bindings.rollback(mark);
    }
    false
}
