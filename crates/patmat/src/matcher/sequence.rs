//! Positional destructuring of lists, tuples and variant fields.

use super::{dispatch, rest, Items, Subject};
use crate::capture::Bindings;
use crate::pattern::{Pattern, SeqPattern, VariantPattern};

pub(super) fn match_sequence<'v: 't, 't>(
    items: Items<'v, 't>,
    seq: &SeqPattern,
    bindings: &mut Bindings<'v>,
) -> bool {
    match &seq.rest {
        None => match_fixed(items, &seq.head, bindings),
        Some(split) => rest::match_with_rest(items, &seq.head, split, bindings),
    }
}

/// Exact-arity match. The lengths are compared before any element is visited,
/// so a mismatched sequence never commits anything.
pub(super) fn match_fixed<'v: 't, 't>(
    items: Items<'v, 't>,
    patterns: &[Pattern],
    bindings: &mut Bindings<'v>,
) -> bool {
    if items.len() != patterns.len() {
        tracing::trace!(
            expected = patterns.len(),
            found = items.len(),
            "sequence arity mismatch"
        );
        return false;
    }
    items
        .iter()
        .zip(patterns)
        .all(|(item, pattern)| dispatch(item, pattern, bindings))
}

pub(super) fn match_variant<'v: 't, 't>(
    subject: Subject<'v, 't>,
    variant: &VariantPattern,
    bindings: &mut Bindings<'v>,
) -> bool {
    let Some((type_name, name, fields)) = subject.variant() else {
        return false;
    };
    if variant.type_name.as_ref().is_some_and(|expected| expected != type_name) {
        return false;
    }
    *name == variant.name && match_sequence(fields, &variant.fields, bindings)
}
