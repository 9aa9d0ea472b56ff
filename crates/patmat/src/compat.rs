//! Static compatibility between value types and patterns.
//!
//! [`is_matchable`] answers "is there a matching rule for this type at every
//! node of the pattern" without a value in hand. It is a capability check,
//! not a satisfiability check: `Or` and `And` need every branch to have a
//! rule, and `Not` needs its inner pattern to have one. So `not(lit("a"))`
//! is not matchable against `Int` even though it matches `1`.
//!
//! `Ty::Any` and undeclared predicate or transform types are compatible with
//! everything. A `true` does not mean some value of `ty` will match.

use patmat_value::Ty;

use crate::pattern::{Pattern, SeqPattern};
use crate::stack::ensure_sufficient_stack;

/// Whether every node of `pattern` has a matching rule for type `ty`.
pub fn is_matchable(ty: &Ty, pattern: &Pattern) -> bool {
    ensure_sufficient_stack(|| match pattern {
        Pattern::Wildcard | Pattern::Capture(_) => true,
        Pattern::Literal(value) => value.ty().overlaps(ty),
        Pattern::Predicate(predicate) => predicate.domain().overlaps(ty),
        Pattern::Or(patterns) | Pattern::And(patterns) => {
            patterns.iter().all(|p| is_matchable(ty, p))
        }
        Pattern::Not(inner) => is_matchable(ty, inner),
        Pattern::PostCheck(check) => is_matchable(ty, &check.inner),
        Pattern::Transform(transform) => {
            transform.domain.overlaps(ty) && is_matchable(&transform.codomain, &transform.inner)
        }
        Pattern::Project(project) => {
            (project.shape)(ty).is_some_and(|part| is_matchable(&part, &project.inner))
        }
        Pattern::Sequence(seq) => sequence_matchable(ty, seq),
        Pattern::Variant(variant) => {
            let declared = match (ty, &variant.type_name) {
                (Ty::Any, _) | (Ty::Variant(_), None) => true,
                (Ty::Variant(actual), Some(expected)) => actual == expected,
                _ => false,
            };
            declared
                && variant.fields.patterns().all(|p| is_matchable(&Ty::Any, p))
        }
    })
}

fn sequence_matchable(ty: &Ty, seq: &SeqPattern) -> bool {
    match ty {
        Ty::Any => seq.patterns().all(|p| is_matchable(&Ty::Any, p)),
        Ty::List(elem) => seq.patterns().all(|p| is_matchable(elem, p)),
        Ty::Tuple(elems) => tuple_matchable(elems, seq),
        _ => false,
    }
}

/// Tuple arity is known statically: head positions line up from the front,
/// tail positions from the back, and the rest covers whatever is between.
fn tuple_matchable(elems: &[Ty], seq: &SeqPattern) -> bool {
    let (head, tail) = (seq.head(), seq.tail());
    let Some(each) = seq.rest() else {
        return elems.len() == head.len() && pairwise(elems, head);
    };
    if elems.len() < head.len() + tail.len() {
        return false;
    }
    let (front, after) = elems.split_at(head.len());
    let (middle, back) = after.split_at(after.len() - tail.len());
    pairwise(front, head) && middle.iter().all(|t| is_matchable(t, each)) && pairwise(back, tail)
}

fn pairwise(tys: &[Ty], patterns: &[Pattern]) -> bool {
    tys.iter().zip(patterns).all(|(t, p)| is_matchable(t, p))
}
