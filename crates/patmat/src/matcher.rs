//! Matching dispatcher.
//!
//! [`match_pattern`] walks a pattern tree against a value tree. Dispatch is a
//! single exhaustive `match` over the closed [`Pattern`] variants, so every
//! (pattern, value) pair has a defined outcome: a pattern of the wrong shape
//! for a value is a plain `false`, never an error.
//!
//! # Subjects
//!
//! Most of the time the value being matched lives inside the caller's value
//! (`Subject::Rooted`) and referencing captures may borrow it. Below a
//! transform the value is a temporary computed during the match
//! (`Subject::Detached`); only owning captures can commit there, which
//! pattern construction already guarantees.

mod combinators;
mod rest;
mod sequence;

use patmat_value::{Name, Value};

use crate::capture::{Bindings, Capture};
use crate::pattern::{Pattern, ProjectFn};
use crate::stack::ensure_sufficient_stack;

/// Match `value` against `pattern`, committing captures into `bindings`.
///
/// Commitments from earlier attempts that are still in `bindings` take part
/// in the consistency check. Call [`reset_bindings`] (or
/// [`Bindings::clear`]) between independent attempts against one table.
///
/// On failure the table may hold partial commitments; they carry no meaning
/// and should be reset before reuse.
#[tracing::instrument(level = "trace", skip_all)]
pub fn match_pattern<'v>(value: &'v Value, pattern: &Pattern, bindings: &mut Bindings<'v>) -> bool {
    dispatch(Subject::Rooted(value), pattern, bindings)
}

/// Clear every capture reachable from `pattern`.
///
/// Commitments for names the pattern does not mention are left alone.
pub fn reset_bindings(pattern: &Pattern, bindings: &mut Bindings<'_>) {
    bindings.forget(&pattern.capture_names());
}

impl Pattern {
    /// Match against a fresh binding table, returning it on success.
    pub fn matches<'v>(&self, value: &'v Value) -> Option<Bindings<'v>> {
        let mut bindings = Bindings::new();
        match_pattern(value, self, &mut bindings).then_some(bindings)
    }

    pub fn is_match(&self, value: &Value) -> bool {
        self.matches(value).is_some()
    }
}

/// The value under the cursor, and whether it can be borrowed for `'v`.
#[derive(Clone, Copy)]
pub(crate) enum Subject<'v, 't> {
    Rooted(&'v Value),
    Detached(&'t Value),
}

impl<'v: 't, 't> Subject<'v, 't> {
    #[inline]
    fn value(self) -> &'t Value {
        match self {
            Subject::Rooted(v) => v,
            Subject::Detached(v) => v,
        }
    }

    fn project(self, func: &ProjectFn) -> Option<Self> {
        match self {
            Subject::Rooted(v) => func(v).map(Subject::Rooted),
            Subject::Detached(v) => func(v).map(Subject::Detached),
        }
    }

    fn items(self) -> Option<Items<'v, 't>> {
        match self {
            Subject::Rooted(v) => v.as_seq().map(Items::Rooted),
            Subject::Detached(v) => v.as_seq().map(Items::Detached),
        }
    }

    fn variant(self) -> Option<(&'t Name, &'t Name, Items<'v, 't>)> {
        match self {
            Subject::Rooted(v) => v
                .as_variant()
                .map(|(ty, name, fields)| (ty, name, Items::Rooted(fields))),
            Subject::Detached(v) => v
                .as_variant()
                .map(|(ty, name, fields)| (ty, name, Items::Detached(fields))),
        }
    }
}

/// A slice of sequence items, carrying the same borrow mode as [`Subject`].
#[derive(Clone, Copy)]
pub(crate) enum Items<'v, 't> {
    Rooted(&'v [Value]),
    Detached(&'t [Value]),
}

impl<'v: 't, 't> Items<'v, 't> {
    #[inline]
    fn len(self) -> usize {
        match self {
            Items::Rooted(s) => s.len(),
            Items::Detached(s) => s.len(),
        }
    }

    /// Item at `index`; callers stay below [`Items::len`].
    #[inline]
    fn at(self, index: usize) -> Subject<'v, 't> {
        match self {
            Items::Rooted(s) => Subject::Rooted(&s[index]),
            Items::Detached(s) => Subject::Detached(&s[index]),
        }
    }

    /// Items from `start` on; `start` is at most [`Items::len`].
    fn skip(self, start: usize) -> Self {
        match self {
            Items::Rooted(s) => Items::Rooted(&s[start..]),
            Items::Detached(s) => Items::Detached(&s[start..]),
        }
    }

    /// The first `end` items; `end` is at most [`Items::len`].
    fn take(self, end: usize) -> Self {
        match self {
            Items::Rooted(s) => Items::Rooted(&s[..end]),
            Items::Detached(s) => Items::Detached(&s[..end]),
        }
    }

    fn iter(self) -> impl Iterator<Item = Subject<'v, 't>> {
        (0..self.len()).map(move |i| self.at(i))
    }
}

pub(crate) fn dispatch<'v: 't, 't>(
    subject: Subject<'v, 't>,
    pattern: &Pattern,
    bindings: &mut Bindings<'v>,
) -> bool {
    ensure_sufficient_stack(|| match pattern {
        Pattern::Wildcard => true,
        Pattern::Literal(literal) => literal == subject.value(),
        Pattern::Predicate(predicate) => predicate.test(subject.value()),
        Pattern::Or(alternatives) => combinators::match_or(subject, alternatives, bindings),
        Pattern::And(patterns) => combinators::match_and(subject, patterns, bindings),
        Pattern::Not(inner) => combinators::match_not(subject, inner, bindings),
        Pattern::Transform(transform) => {
            combinators::match_transform(subject, transform, bindings)
        }
        Pattern::Project(project) => combinators::match_project(subject, project, bindings),
        Pattern::PostCheck(check) => combinators::match_post_check(subject, check, bindings),
        Pattern::Capture(capture) => commit(subject, capture, bindings),
        Pattern::Sequence(seq) => subject
            .items()
            .is_some_and(|items| sequence::match_sequence(items, seq, bindings)),
        Pattern::Variant(variant) => sequence::match_variant(subject, variant, bindings),
    })
}

fn commit<'v: 't, 't>(subject: Subject<'v, 't>, capture: &Capture, bindings: &mut Bindings<'v>) -> bool {
    match (capture, subject) {
        (Capture::Owning(id), subject) => bindings.commit_owned(id.name(), subject.value()),
        (Capture::Referencing(id), Subject::Rooted(value)) => {
            bindings.commit_borrowed(id.name(), value)
        }
        (Capture::Referencing(id), Subject::Detached(_)) => {
            tracing::warn!(
                capture = id.name().as_str(),
                "referencing capture reached a transformed value"
            );
            false
        }
    }
}
