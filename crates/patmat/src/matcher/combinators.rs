//! Logical combinators, transforms, projections and guards.

use super::{dispatch, Subject};
use crate::capture::Bindings;
use crate::pattern::{Pattern, PostCheck, Project, Transform};

/// First alternative that matches wins.
///
/// A failed alternative's commitments are rolled back before the next one is
/// tried, so a capture in one branch cannot poison a sibling branch.
pub(super) fn match_or<'v: 't, 't>(
    subject: Subject<'v, 't>,
    alternatives: &[Pattern],
    bindings: &mut Bindings<'v>,
) -> bool {
    for alternative in alternatives {
        let mark = bindings.mark();
        if dispatch(subject, alternative, bindings) {
            return true;
        }
        bindings.rollback(mark);
    }
    false
}

pub(super) fn match_and<'v: 't, 't>(
    subject: Subject<'v, 't>,
    patterns: &[Pattern],
    bindings: &mut Bindings<'v>,
) -> bool {
    patterns.iter().all(|p| dispatch(subject, p, bindings))
}

/// Negation never commits anything, whichever way the inner match goes.
pub(super) fn match_not<'v: 't, 't>(
    subject: Subject<'v, 't>,
    inner: &Pattern,
    bindings: &mut Bindings<'v>,
) -> bool {
    let mark = bindings.mark();
    let matched = dispatch(subject, inner, bindings);
    bindings.rollback(mark);
    !matched
}

pub(super) fn match_transform<'v: 't, 't>(
    subject: Subject<'v, 't>,
    transform: &Transform,
    bindings: &mut Bindings<'v>,
) -> bool {
    let projected = (transform.func)(subject.value());
    dispatch(Subject::Detached(&projected), &transform.inner, bindings)
}

pub(super) fn match_project<'v: 't, 't>(
    subject: Subject<'v, 't>,
    project: &Project,
    bindings: &mut Bindings<'v>,
) -> bool {
    subject
        .project(&*project.func)
        .is_some_and(|part| dispatch(part, &project.inner, bindings))
}

/// Guard runs only after the inner pattern matched. A failing guard does not
/// roll back what the inner pattern committed.
pub(super) fn match_post_check<'v: 't, 't>(
    subject: Subject<'v, 't>,
    check: &PostCheck,
    bindings: &mut Bindings<'v>,
) -> bool {
    dispatch(subject, &check.inner, bindings) && (check.guard)(&*bindings)
}
