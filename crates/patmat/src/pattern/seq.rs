//! Sequence destructuring patterns.

use std::iter;

use patmat_value::Value;

use super::Pattern;
use crate::capture::{Id, RefId};
use crate::PatternError;

/// One positional element of a sequence pattern.
#[derive(Clone, Debug)]
pub enum Element {
    /// Matches exactly one item.
    One(Pattern),
    /// Matches zero or more consecutive items, each against the pattern.
    Rest(Pattern),
}

impl From<Pattern> for Element {
    fn from(pattern: Pattern) -> Self {
        Element::One(pattern)
    }
}

impl From<&Id> for Element {
    fn from(id: &Id) -> Self {
        Element::One(id.into())
    }
}

impl From<&RefId> for Element {
    fn from(id: &RefId) -> Self {
        Element::One(id.into())
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Element::One(Pattern::Literal(value))
    }
}

/// A rest element: zero or more items, each matching `pattern`.
pub fn rest(pattern: impl Into<Pattern>) -> Element {
    Element::Rest(pattern.into())
}

/// The rest element of a sequence and the fixed elements after it.
#[derive(Clone, Debug)]
pub(crate) struct RestSplit {
    pub(crate) each: Box<Pattern>,
    pub(crate) tail: Vec<Pattern>,
}

/// A sequence pattern: fixed head elements, then optionally one rest element
/// followed by fixed tail elements.
///
/// Holding the rest as a single optional split makes a second rest element
/// unrepresentable; [`SeqPattern::from_elements`] rejects it up front.
#[derive(Clone, Debug)]
pub struct SeqPattern {
    pub(crate) head: Vec<Pattern>,
    pub(crate) rest: Option<RestSplit>,
}

impl SeqPattern {
    /// Sequence of exactly `items.len()` elements.
    pub fn fixed(items: impl IntoIterator<Item = Pattern>) -> Self {
        SeqPattern {
            head: items.into_iter().collect(),
            rest: None,
        }
    }

    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Result<Self, PatternError> {
        let mut head = Vec::new();
        let mut rest: Option<(usize, RestSplit)> = None;

        for (position, element) in elements.into_iter().enumerate() {
            match element {
                Element::One(p) => match rest.as_mut() {
                    Some((_, split)) => split.tail.push(p),
                    None => head.push(p),
                },
                Element::Rest(p) => {
                    if let Some((first, _)) = &rest {
                        tracing::debug!(
                            first = *first,
                            second = position,
                            "rejecting sequence with a second rest element"
                        );
                        return Err(PatternError::MultipleRest {
                            first: *first,
                            second: position,
                        });
                    }
                    rest = Some((
                        position,
                        RestSplit {
                            each: Box::new(p),
                            tail: Vec::new(),
                        },
                    ));
                }
            }
        }

        Ok(SeqPattern {
            head,
            rest: rest.map(|(_, split)| split),
        })
    }

    /// Elements before the rest (all elements when there is no rest).
    pub fn head(&self) -> &[Pattern] {
        &self.head
    }

    /// The pattern each item of the rest must match.
    pub fn rest(&self) -> Option<&Pattern> {
        self.rest.as_ref().map(|split| &*split.each)
    }

    /// Elements after the rest.
    pub fn tail(&self) -> &[Pattern] {
        match &self.rest {
            Some(split) => &split.tail,
            None => &[],
        }
    }

    #[inline]
    pub fn has_rest(&self) -> bool {
        self.rest.is_some()
    }

    /// Fewest items a matching sequence can have.
    pub fn min_len(&self) -> usize {
        self.head.len() + self.tail().len()
    }

    /// Every sub-pattern in positional order, the rest pattern included once.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.head.iter().chain(
            self.rest
                .iter()
                .flat_map(|split| iter::once(&*split.each).chain(split.tail.iter())),
        )
    }
}
