//! The pattern algebra.
//!
//! A [`Pattern`] is an immutable tree over a closed set of variants. It is
//! built once, then matched any number of times; every attempt writes its
//! captures into its own [`Bindings`] table, so a tree can be shared across
//! threads (`Pattern: Send + Sync`).
//!
//! # Building patterns
//!
//! ```text
//! let x = Id::new("x");
//! // (x, _, x) where x is even
//! let pat = Pattern::tuple([
//!     Pattern::from(&x),
//!     Pattern::wildcard(),
//!     Pattern::from(&x),
//! ])
//! .when(move |b| b.get(&x).and_then(Value::as_int).is_some_and(|n| n % 2 == 0));
//!
//! // [1, ..evens, last]
//! let pat = Pattern::ds([
//!     Pattern::lit(1).into(),
//!     rest(Pattern::meet(|v| v.as_int().is_some_and(|n| n % 2 == 0))),
//!     Pattern::from(&last).into(),
//! ])?;
//! ```

pub(crate) mod seq;

use std::fmt;
use std::sync::Arc;

use patmat_value::{Name, Ty, Value};
use rustc_hash::FxHashSet;

use crate::capture::{Bindings, Capture, Id, RefId};
use crate::stack::ensure_sufficient_stack;
use crate::PatternError;

pub use seq::{rest, Element, SeqPattern};

/// One-argument test on a value.
pub type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// Projection producing a new value.
pub type TransformFn = dyn Fn(&Value) -> Value + Send + Sync;

/// Projection borrowing a part of the value.
pub type ProjectFn = dyn for<'a> Fn(&'a Value) -> Option<&'a Value> + Send + Sync;

/// Guard evaluated after a pattern has matched, with its captures visible.
pub type GuardFn = dyn Fn(&Bindings<'_>) -> bool + Send + Sync;

/// Static counterpart of a projection: the type of the projected part, or
/// `None` when values of the given type never project.
pub type ShapeFn = fn(&Ty) -> Option<Ty>;

/// A composable description used to test and destructure a value.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches anything and captures nothing.
    Wildcard,
    /// Matches values equal to the literal.
    Literal(Value),
    Predicate(Predicate),
    /// First alternative that matches wins; later ones are not tried.
    Or(Vec<Pattern>),
    /// Every sub-pattern must match; stops at the first failure.
    And(Vec<Pattern>),
    Not(Box<Pattern>),
    Transform(Transform),
    Project(Project),
    PostCheck(PostCheck),
    Capture(Capture),
    /// Positional destructuring of a list or tuple.
    Sequence(SeqPattern),
    /// A user-defined variant with destructured fields.
    Variant(VariantPattern),
}

/// Predicate node: a boolean function of the value.
#[derive(Clone)]
pub struct Predicate {
    pub(crate) func: Arc<PredicateFn>,
    pub(crate) domain: Ty,
}

impl Predicate {
    #[inline]
    pub fn test(&self, value: &Value) -> bool {
        (self.func)(value)
    }

    /// The value type this predicate is declared for (`Any` if undeclared).
    pub fn domain(&self) -> &Ty {
        &self.domain
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

/// Transform node: matches `inner` against `func(value)`.
///
/// The projected value is a temporary, so the inner pattern holds no
/// referencing captures (checked when the node is built).
#[derive(Clone)]
pub struct Transform {
    pub(crate) func: Arc<TransformFn>,
    pub(crate) domain: Ty,
    pub(crate) codomain: Ty,
    pub(crate) inner: Box<Pattern>,
}

impl Transform {
    pub fn inner(&self) -> &Pattern {
        &self.inner
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("domain", &self.domain)
            .field("codomain", &self.codomain)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Project node: matches `inner` against a part of the value.
///
/// The part is borrowed from the matched value, so referencing captures below
/// a projection stay valid for as long as the matched value does.
#[derive(Clone)]
pub struct Project {
    pub(crate) func: Arc<ProjectFn>,
    pub(crate) shape: ShapeFn,
    pub(crate) label: &'static str,
    pub(crate) inner: Box<Pattern>,
}

impl Project {
    pub fn inner(&self) -> &Pattern {
        &self.inner
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(self.label).field(&self.inner).finish()
    }
}

/// Post-check node: `inner`, then the guard.
#[derive(Clone)]
pub struct PostCheck {
    pub(crate) inner: Box<Pattern>,
    pub(crate) guard: Arc<GuardFn>,
}

impl PostCheck {
    pub fn inner(&self) -> &Pattern {
        &self.inner
    }
}

impl fmt::Debug for PostCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostCheck")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Variant node: a variant name and a destructuring of its fields.
///
/// Without a type name, any variant with a matching name is accepted,
/// whichever type declares it.
#[derive(Clone, Debug)]
pub struct VariantPattern {
    pub(crate) type_name: Option<Name>,
    pub(crate) name: Name,
    pub(crate) fields: SeqPattern,
}

impl VariantPattern {
    pub fn type_name(&self) -> Option<&Name> {
        self.type_name.as_ref()
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn fields(&self) -> &SeqPattern {
        &self.fields
    }
}

fn any_shape(_: &Ty) -> Option<Ty> {
    Some(Ty::Any)
}

fn option_payload(ty: &Ty) -> Option<Ty> {
    match ty {
        Ty::Option(inner) => Some((**inner).clone()),
        Ty::Any => Some(Ty::Any),
        _ => None,
    }
}

fn ok_payload(ty: &Ty) -> Option<Ty> {
    match ty {
        Ty::Result(ok, _) => Some((**ok).clone()),
        Ty::Any => Some(Ty::Any),
        _ => None,
    }
}

fn err_payload(ty: &Ty) -> Option<Ty> {
    match ty {
        Ty::Result(_, err) => Some((**err).clone()),
        Ty::Any => Some(Ty::Any),
        _ => None,
    }
}

// Constructors

impl Pattern {
    #[inline]
    pub fn wildcard() -> Self {
        Pattern::Wildcard
    }

    /// Equality pattern.
    pub fn lit(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// Predicate pattern over values of any type.
    pub fn meet(func: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self::meet_on(Ty::Any, func)
    }

    /// Predicate pattern declared for values of type `domain`.
    ///
    /// The domain only feeds the static compatibility query; at match time the
    /// function sees whatever value it is given.
    pub fn meet_on(domain: Ty, func: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Pattern::Predicate(Predicate {
            func: Arc::new(func),
            domain,
        })
    }

    pub fn or(alternatives: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Or(alternatives.into_iter().collect())
    }

    pub fn and(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::And(patterns.into_iter().collect())
    }

    pub fn not(inner: impl Into<Pattern>) -> Self {
        Pattern::Not(Box::new(inner.into()))
    }

    /// Match `inner` against `func(value)`.
    ///
    /// Fails with [`PatternError::ReferenceUnderTransform`] if `inner`
    /// contains a referencing capture: the transformed value does not outlive
    /// the match, so there is nothing to borrow.
    pub fn app(
        func: impl Fn(&Value) -> Value + Send + Sync + 'static,
        inner: impl Into<Pattern>,
    ) -> Result<Self, PatternError> {
        Self::app_typed(Ty::Any, Ty::Any, func, inner)
    }

    /// [`Pattern::app`] with declared input and output types.
    pub fn app_typed(
        domain: Ty,
        codomain: Ty,
        func: impl Fn(&Value) -> Value + Send + Sync + 'static,
        inner: impl Into<Pattern>,
    ) -> Result<Self, PatternError> {
        let inner = inner.into();
        if let Some(capture) = inner.first_reference() {
            tracing::debug!(
                capture = capture.name().as_str(),
                "rejecting referencing capture under transform"
            );
            return Err(PatternError::ReferenceUnderTransform {
                name: capture.name().clone(),
            });
        }
        Ok(Pattern::Transform(Transform {
            func: Arc::new(func),
            domain,
            codomain,
            inner: Box::new(inner),
        }))
    }

    /// Match `inner` against a borrowed part of the value; no part, no match.
    pub fn project(
        func: impl for<'a> Fn(&'a Value) -> Option<&'a Value> + Send + Sync + 'static,
        inner: impl Into<Pattern>,
    ) -> Self {
        Self::project_typed(any_shape, func, inner)
    }

    /// [`Pattern::project`] with a static description of the projection.
    pub fn project_typed(
        shape: ShapeFn,
        func: impl for<'a> Fn(&'a Value) -> Option<&'a Value> + Send + Sync + 'static,
        inner: impl Into<Pattern>,
    ) -> Self {
        Self::projection("project", shape, func, inner.into())
    }

    fn projection(
        label: &'static str,
        shape: ShapeFn,
        func: impl for<'a> Fn(&'a Value) -> Option<&'a Value> + Send + Sync + 'static,
        inner: Pattern,
    ) -> Self {
        Pattern::Project(Project {
            func: Arc::new(func),
            shape,
            label,
            inner: Box::new(inner),
        })
    }

    /// `Some(inner)`.
    pub fn some(inner: impl Into<Pattern>) -> Self {
        Self::projection("Some", option_payload, Value::as_some, inner.into())
    }

    /// `Ok(inner)`.
    pub fn ok(inner: impl Into<Pattern>) -> Self {
        Self::projection("Ok", ok_payload, Value::as_ok, inner.into())
    }

    /// `Err(inner)`.
    pub fn err(inner: impl Into<Pattern>) -> Self {
        Self::projection("Err", err_payload, Value::as_err, inner.into())
    }

    pub fn none() -> Self {
        Pattern::Literal(Value::None)
    }

    /// Sequence pattern from positional elements, at most one of them a rest.
    pub fn ds(elements: impl IntoIterator<Item = Element>) -> Result<Self, PatternError> {
        SeqPattern::from_elements(elements).map(Pattern::Sequence)
    }

    /// Sequence pattern of fixed arity.
    pub fn tuple(items: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Sequence(SeqPattern::fixed(items))
    }

    /// Variant pattern: the variant name, then its fields positionally.
    ///
    /// Only the variant name is compared, so `Shape::Empty` and `Tree::Empty`
    /// both match `variant("Empty", [])`. Use [`Pattern::variant_of`] to pin
    /// the declaring type.
    pub fn variant(
        name: impl Into<Name>,
        fields: impl IntoIterator<Item = Element>,
    ) -> Result<Self, PatternError> {
        Self::variant_pattern(None, name.into(), fields)
    }

    /// Variant pattern qualified by the type that declares the variant.
    pub fn variant_of(
        type_name: impl Into<Name>,
        name: impl Into<Name>,
        fields: impl IntoIterator<Item = Element>,
    ) -> Result<Self, PatternError> {
        Self::variant_pattern(Some(type_name.into()), name.into(), fields)
    }

    fn variant_pattern(
        type_name: Option<Name>,
        name: Name,
        fields: impl IntoIterator<Item = Element>,
    ) -> Result<Self, PatternError> {
        Ok(Pattern::Variant(VariantPattern {
            type_name,
            name,
            fields: SeqPattern::from_elements(fields)?,
        }))
    }

    /// Attach a guard that runs after this pattern has matched.
    ///
    /// A failing guard makes the match fail, but the captures this pattern
    /// committed stay in the table.
    #[must_use]
    pub fn when(self, guard: impl Fn(&Bindings<'_>) -> bool + Send + Sync + 'static) -> Self {
        Pattern::PostCheck(PostCheck {
            inner: Box::new(self),
            guard: Arc::new(guard),
        })
    }
}

// Conversions

impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        Pattern::Literal(value)
    }
}

impl From<Capture> for Pattern {
    fn from(capture: Capture) -> Self {
        Pattern::Capture(capture)
    }
}

impl From<Id> for Pattern {
    fn from(id: Id) -> Self {
        Pattern::Capture(Capture::Owning(id))
    }
}

impl From<&Id> for Pattern {
    fn from(id: &Id) -> Self {
        Pattern::Capture(Capture::Owning(id.clone()))
    }
}

impl From<RefId> for Pattern {
    fn from(id: RefId) -> Self {
        Pattern::Capture(Capture::Referencing(id))
    }
}

impl From<&RefId> for Pattern {
    fn from(id: &RefId) -> Self {
        Pattern::Capture(Capture::Referencing(id.clone()))
    }
}

impl std::ops::Not for Pattern {
    type Output = Pattern;

    fn not(self) -> Pattern {
        Pattern::Not(Box::new(self))
    }
}

// Traversal

impl Pattern {
    /// Visit this node and every node below it, parents first.
    pub fn walk<'p, F: FnMut(&'p Pattern)>(&'p self, visit: &mut F) {
        ensure_sufficient_stack(|| {
            visit(self);
            match self {
                Pattern::Wildcard
                | Pattern::Literal(_)
                | Pattern::Predicate(_)
                | Pattern::Capture(_) => {}
                Pattern::Or(patterns) | Pattern::And(patterns) => {
                    for p in patterns {
                        p.walk(visit);
                    }
                }
                Pattern::Not(inner) => inner.walk(visit),
                Pattern::Transform(t) => t.inner.walk(visit),
                Pattern::Project(p) => p.inner.walk(visit),
                Pattern::PostCheck(pc) => pc.inner.walk(visit),
                Pattern::Sequence(seq) => {
                    for p in seq.patterns() {
                        p.walk(visit);
                    }
                }
                Pattern::Variant(v) => {
                    for p in v.fields.patterns() {
                        p.walk(visit);
                    }
                }
            }
        });
    }

    /// Every capture cell reachable from this pattern, in visiting order.
    pub fn captures(&self) -> Vec<&Capture> {
        let mut found = Vec::new();
        self.walk(&mut |p| {
            if let Pattern::Capture(c) = p {
                found.push(c);
            }
        });
        found
    }

    /// Names of every capture cell reachable from this pattern.
    pub fn capture_names(&self) -> FxHashSet<Name> {
        self.captures().into_iter().map(|c| c.name().clone()).collect()
    }

    fn first_reference(&self) -> Option<&Capture> {
        self.captures().into_iter().find(|c| c.is_referencing())
    }
}

#[cfg(test)]
mod tests;
