//! Static type descriptors for values.
//!
//! `Ty` is what a caller knows about a value before it exists: the element
//! type of a list, the arity of a tuple, the payload of an option. The
//! matching engine uses it to check that a pattern has a matching rule for a
//! type without running a match.

use std::fmt;

use crate::Name;

/// Type of a value, as far as it is statically known.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ty {
    /// Unknown or dynamic. Overlaps every type.
    Any,
    Void,
    Int,
    Float,
    Bool,
    Char,
    Byte,
    Str,
    List(Box<Ty>),
    Tuple(Vec<Ty>),
    Option(Box<Ty>),
    Result(Box<Ty>, Box<Ty>),
    /// User-defined sum type, identified by its type name.
    Variant(Name),
}

impl Ty {
    #[inline]
    pub fn list(elem: Ty) -> Self {
        Ty::List(Box::new(elem))
    }

    #[inline]
    pub fn tuple(elems: impl IntoIterator<Item = Ty>) -> Self {
        Ty::Tuple(elems.into_iter().collect())
    }

    #[inline]
    pub fn option(inner: Ty) -> Self {
        Ty::Option(Box::new(inner))
    }

    #[inline]
    pub fn result(ok: Ty, err: Ty) -> Self {
        Ty::Result(Box::new(ok), Box::new(err))
    }

    #[inline]
    pub fn variant(type_name: impl Into<Name>) -> Self {
        Ty::Variant(type_name.into())
    }

    /// Whether some value could be of both types.
    ///
    /// Lists and options always overlap: the empty list and `None` inhabit
    /// every list and option type.
    pub fn overlaps(&self, other: &Ty) -> bool {
        match (self, other) {
            (Ty::Any, _) | (_, Ty::Any) => true,
            (Ty::List(_), Ty::List(_)) | (Ty::Option(_), Ty::Option(_)) => true,
            (Ty::Tuple(a), Ty::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.overlaps(y))
            }
            (Ty::Result(ok_a, err_a), Ty::Result(ok_b, err_b)) => {
                ok_a.overlaps(ok_b) || err_a.overlaps(err_b)
            }
            (a, b) => a == b,
        }
    }

    /// The narrowest description covering both types.
    ///
    /// Falls back to `Any` when the two disagree on shape.
    pub fn join(&self, other: &Ty) -> Ty {
        if self == other {
            return self.clone();
        }
        match (self, other) {
            (Ty::List(a), Ty::List(b)) => Ty::list(a.join(b)),
            (Ty::Option(a), Ty::Option(b)) => Ty::option(a.join(b)),
            (Ty::Result(ok_a, err_a), Ty::Result(ok_b, err_b)) => {
                Ty::result(ok_a.join(ok_b), err_a.join(err_b))
            }
            (Ty::Tuple(a), Ty::Tuple(b)) if a.len() == b.len() => {
                Ty::Tuple(a.iter().zip(b).map(|(x, y)| x.join(y)).collect())
            }
            _ => Ty::Any,
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Any => write!(f, "_"),
            Ty::Void => write!(f, "void"),
            Ty::Int => write!(f, "int"),
            Ty::Float => write!(f, "float"),
            Ty::Bool => write!(f, "bool"),
            Ty::Char => write!(f, "char"),
            Ty::Byte => write!(f, "byte"),
            Ty::Str => write!(f, "str"),
            Ty::List(elem) => write!(f, "[{elem}]"),
            Ty::Tuple(elems) => {
                write!(f, "(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, ")")
            }
            Ty::Option(inner) => write!(f, "Option<{inner}>"),
            Ty::Result(ok, err) => write!(f, "Result<{ok}, {err}>"),
            Ty::Variant(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests;
