//! Runtime values the matching engine destructures.
//!
//! # Heap Enforcement
//!
//! Composite payloads live behind [`Heap`], whose constructor is private to
//! this crate. Build composite values through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let pair = Value::tuple(vec![Value::int(1), Value::Bool(true)]);
//! let opt = Value::some(Value::int(42));
//! ```
//!
//! Values are immutable and `Send + Sync`; cloning one only bumps reference
//! counts.

use std::fmt;

use crate::{Heap, Name, Ty};

/// A dynamically typed value.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline)
    Void,
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Byte(u8),

    // Heap types
    Str(Heap<String>),
    /// Homogeneous, variable-length sequence.
    List(Heap<Vec<Value>>),
    /// Fixed-arity sequence.
    Tuple(Heap<Vec<Value>>),

    // Algebraic types
    Some(Heap<Value>),
    None,
    Ok(Heap<Value>),
    Err(Heap<Value>),
    /// User-defined sum type variant.
    ///
    /// Stores the type name (e.g. "Shape"), the variant name (e.g. "Circle")
    /// and the positional fields (empty for unit variants).
    Variant {
        type_name: Name,
        variant_name: Name,
        fields: Heap<Vec<Value>>,
    },
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    ///
    /// ```text
    /// let nums = Value::list(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    #[inline]
    pub fn some(v: Value) -> Self {
        Value::Some(Heap::new(v))
    }

    #[inline]
    pub fn ok(v: Value) -> Self {
        Value::Ok(Heap::new(v))
    }

    #[inline]
    pub fn err(v: Value) -> Self {
        Value::Err(Heap::new(v))
    }

    /// Create a user-defined variant value.
    ///
    /// ```text
    /// // Unit variant: Shape::Empty
    /// let empty = Value::variant("Shape", "Empty", vec![]);
    ///
    /// // Variant with fields: Shape::Rect(2, 3)
    /// let rect = Value::variant("Shape", "Rect", vec![Value::int(2), Value::int(3)]);
    /// ```
    #[inline]
    pub fn variant(
        type_name: impl Into<Name>,
        variant_name: impl Into<Name>,
        fields: Vec<Value>,
    ) -> Self {
        Value::Variant {
            type_name: type_name.into(),
            variant_name: variant_name.into(),
            fields: Heap::new(fields),
        }
    }
}

// Accessors

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Elements of a list or tuple.
    ///
    /// Both shapes are positional sequences as far as destructuring goes.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Payload of `Some`.
    pub fn as_some(&self) -> Option<&Value> {
        match self {
            Value::Some(v) => Some(v),
            _ => None,
        }
    }

    /// Payload of `Ok`.
    pub fn as_ok(&self) -> Option<&Value> {
        match self {
            Value::Ok(v) => Some(v),
            _ => None,
        }
    }

    /// Payload of `Err`.
    pub fn as_err(&self) -> Option<&Value> {
        match self {
            Value::Err(v) => Some(v),
            _ => None,
        }
    }

    /// Type name, variant name and fields of a user-defined variant.
    pub fn as_variant(&self) -> Option<(&Name, &Name, &[Value])> {
        match self {
            Value::Variant {
                type_name,
                variant_name,
                fields,
            } => Some((type_name, variant_name, fields.as_slice())),
            _ => None,
        }
    }

    /// The static type this value inhabits.
    ///
    /// List element types are joined across elements; an empty list has
    /// element type `Any`.
    pub fn ty(&self) -> Ty {
        match self {
            Value::Void => Ty::Void,
            Value::Int(_) => Ty::Int,
            Value::Float(_) => Ty::Float,
            Value::Bool(_) => Ty::Bool,
            Value::Char(_) => Ty::Char,
            Value::Byte(_) => Ty::Byte,
            Value::Str(_) => Ty::Str,
            Value::List(items) => Ty::list(
                items
                    .iter()
                    .map(Value::ty)
                    .reduce(|acc, ty| acc.join(&ty))
                    .unwrap_or(Ty::Any),
            ),
            Value::Tuple(items) => Ty::Tuple(items.iter().map(Value::ty).collect()),
            Value::Some(v) => Ty::option(v.ty()),
            Value::None => Ty::option(Ty::Any),
            Value::Ok(v) => Ty::result(v.ty(), Ty::Any),
            Value::Err(e) => Ty::result(Ty::Any, e.ty()),
            Value::Variant { type_name, .. } => Ty::Variant(type_name.clone()),
        }
    }
}

// Conversions

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<u8> for Value {
    fn from(b: u8) -> Self {
        Value::Byte(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Void
    }
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Void, Value::Void) | (Value::None, Value::None) => true,
            (Value::Some(a), Value::Some(b))
            | (Value::Ok(a), Value::Ok(b))
            | (Value::Err(a), Value::Err(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (
                Value::Variant {
                    type_name: t1,
                    variant_name: v1,
                    fields: f1,
                },
                Value::Variant {
                    type_name: t2,
                    variant_name: v2,
                    fields: f2,
                },
            ) => t1 == t2 && v1 == v2 && f1 == f2,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "Void"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Byte(b) => write!(f, "Byte({b:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Tuple(items) => write!(f, "Tuple({:?})", &**items),
            Value::Some(v) => write!(f, "Some({:?})", &**v),
            Value::None => write!(f, "None"),
            Value::Ok(v) => write!(f, "Ok({:?})", &**v),
            Value::Err(v) => write!(f, "Err({:?})", &**v),
            Value::Variant {
                type_name,
                variant_name,
                fields,
            } => write!(f, "Variant({type_name}::{variant_name}, {:?})", &**fields),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "void"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Byte(b) => write!(f, "0x{b:02x}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                write!(f, ")")
            }
            Value::Some(v) => write!(f, "Some({})", &**v),
            Value::None => write!(f, "None"),
            Value::Ok(v) => write!(f, "Ok({})", &**v),
            Value::Err(e) => write!(f, "Err({})", &**e),
            Value::Variant {
                type_name,
                variant_name,
                fields,
            } => {
                write!(f, "{type_name}::{variant_name}")?;
                if !fields.is_empty() {
                    write!(f, "(")?;
                    write_items(f, fields)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}
