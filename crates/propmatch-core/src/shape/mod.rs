//! Value model the comparison engine walks.
//!
//! The engine never inspects host types directly. It sees a [`Value`]: a
//! scalar, a sequence, `Null`, or a [`Composite`] exposing named members
//! through the [`Members`] capability. Host types get there through
//! [`Reflect`], implemented for primitives and std containers here, for plain
//! structs by [`reflect_members!`](crate::reflect_members), for fieldless
//! enums by [`reflect_variants!`](crate::reflect_variants), and for
//! self-referential graphs by [`Record`].

pub mod record;
pub mod reflect;

pub use record::Record;
pub use reflect::Reflect;

use chrono::{DateTime, Utc};
use std::fmt;
use std::rc::Rc;

/// A primitive value. Compared directly, never walked.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl Scalar {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) | Scalar::UInt(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::Char(_) => "char",
            Scalar::Text(_) => "text",
            Scalar::Timestamp(_) => "timestamp",
        }
    }

    /// Value equality used by the comparator.
    ///
    /// Signed and unsigned integers compare by mathematical value. Floats
    /// only equal floats.
    pub fn value_eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::UInt(a), Scalar::UInt(b)) => a == b,
            (Scalar::Int(a), Scalar::UInt(b)) | (Scalar::UInt(b), Scalar::Int(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::Char(a), Scalar::Char(b)) => a == b,
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Timestamp(a), Scalar::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::UInt(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Char(v) => write!(f, "'{}'", v),
            Scalar::Text(v) => write!(f, "\"{}\"", v),
            Scalar::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

/// An ordered, shared element list.
///
/// Cloning a `Sequence` shares the elements, so two clones are
/// reference-equal.
#[derive(Debug, Clone)]
pub struct Sequence(Rc<[Value]>);

impl Sequence {
    pub fn new(items: Vec<Value>) -> Self {
        Self(items.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// True if both handles share the same element storage.
    pub fn ptr_eq(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The member-walking capability.
///
/// `member` is the member-access contract: `None` means the member does not
/// exist on this shape.
pub trait Members {
    fn type_name(&self) -> &str;

    /// Member names in declaration order.
    fn member_names(&self) -> Vec<String>;

    fn member(&self, name: &str) -> Option<Value>;
}

/// A shared handle to something with named members.
///
/// Identity is the address of the shared allocation; clones of one handle
/// have the same identity.
#[derive(Clone)]
pub struct Composite(Rc<dyn Members>);

impl Composite {
    pub fn new<T: Members + 'static>(inner: Rc<T>) -> Self {
        Self(inner)
    }

    pub fn from_dyn(inner: Rc<dyn Members>) -> Self {
        Self(inner)
    }

    /// Reference identity, used by the cycle guard.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    pub fn member_names(&self) -> Vec<String> {
        self.0.member_names()
    }

    pub fn member(&self, name: &str) -> Option<Value> {
        self.0.member(name)
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.0.member_names().iter().any(|m| m == name)
    }
}

// Composites may be cyclic, so Debug never descends into members.
impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ .. }}@{:#x}", self.type_name(), self.identity())
    }
}

/// Untyped value handed to the comparison engine.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Scalar(Scalar),
    Sequence(Sequence),
    Composite(Composite),
}

impl Value {
    pub fn composite<T: Members + 'static>(inner: Rc<T>) -> Self {
        Value::Composite(Composite::new(inner))
    }

    pub fn sequence(items: Vec<Value>) -> Self {
        Value::Sequence(Sequence::new(items))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Value::Scalar(Scalar::Text(value.into()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Scalar(s) => s.kind_name(),
            Value::Sequence(_) => "sequence",
            Value::Composite(_) => "composite",
        }
    }

    /// Short, non-recursive rendering for mismatch reports.
    pub fn describe(&self) -> String {
        match self {
            Value::Null => "<null>".to_string(),
            Value::Scalar(s) => s.to_string(),
            Value::Sequence(seq) => format!("Collection with {} elements.", seq.len()),
            Value::Composite(c) => format!("<{}>", c.type_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_equality_crosses_signedness() {
        assert!(Scalar::Int(42).value_eq(&Scalar::UInt(42)));
        assert!(Scalar::UInt(42).value_eq(&Scalar::Int(42)));
        assert!(!Scalar::Int(-1).value_eq(&Scalar::UInt(u64::MAX)));
    }

    #[test]
    fn test_float_never_equals_integer() {
        assert!(!Scalar::Float(1.0).value_eq(&Scalar::Int(1)));
        assert!(Scalar::Float(1.5).value_eq(&Scalar::Float(1.5)));
    }

    #[test]
    fn test_sequence_clone_is_reference_equal() {
        let a = Sequence::new(vec![Value::text("x")]);
        let b = a.clone();
        let c = Sequence::new(vec![Value::text("x")]);
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
    }

    #[test]
    fn test_describe() {
        assert_eq!(Value::Null.describe(), "<null>");
        assert_eq!(Value::text("a").describe(), "\"a\"");
        assert_eq!(
            Value::sequence(vec![Value::Null, Value::Null]).describe(),
            "Collection with 2 elements."
        );
    }
}
