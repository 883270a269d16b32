//! Dynamic composite with interior mutability.
//!
//! `Record` exists for graphs that plain structs cannot express, mainly
//! self-referential ones:
//!
//! ```
//! use propmatch_core::shape::{Record, Reflect};
//!
//! let node = Record::new("Node");
//! node.set("name", "root");
//! node.set("next", node.clone());
//! ```
//!
//! A record that (directly or transitively) holds itself is an `Rc` cycle and
//! is not freed until one of its members is overwritten or `clear`ed.

use super::{Members, Reflect, Value};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub struct Record {
    type_name: String,
    members: RefCell<Vec<(String, Value)>>,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Rc<Record> {
        Rc::new(Record {
            type_name: type_name.into(),
            members: RefCell::new(Vec::new()),
        })
    }

    /// Set a member, replacing any existing value and keeping its position.
    pub fn set(&self, name: impl Into<String>, value: impl Reflect) {
        let name = name.into();
        let value = value.reflect();
        let mut members = self.members.borrow_mut();
        match members.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => members.push((name, value)),
        }
    }

    /// Builder form of [`Record::set`].
    pub fn with(self: Rc<Self>, name: impl Into<String>, value: impl Reflect) -> Rc<Self> {
        self.set(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    /// Drop all members, breaking any cycle through this record.
    pub fn clear(&self) {
        self.members.borrow_mut().clear();
    }
}

impl Members for Record {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn member_names(&self) -> Vec<String> {
        self.members
            .borrow()
            .iter()
            .map(|(n, _)| n.clone())
            .collect()
    }

    fn member(&self, name: &str) -> Option<Value> {
        self.members
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("type_name", &self.type_name)
            .field("members", &self.member_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let r = Record::new("R").with("a", 1).with("b", 2);
        r.set("a", 10);
        assert_eq!(r.member_names(), vec!["a", "b"]);
        assert!(matches!(
            r.member("a"),
            Some(Value::Scalar(crate::shape::Scalar::Int(10)))
        ));
    }

    #[test]
    fn test_self_reference_shares_identity() {
        let r = Record::new("Node");
        r.set("me", r.clone());
        let Some(Value::Composite(me)) = r.member("me") else {
            panic!("member should be a composite");
        };
        let Value::Composite(outer) = r.reflect() else {
            panic!("record should reflect as composite");
        };
        assert_eq!(me.identity(), outer.identity());
        r.clear();
        assert!(r.is_empty());
    }
}
