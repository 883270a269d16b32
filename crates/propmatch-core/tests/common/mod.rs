//! Shared fixtures for integration tests.
#![allow(dead_code)]

use propmatch_core::reflect_members;
use propmatch_core::Record;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleObject {
    pub string_value: String,
    pub int32_value: i32,
}

reflect_members!(SimpleObject {
    string_value,
    int32_value
});

#[derive(Debug, Clone, PartialEq)]
pub struct ComplexObject {
    pub simple: SimpleObject,
    pub string_value: String,
    pub int32_value: i32,
}

reflect_members!(ComplexObject {
    simple,
    string_value,
    int32_value
});

pub fn simple(string_value: &str, int32_value: i32) -> SimpleObject {
    SimpleObject {
        string_value: string_value.to_string(),
        int32_value,
    }
}

pub fn complex(inner: SimpleObject, string_value: &str, int32_value: i32) -> ComplexObject {
    ComplexObject {
        simple: inner,
        string_value: string_value.to_string(),
        int32_value,
    }
}

/// A node whose `next` member points back at itself.
pub fn self_loop(name: &str) -> Rc<Record> {
    let node = Record::new("Node").with("name", name);
    node.set("next", node.clone());
    node
}

/// A two-node ring: `a.next = b`, `b.next = a`.
pub fn ring(first: &str, second: &str) -> (Rc<Record>, Rc<Record>) {
    let a = Record::new("Node").with("name", first);
    let b = Record::new("Node").with("name", second).with("next", a.clone());
    a.set("next", b.clone());
    (a, b)
}
