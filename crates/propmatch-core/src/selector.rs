//! Member selectors for exclusion sets.
//!
//! A selector names one direct member of the expected value's shape. There
//! is no nested path syntax: excluding a composite member drops its whole
//! subtree.
//!
//! The [`member!`](crate::member) macro checks at compile time that the
//! field exists on the named type, so a typo or a method name fails to
//! build:
//!
//! ```
//! use propmatch_core::member;
//!
//! struct Account {
//!     owner: String,
//! }
//!
//! let selector = member!(Account, owner);
//! assert_eq!(selector.as_str(), "owner");
//! ```
//!
//! ```compile_fail
//! use propmatch_core::member;
//!
//! struct Account {
//!     owner: String,
//! }
//!
//! let selector = member!(Account, balance);
//! ```

use crate::errors::{MatchError, Result};
use crate::shape::Value;
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// A member name used to build an exclusion set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberName(String);

impl MemberName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for MemberName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MemberName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Build a [`MemberName`] for a direct field of a type, checked at compile time.
#[macro_export]
macro_rules! member {
    ($ty:ty, $field:ident) => {{
        let _check = |value: &$ty| {
            let _ = &value.$field;
        };
        $crate::selector::MemberName::new(stringify!($field))
    }};
}

/// Resolve a selector against the expected value's shape.
///
/// # Errors
///
/// - `SelectorOnNonComposite` - the expected value has no members
/// - `InvalidSelector` - the name is not a direct member of the expected shape
pub fn resolve(expected: &Value, selector: impl Into<MemberName>) -> Result<MemberName> {
    let selector = selector.into();
    match expected {
        Value::Composite(c) if c.has_member(selector.as_str()) => Ok(selector),
        Value::Composite(c) => Err(MatchError::InvalidSelector {
            type_name: c.type_name().to_string(),
            member: selector.0,
        }),
        other => Err(MatchError::SelectorOnNonComposite {
            member: selector.0,
            found: other.kind_name().to_string(),
        }),
    }
}

/// Immutable set of excluded top-level member names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<MemberName>);

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: MemberName) -> bool {
        self.0.insert(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemberName> {
        self.0.iter()
    }
}
