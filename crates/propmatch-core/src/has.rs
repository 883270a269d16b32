//! Entry points for building matchers.
//!
//! ```
//! use propmatch_core::has;
//! use serde_json::json;
//!
//! assert!(has::properties_equal_to(&vec![1, 2]).matches(&vec![1, 2]).is_match());
//! assert!(has::properties_not_equal_to("a").matches("b").is_match());
//!
//! let subset = has::json_properties(json!({"id": 7})).unwrap();
//! assert!(subset.matches(&json!({"id": 7, "name": "x"})).is_match());
//!
//! let none = has::none_of([json!("banned")]);
//! assert!(none.matches(&json!(["ok", "fine"])).is_match());
//! ```

use crate::compare::{PropertiesMatcher, PropertiesNotMatcher, SequenceMatcher};
use crate::errors::Result;
use crate::json::{JsonSubsetMatcher, NoneOfMatcher};
use crate::shape::Reflect;

/// Structural equality against `expected`.
pub fn properties_equal_to(expected: &(impl Reflect + ?Sized)) -> PropertiesMatcher {
    PropertiesMatcher::new(expected)
}

/// Structural inequality against `expected`. Call `.strict()` to require
/// every member to differ.
pub fn properties_not_equal_to(expected: &(impl Reflect + ?Sized)) -> PropertiesNotMatcher {
    PropertiesNotMatcher::new(expected)
}

/// Ordered element-wise equality against an expected sequence.
///
/// # Errors
///
/// - `InvalidExpected` - `expected` is neither a sequence nor null
pub fn sequence_equal_to(expected: &(impl Reflect + ?Sized)) -> Result<SequenceMatcher> {
    SequenceMatcher::new(expected)
}

/// JSON subset comparison against an expected object.
///
/// # Errors
///
/// - `InvalidExpected` - `expected` is not a JSON object
pub fn json_properties(expected: serde_json::Value) -> Result<JsonSubsetMatcher> {
    JsonSubsetMatcher::new(expected)
}

/// Fails for every candidate item found in `excluded`.
pub fn none_of(excluded: impl IntoIterator<Item = serde_json::Value>) -> NoneOfMatcher {
    NoneOfMatcher::new(excluded)
}
