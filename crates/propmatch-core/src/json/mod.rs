//! Comparators over JSON nodes (`serde_json::Value`).
//!
//! - [`JsonSubsetMatcher`]: every member of the expected object must be
//!   present and equal on the actual object; extra actual members are fine.
//! - [`NoneOfMatcher`]: no candidate item may deep-equal an excluded item.

pub mod kind;
pub mod membership;
pub mod subset;

pub use kind::{deep_equals, JsonKind};
pub use membership::NoneOfMatcher;
pub use subset::JsonSubsetMatcher;
