//! propmatch core - structural equality and diff engine
//!
//! This crate answers "are these two values structurally equal, and if not,
//! where do they differ?" It provides:
//! - Object graph comparison with per-matcher member exclusions
//! - Cycle-safe traversal of self-referential graphs
//! - Ordered sequence comparison
//! - Negated comparison with default and strict policies
//! - JSON subset and "contains none of" checks over `serde_json` nodes
//!
//! Differences are returned as a [`MatchReport`] listing every offending
//! node. Errors are reserved for misconfiguration and input conversion.

pub mod compare;
pub mod errors;
pub mod has;
pub mod json;
pub mod logging_facility;
pub mod options;
pub mod selector;
pub mod shape;

// Re-export commonly used types
pub use compare::{
    MatchReport, Mismatch, MismatchKind, PropertiesMatcher, PropertiesNotMatcher, SequenceMatcher,
};
pub use errors::{ExError, ExErrorKind, MatchError, Result};
pub use json::{JsonKind, JsonSubsetMatcher, NoneOfMatcher};
pub use options::MatchOptions;
pub use selector::{ExclusionSet, MemberName};
pub use shape::{Record, Reflect, Value};

// Event names and field keys used by the logging macros
pub use propmatch_core_types::schema;

#[doc(hidden)]
pub use tracing;
