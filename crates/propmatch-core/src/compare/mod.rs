//! Structural comparison engine.
//!
//! ## Entry points
//!
//! ```
//! use propmatch_core::compare::{PropertiesMatcher, PropertiesNotMatcher, SequenceMatcher};
//!
//! assert!(PropertiesMatcher::new("a").matches("a").is_match());
//! assert!(PropertiesNotMatcher::new("a").matches("b").is_match());
//! assert!(SequenceMatcher::new(&vec![1, 2]).unwrap().matches(&vec![1, 2]).is_match());
//! ```
//!
//! ## Guarantees
//!
//! - **No errors for differences**: mismatches are data in a [`MatchReport`].
//! - **Cycle safety**: a composite pair is entered at most once per call.
//! - **Shared children compared once**: a pair reached again through a
//!   second path reuses its first outcome, so its mismatches are reported
//!   only under the first path.
//! - **Bounded depth**: nesting beyond `MatchOptions::max_depth` is reported,
//!   not recursed into. Such a report is undetermined, not a difference.
//! - **Reusable matchers**: each `matches` call starts a fresh walk.

pub mod collection;
pub mod graph;
pub mod negation;
pub mod report;
pub mod visited;
pub(crate) mod walk;

pub use collection::SequenceMatcher;
pub use graph::PropertiesMatcher;
pub use negation::PropertiesNotMatcher;
pub use report::{MatchReport, Mismatch, MismatchKind};
pub use visited::{Entry, VisitedSet};
