//! Match outcome types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq` so a
//! report can be stored or rendered by the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why one node of the comparison failed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// Two scalars differ by value
    ValueDiffers,
    /// Expected and actual have different shapes (e.g. composite vs scalar)
    KindMismatch,
    /// A member of the expected shape is absent on the actual value
    MissingMember,
    /// One side is a sequence and the other is null
    NullSequence,
    /// Sequences differ in element count
    LengthDiffers,
    /// Sequences differ at an index
    ElementDiffers,
    /// The comparison reached a construct it does not support (JSON arrays)
    Unsupported,
    /// Nesting exceeded `MatchOptions::max_depth`. The subtree below was not
    /// compared, so its equality is undetermined rather than different.
    DepthExceeded,
    /// A negation found the values (or, in strict mode, a member) equal
    UnexpectedlyEqual,
    /// Strict negation could not read a member on the actual value
    InaccessibleMember,
    /// A candidate collection holds an item from the excluded set
    ContainsExcluded,
}

impl MismatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MismatchKind::ValueDiffers => "value_differs",
            MismatchKind::KindMismatch => "kind_mismatch",
            MismatchKind::MissingMember => "missing_member",
            MismatchKind::NullSequence => "null_sequence",
            MismatchKind::LengthDiffers => "length_differs",
            MismatchKind::ElementDiffers => "element_differs",
            MismatchKind::Unsupported => "unsupported",
            MismatchKind::DepthExceeded => "depth_exceeded",
            MismatchKind::UnexpectedlyEqual => "unexpectedly_equal",
            MismatchKind::InaccessibleMember => "inaccessible_member",
            MismatchKind::ContainsExcluded => "contains_excluded",
        }
    }
}

/// One failed comparison node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mismatch {
    /// Member path from the root; empty for the root itself
    pub path: String,
    pub kind: MismatchKind,
    /// Description of what was expected
    pub expected: String,
    /// Description of what was found
    pub actual: String,
}

impl Mismatch {
    pub fn new(
        path: impl Into<String>,
        kind: MismatchKind,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            kind,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        };
        write!(
            f,
            "{} [{}]: expected {}, but was {}",
            path,
            self.kind.as_str(),
            self.expected,
            self.actual
        )
    }
}

/// Outcome of one `matches` call.
///
/// Success means no mismatches. `assumed_equal_cycles` counts the reference
/// pairs that were met a second time and treated as equal without descending,
/// so a success that leaned on the cycle guard stays distinguishable.
///
/// A failure holding a `DepthExceeded` mismatch is undetermined: the walk
/// stopped before it could decide. Check `is_undetermined` before reading a
/// non-match as "the values differ".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    mismatches: Vec<Mismatch>,
    assumed_equal_cycles: usize,
}

impl MatchReport {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failure(mismatch: Mismatch) -> Self {
        Self {
            mismatches: vec![mismatch],
            assumed_equal_cycles: 0,
        }
    }

    pub(crate) fn from_parts(mismatches: Vec<Mismatch>, assumed_equal_cycles: usize) -> Self {
        Self {
            mismatches,
            assumed_equal_cycles,
        }
    }

    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// The first offending node, if any.
    pub fn first(&self) -> Option<&Mismatch> {
        self.mismatches.first()
    }

    /// All offending nodes in walk order.
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub fn assumed_equal_cycles(&self) -> usize {
        self.assumed_equal_cycles
    }

    pub fn has_kind(&self, kind: MismatchKind) -> bool {
        self.mismatches.iter().any(|m| m.kind == kind)
    }

    /// True when the depth cap cut the walk short.
    pub fn is_undetermined(&self) -> bool {
        self.has_kind(MismatchKind::DepthExceeded)
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match() {
            return write!(f, "match");
        }
        write!(f, "{} mismatch(es)", self.mismatches.len())?;
        for m in &self.mismatches {
            write!(f, "\n  {}", m)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_no_first() {
        let report = MatchReport::success();
        assert!(report.is_match());
        assert!(report.first().is_none());
        assert_eq!(report.to_string(), "match");
    }

    #[test]
    fn test_display_lists_every_mismatch() {
        let report = MatchReport::from_parts(
            vec![
                Mismatch::new("a", MismatchKind::ValueDiffers, "1", "2"),
                Mismatch::new("", MismatchKind::KindMismatch, "<R>", "3"),
            ],
            0,
        );
        let rendered = report.to_string();
        assert!(rendered.starts_with("2 mismatch(es)"));
        assert!(rendered.contains("a [value_differs]: expected 1, but was 2"));
        assert!(rendered.contains("<root> [kind_mismatch]"));
    }

    #[test]
    fn test_depth_exceeded_is_undetermined() {
        let report = MatchReport::failure(Mismatch::new(
            "next",
            MismatchKind::DepthExceeded,
            "depth <= 1",
            "depth 2",
        ));
        assert!(!report.is_match());
        assert!(report.is_undetermined());
        assert!(!MatchReport::success().is_undetermined());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&MismatchKind::DepthExceeded).unwrap();
        assert_eq!(json, "\"depth_exceeded\"");
    }
}
