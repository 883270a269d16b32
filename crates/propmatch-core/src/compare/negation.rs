//! "Not structurally equal" on top of [`PropertiesMatcher`].
//!
//! Default mode succeeds when the values are not entirely equal: one differing
//! member is enough. Strict mode additionally requires every compared
//! top-level member to differ, and fails outright when a member of the
//! expected shape cannot be read on the actual value.
//!
//! An equality walk cut short by the depth cap proves nothing, so the
//! negation fails with the `DepthExceeded` mismatches instead of succeeding.

use crate::compare::graph::PropertiesMatcher;
use crate::compare::report::{MatchReport, Mismatch, MismatchKind};
use crate::compare::walk::{member_path, Walk};
use crate::errors::Result;
use crate::options::MatchOptions;
use crate::selector::{ExclusionSet, MemberName};
use crate::shape::{Reflect, Value};
use crate::{log_op_end, log_op_start};
use propmatch_core_types::RunId;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct PropertiesNotMatcher {
    equality: PropertiesMatcher,
    strict: bool,
}

impl PropertiesNotMatcher {
    pub fn new(expected: &(impl Reflect + ?Sized)) -> Self {
        Self {
            equality: PropertiesMatcher::new(expected),
            strict: false,
        }
    }

    /// # Errors
    ///
    /// See [`PropertiesMatcher::ignore`].
    pub fn ignore(mut self, selector: impl Into<MemberName>) -> Result<Self> {
        self.equality = self.equality.ignore(selector)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// - `InvalidConfig` - the options fail validation
    pub fn with_options(mut self, options: MatchOptions) -> Result<Self> {
        self.equality = self.equality.with_options(options)?;
        Ok(self)
    }

    /// Require every compared member to differ.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn expected(&self) -> &Value {
        self.equality.expected()
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        self.equality.exclusions()
    }

    pub fn matches(&self, actual: &(impl Reflect + ?Sized)) -> MatchReport {
        let run_id = RunId::new();
        let start = Instant::now();
        log_op_start!(
            "properties_not_equal",
            run_id = run_id.as_str(),
            strict = self.strict
        );

        let report = self.run(&actual.reflect(), run_id.as_str());

        log_op_end!(
            "properties_not_equal",
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str(),
            matched = report.is_match(),
            mismatches = report.mismatches().len() as u64,
        );
        report
    }

    fn run(&self, actual: &Value, run_id: &str) -> MatchReport {
        let expected = self.equality.expected();
        let equality = self.equality.run(actual, run_id);
        if equality.is_match() {
            return MatchReport::failure(Mismatch::new(
                "",
                MismatchKind::UnexpectedlyEqual,
                format!("not equal to {}", expected.describe()),
                actual.describe(),
            ));
        }
        if equality.is_undetermined() {
            return undetermined(equality, "");
        }
        if !self.strict {
            return MatchReport::success();
        }
        self.run_strict(expected, actual, run_id)
    }

    /// Second pass over the top-level members: any member that still
    /// compares equal fails the negation.
    fn run_strict(&self, expected: &Value, actual: &Value, run_id: &str) -> MatchReport {
        let Value::Composite(expected) = expected else {
            // Nothing to walk on a scalar, and the default check already passed.
            return MatchReport::success();
        };
        let Value::Composite(actual_composite) = actual else {
            return MatchReport::failure(Mismatch::new(
                "",
                MismatchKind::InaccessibleMember,
                format!("members of {}", expected.type_name()),
                format!("{} {}", actual.kind_name(), actual.describe()),
            ));
        };

        let options = self.equality.options();
        let no_exclusions = ExclusionSet::new();
        let mut equal_members = Vec::new();
        for name in expected.member_names() {
            if self.equality.exclusions().contains(&name) {
                continue;
            }
            let Some(actual_value) = actual_composite.member(&name) else {
                return MatchReport::failure(Mismatch::new(
                    name.as_str(),
                    MismatchKind::InaccessibleMember,
                    format!("member `{}`", name),
                    "<missing>",
                ));
            };
            let expected_value = expected.member(&name).unwrap_or(Value::Null);
            let mut walk = Walk::new(options, run_id);
            let equal = walk.compare_root(&expected_value, &actual_value, &no_exclusions);
            let report = walk.into_report();
            if report.is_undetermined() {
                return undetermined(report, name.as_str());
            }
            if equal {
                equal_members.push(Mismatch::new(
                    name.as_str(),
                    MismatchKind::UnexpectedlyEqual,
                    format!("anything but {}", expected_value.describe()),
                    actual_value.describe(),
                ));
                if options.stop_at_first {
                    break;
                }
            }
        }
        MatchReport::from_parts(equal_members, 0)
    }
}

/// Keep only the depth-cap mismatches, re-rooted under `prefix`.
fn undetermined(report: MatchReport, prefix: &str) -> MatchReport {
    let cut = report
        .mismatches()
        .iter()
        .filter(|m| m.kind == MismatchKind::DepthExceeded)
        .map(|m| {
            let path = if m.path.is_empty() {
                prefix.to_string()
            } else {
                member_path(prefix, &m.path)
            };
            Mismatch { path, ..m.clone() }
        })
        .collect();
    MatchReport::from_parts(cut, report.assumed_equal_cycles())
}
