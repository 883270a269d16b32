//! Structural equality over object graphs.
//!
//! [`PropertiesMatcher`] holds an expected value, an exclusion set and
//! options, and answers whether an actual value is structurally equal:
//!
//! - scalars compare by value;
//! - composites compare member by member, walking the expected shape;
//! - sequences compare element by element, in order;
//! - a composite pair met again within one call is assumed equal (cycle break).
//!
//! Exclusions name top-level members only. Excluding a composite member skips
//! its whole subtree.

use crate::compare::report::MatchReport;
use crate::compare::walk::Walk;
use crate::errors::Result;
use crate::options::MatchOptions;
use crate::selector::{self, ExclusionSet, MemberName};
use crate::shape::{Reflect, Value};
use crate::{log_op_end, log_op_start};
use propmatch_core_types::RunId;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct PropertiesMatcher {
    expected: Value,
    exclusions: ExclusionSet,
    options: MatchOptions,
}

impl PropertiesMatcher {
    pub fn new(expected: &(impl Reflect + ?Sized)) -> Self {
        Self {
            expected: expected.reflect(),
            exclusions: ExclusionSet::new(),
            options: MatchOptions::default(),
        }
    }

    /// Exclude a top-level member of the expected shape from comparison.
    ///
    /// # Errors
    ///
    /// - `InvalidSelector` - the name is not a direct member of the expected shape
    /// - `SelectorOnNonComposite` - the expected value has no members
    pub fn ignore(mut self, selector: impl Into<MemberName>) -> Result<Self> {
        let name = selector::resolve(&self.expected, selector)?;
        self.exclusions.insert(name);
        Ok(self)
    }

    /// # Errors
    ///
    /// - `InvalidConfig` - the options fail validation
    pub fn with_options(mut self, options: MatchOptions) -> Result<Self> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn matches(&self, actual: &(impl Reflect + ?Sized)) -> MatchReport {
        let run_id = RunId::new();
        let start = Instant::now();
        log_op_start!("properties_equal", run_id = run_id.as_str());

        let report = self.run(&actual.reflect(), run_id.as_str());

        log_op_end!(
            "properties_equal",
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str(),
            matched = report.is_match(),
            mismatches = report.mismatches().len() as u64,
        );
        report
    }

    /// One comparison with a fresh visited set.
    pub(crate) fn run(&self, actual: &Value, run_id: &str) -> MatchReport {
        let mut walk = Walk::new(&self.options, run_id);
        walk.compare_root(&self.expected, actual, &self.exclusions);
        walk.into_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::report::MismatchKind;
    use crate::shape::Record;

    #[test]
    fn test_primitive_expected_uses_value_equality() {
        let matcher = PropertiesMatcher::new("one");
        assert!(matcher.matches("one").is_match());
        let report = matcher.matches("two");
        assert_eq!(report.first().unwrap().kind, MismatchKind::ValueDiffers);
        assert_eq!(report.first().unwrap().path, "");
    }

    #[test]
    fn test_reused_matcher_gets_fresh_visited_set() {
        let expected = Record::new("Node").with("v", 1);
        expected.set("next", expected.clone());
        let actual = Record::new("Node").with("v", 1);
        actual.set("next", actual.clone());

        let matcher = PropertiesMatcher::new(&expected);
        let first = matcher.matches(&actual);
        let second = matcher.matches(&actual);
        assert!(first.is_match());
        assert_eq!(first, second);
        assert_eq!(first.assumed_equal_cycles(), 1);

        expected.clear();
        actual.clear();
    }

    #[test]
    fn test_stop_at_first_truncates_report() {
        let expected = Record::new("R").with("a", 1).with("b", 2);
        let actual = Record::new("R").with("a", 0).with("b", 0);

        let full = PropertiesMatcher::new(&expected).matches(&actual);
        assert_eq!(full.mismatches().len(), 2);

        let short = PropertiesMatcher::new(&expected)
            .with_options(MatchOptions::default().with_stop_at_first(true))
            .unwrap()
            .matches(&actual);
        assert_eq!(short.mismatches().len(), 1);
        assert_eq!(short.first().unwrap().path, "a");
    }
}
