//! Order-sensitive sequence comparison.

use crate::compare::report::{MatchReport, Mismatch, MismatchKind};
use crate::compare::walk::Walk;
use crate::errors::{MatchError, Result};
use crate::options::MatchOptions;
use crate::selector::ExclusionSet;
use crate::shape::{Reflect, Sequence, Value};
use crate::{log_op_end, log_op_start};
use propmatch_core_types::RunId;
use std::time::Instant;

impl Walk<'_> {
    /// Element-wise comparison. The first differing index fails the whole
    /// sequence; its `ElementDiffers` entry precedes the element's own
    /// mismatches in the report.
    pub(crate) fn compare_sequences(
        &mut self,
        expected: &Sequence,
        actual: &Sequence,
        path: &str,
        depth: usize,
    ) -> bool {
        if expected.ptr_eq(actual) {
            return true;
        }
        if expected.len() != actual.len() {
            self.push(Mismatch::new(
                path,
                MismatchKind::LengthDiffers,
                format!("Collection with {} elements.", expected.len()),
                format!("Collection with {} elements.", actual.len()),
            ));
            return false;
        }
        for (index, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
            let element_path = format!("{}[{}]", path, index);
            let before = self.mismatches.len();
            if !self.compare(e, a, &element_path, depth + 1) {
                self.mismatches.insert(
                    before,
                    Mismatch::new(
                        element_path,
                        MismatchKind::ElementDiffers,
                        format!("Element at [{}] should be: {}", index, e.describe()),
                        a.describe(),
                    ),
                );
                return false;
            }
        }
        true
    }
}

/// Standalone matcher for an expected sequence (or null).
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    expected: Value,
    options: MatchOptions,
}

impl SequenceMatcher {
    /// # Errors
    ///
    /// - `InvalidExpected` - the expected value is neither a sequence nor null
    pub fn new(expected: &(impl Reflect + ?Sized)) -> Result<Self> {
        let expected = expected.reflect();
        match expected {
            Value::Sequence(_) | Value::Null => Ok(Self {
                expected,
                options: MatchOptions::default(),
            }),
            other => Err(MatchError::InvalidExpected {
                reason: format!("sequence matcher needs a sequence, got {}", other.kind_name()),
            }),
        }
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

    pub fn matches(&self, actual: &(impl Reflect + ?Sized)) -> MatchReport {
        let run_id = RunId::new();
        let start = Instant::now();
        log_op_start!("sequence_equal", run_id = run_id.as_str());

        let actual = actual.reflect();
        let mut walk = Walk::new(&self.options, run_id.as_str());
        walk.compare_root(&self.expected, &actual, &ExclusionSet::new());
        let report = walk.into_report();

        log_op_end!(
            "sequence_equal",
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str(),
            matched = report.is_match(),
            mismatches = report.mismatches().len() as u64,
        );
        report
    }
}
