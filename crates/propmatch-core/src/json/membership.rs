//! "Contains none of" over JSON nodes.

use crate::compare::report::{MatchReport, Mismatch, MismatchKind};
use crate::json::kind::deep_equals;
use crate::{log_op_end, log_op_start};
use propmatch_core_types::RunId;
use serde_json::Value;
use std::time::Instant;

/// Fails once for every candidate item that deep-equals an excluded item.
#[derive(Debug, Clone, Default)]
pub struct NoneOfMatcher {
    excluded: Vec<Value>,
}

impl NoneOfMatcher {
    pub fn new(excluded: impl IntoIterator<Item = Value>) -> Self {
        Self {
            excluded: excluded.into_iter().collect(),
        }
    }

    pub fn excluded(&self) -> &[Value] {
        &self.excluded
    }

    /// Check a candidate node. Anything other than an array holds no items
    /// and passes.
    pub fn matches(&self, candidate: &Value) -> MatchReport {
        match candidate {
            Value::Array(items) => self.matches_items(items),
            _ => {
                tracing::debug!(
                    component = module_path!(),
                    op = "none_of",
                    "candidate is not an array; nothing to check"
                );
                self.matches_items(&[])
            }
        }
    }

    pub fn matches_items(&self, items: &[Value]) -> MatchReport {
        let run_id = RunId::new();
        let start = Instant::now();
        log_op_start!("none_of", run_id = run_id.as_str());

        let mismatches = items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.excluded.iter().any(|x| deep_equals(x, item)))
            .map(|(index, item)| {
                Mismatch::new(
                    format!("[{}]", index),
                    MismatchKind::ContainsExcluded,
                    "no item from the excluded set",
                    item.to_string(),
                )
            })
            .collect();
        let report = MatchReport::from_parts(mismatches, 0);

        log_op_end!(
            "none_of",
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str(),
            matched = report.is_match(),
            mismatches = report.mismatches().len() as u64,
        );
        report
    }
}
