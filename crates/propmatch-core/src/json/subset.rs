//! JSON subset comparison.
//!
//! Every member of the expected object must be present on the actual object
//! with the same kind and value. Nested objects recurse. Members present only
//! on the actual side are ignored. Arrays are not compared: a pair of arrays
//! is reported as `Unsupported` and scanning carries on with the next member.

use crate::compare::report::{MatchReport, Mismatch, MismatchKind};
use crate::compare::walk::member_path;
use crate::errors::{MatchError, Result};
use crate::json::kind::{deep_equals, JsonKind};
use crate::options::MatchOptions;
use crate::{log_op_end, log_op_error, log_op_start};
use crate::schema::EVENT_DEPTH_EXCEEDED;
use propmatch_core_types::RunId;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct JsonSubsetMatcher {
    expected: Map<String, Value>,
    options: MatchOptions,
}

impl JsonSubsetMatcher {
    /// # Errors
    ///
    /// - `InvalidExpected` - the expected node is not a JSON object
    pub fn new(expected: Value) -> Result<Self> {
        match expected {
            Value::Object(expected) => Ok(Self {
                expected,
                options: MatchOptions::default(),
            }),
            other => Err(MatchError::InvalidExpected {
                reason: format!(
                    "JSON subset matcher needs an object, got {}",
                    JsonKind::of(&other)
                ),
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

    pub fn expected(&self) -> &Map<String, Value> {
        &self.expected
    }

    pub fn matches(&self, actual: &Value) -> MatchReport {
        let run_id = RunId::new();
        let start = Instant::now();
        log_op_start!("json_properties", run_id = run_id.as_str());
        self.finish(actual, &run_id, start)
    }

    /// Convert a host value to a JSON node, then match it.
    ///
    /// # Errors
    ///
    /// - `Serialization` - the value cannot be represented as JSON
    pub fn matches_serialize<T: Serialize + ?Sized>(&self, actual: &T) -> Result<MatchReport> {
        let run_id = RunId::new();
        let start = Instant::now();
        log_op_start!("json_properties", run_id = run_id.as_str(), serialize = true);

        let actual = match serde_json::to_value(actual) {
            Ok(actual) => actual,
            Err(err) => {
                let err = MatchError::from(err);
                log_op_error!(
                    "json_properties",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    run_id = run_id.as_str(),
                );
                return Err(err);
            }
        };
        Ok(self.finish(&actual, &run_id, start))
    }

    /// Run the comparison and log the end of an already started operation.
    fn finish(&self, actual: &Value, run_id: &RunId, start: Instant) -> MatchReport {
        let report = self.run(actual, run_id.as_str());

        log_op_end!(
            "json_properties",
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str(),
            matched = report.is_match(),
            mismatches = report.mismatches().len() as u64,
        );
        report
    }

    fn run(&self, actual: &Value, run_id: &str) -> MatchReport {
        let mut mismatches = Vec::new();
        match actual {
            Value::Object(actual) => {
                let mut subset = Subset {
                    options: &self.options,
                    run_id,
                    mismatches: &mut mismatches,
                };
                subset.compare_objects(&self.expected, actual, "", 0);
            }
            other => mismatches.push(Mismatch::new(
                "",
                MismatchKind::KindMismatch,
                JsonKind::Object.as_str(),
                JsonKind::of(other).as_str(),
            )),
        }
        MatchReport::from_parts(mismatches, 0)
    }
}

struct Subset<'a> {
    options: &'a MatchOptions,
    run_id: &'a str,
    mismatches: &'a mut Vec<Mismatch>,
}

impl Subset<'_> {
    fn halted(&self) -> bool {
        self.options.stop_at_first && !self.mismatches.is_empty()
    }

    fn compare_objects(
        &mut self,
        expected: &Map<String, Value>,
        actual: &Map<String, Value>,
        path: &str,
        depth: usize,
    ) {
        if depth > self.options.max_depth {
            tracing::debug!(
                component = module_path!(),
                event = EVENT_DEPTH_EXCEEDED,
                run_id = self.run_id,
                path = path,
                depth = depth as u64,
            );
            self.mismatches.push(Mismatch::new(
                path,
                MismatchKind::DepthExceeded,
                format!("nesting of at most {}", self.options.max_depth),
                format!("nesting of {}", depth),
            ));
            return;
        }
        for (name, expected) in expected {
            if self.halted() {
                return;
            }
            let child = member_path(path, name);
            let Some(actual) = actual.get(name) else {
                self.mismatches.push(Mismatch::new(
                    child,
                    MismatchKind::MissingMember,
                    format!("property '{}'", name),
                    "<missing>",
                ));
                continue;
            };
            self.compare_member(expected, actual, &child, depth);
        }
    }

    fn compare_member(&mut self, expected: &Value, actual: &Value, path: &str, depth: usize) {
        let (expected_kind, actual_kind) = (JsonKind::of(expected), JsonKind::of(actual));
        if expected_kind != actual_kind {
            self.mismatches.push(Mismatch::new(
                path,
                MismatchKind::KindMismatch,
                expected_kind.as_str(),
                actual_kind.as_str(),
            ));
            return;
        }
        match (expected, actual) {
            (Value::Object(e), Value::Object(a)) => self.compare_objects(e, a, path, depth + 1),
            (Value::Array(_), Value::Array(_)) => self.mismatches.push(Mismatch::new(
                path,
                MismatchKind::Unsupported,
                "comparable member",
                "array comparison is not supported",
            )),
            (e, a) if !deep_equals(e, a) => self.mismatches.push(Mismatch::new(
                path,
                MismatchKind::ValueDiffers,
                e.to_string(),
                a.to_string(),
            )),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_actual_members_ignored() {
        let matcher = JsonSubsetMatcher::new(json!({"a": 1})).unwrap();
        assert!(matcher.matches(&json!({"a": 1, "b": 2})).is_match());
    }

    #[test]
    fn test_missing_member_reported() {
        let matcher = JsonSubsetMatcher::new(json!({"a": 1, "b": 2})).unwrap();
        let report = matcher.matches(&json!({"a": 1}));
        assert_eq!(report.mismatches().len(), 1);
        assert_eq!(report.first().unwrap().kind, MismatchKind::MissingMember);
        assert_eq!(report.first().unwrap().path, "b");
    }

    #[test]
    fn test_integer_and_float_are_different_kinds() {
        let matcher = JsonSubsetMatcher::new(json!({"a": 1})).unwrap();
        let report = matcher.matches(&json!({"a": 1.0}));
        let m = report.first().unwrap();
        assert_eq!(m.kind, MismatchKind::KindMismatch);
        assert_eq!(m.expected, "integer");
        assert_eq!(m.actual, "float");
    }

    #[test]
    fn test_arrays_unsupported_but_scan_continues() {
        let matcher = JsonSubsetMatcher::new(json!({"a": [1], "b": 2})).unwrap();
        let report = matcher.matches(&json!({"a": [1], "b": 3}));
        let kinds: Vec<_> = report.mismatches().iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MismatchKind::Unsupported, MismatchKind::ValueDiffers]
        );
    }

    #[test]
    fn test_non_object_expected_rejected() {
        let err = JsonSubsetMatcher::new(json!([1, 2])).unwrap_err();
        assert!(matches!(err, MatchError::InvalidExpected { .. }));
    }

    #[test]
    fn test_depth_cap() {
        let matcher = JsonSubsetMatcher::new(json!({"a": {"b": {"c": 1}}}))
            .unwrap()
            .with_options(MatchOptions::default().with_max_depth(1))
            .unwrap();
        let report = matcher.matches(&json!({"a": {"b": {"c": 1}}}));
        assert_eq!(report.first().unwrap().kind, MismatchKind::DepthExceeded);
        assert_eq!(report.first().unwrap().path, "a.b");
    }
}
