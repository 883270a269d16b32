//! The recursive object-graph walk shared by every structural matcher.

use crate::compare::report::{MatchReport, Mismatch, MismatchKind};
use crate::compare::visited::{Entry, VisitedSet};
use crate::options::MatchOptions;
use crate::selector::ExclusionSet;
use crate::shape::{Composite, Value};
use crate::schema::{EVENT_CYCLE_BREAK, EVENT_DEPTH_EXCEEDED};

/// State for one top-level comparison. Never reused across calls.
pub(crate) struct Walk<'a> {
    options: &'a MatchOptions,
    run_id: &'a str,
    visited: VisitedSet,
    pub(super) mismatches: Vec<Mismatch>,
    assumed_equal_cycles: usize,
}

pub(crate) fn member_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

impl<'a> Walk<'a> {
    pub(crate) fn new(options: &'a MatchOptions, run_id: &'a str) -> Self {
        Self {
            options,
            run_id,
            visited: VisitedSet::new(),
            mismatches: Vec::new(),
            assumed_equal_cycles: 0,
        }
    }

    pub(crate) fn into_report(self) -> MatchReport {
        MatchReport::from_parts(self.mismatches, self.assumed_equal_cycles)
    }

    pub(super) fn halted(&self) -> bool {
        self.options.stop_at_first && !self.mismatches.is_empty()
    }

    pub(super) fn push(&mut self, mismatch: Mismatch) {
        self.mismatches.push(mismatch);
    }

    /// Compare at the root, where the exclusion set applies.
    pub(crate) fn compare_root(
        &mut self,
        expected: &Value,
        actual: &Value,
        exclusions: &ExclusionSet,
    ) -> bool {
        match (expected, actual) {
            (Value::Composite(e), Value::Composite(a)) => {
                self.compare_composites(e, a, "", 0, Some(exclusions))
            }
            _ => self.compare(expected, actual, "", 0),
        }
    }

    pub(crate) fn compare(
        &mut self,
        expected: &Value,
        actual: &Value,
        path: &str,
        depth: usize,
    ) -> bool {
        match (expected, actual) {
            (Value::Null, Value::Null) => true,
            (Value::Scalar(e), Value::Scalar(a)) => {
                if e.value_eq(a) {
                    return true;
                }
                self.push(Mismatch::new(
                    path,
                    MismatchKind::ValueDiffers,
                    e.to_string(),
                    a.to_string(),
                ));
                false
            }
            (Value::Sequence(e), Value::Sequence(a)) => {
                if !self.within_depth(path, depth) {
                    return false;
                }
                self.compare_sequences(e, a, path, depth)
            }
            (Value::Sequence(_), Value::Null) | (Value::Null, Value::Sequence(_)) => {
                self.push(Mismatch::new(
                    path,
                    MismatchKind::NullSequence,
                    expected.describe(),
                    actual.describe(),
                ));
                false
            }
            (Value::Composite(e), Value::Composite(a)) => {
                self.compare_composites(e, a, path, depth, None)
            }
            _ => {
                self.push(Mismatch::new(
                    path,
                    MismatchKind::KindMismatch,
                    format!("{} {}", expected.kind_name(), expected.describe()),
                    format!("{} {}", actual.kind_name(), actual.describe()),
                ));
                false
            }
        }
    }

    fn within_depth(&mut self, path: &str, depth: usize) -> bool {
        if depth <= self.options.max_depth {
            return true;
        }
        tracing::debug!(
            component = module_path!(),
            event = EVENT_DEPTH_EXCEEDED,
            run_id = self.run_id,
            path = path,
            depth = depth as u64,
        );
        self.push(Mismatch::new(
            path,
            MismatchKind::DepthExceeded,
            format!("nesting of at most {}", self.options.max_depth),
            format!("nesting of {}", depth),
        ));
        false
    }

    fn compare_composites(
        &mut self,
        expected: &Composite,
        actual: &Composite,
        path: &str,
        depth: usize,
        exclusions: Option<&ExclusionSet>,
    ) -> bool {
        if expected.identity() == actual.identity() {
            return true;
        }
        if !self.within_depth(path, depth) {
            return false;
        }
        match self.visited.enter(expected, actual) {
            Entry::New => {}
            Entry::OnPath => {
                // Already being compared further up this walk: assume equal.
                self.assumed_equal_cycles += 1;
                tracing::debug!(
                    component = module_path!(),
                    event = EVENT_CYCLE_BREAK,
                    run_id = self.run_id,
                    path = path,
                );
                return true;
            }
            // Shared child already compared under another path.
            Entry::Finished(matched) => return matched,
        }

        let mut matched = true;
        for name in expected.member_names() {
            if self.halted() {
                break;
            }
            if exclusions.is_some_and(|x| x.contains(&name)) {
                continue;
            }
            let child_path = member_path(path, &name);
            let expected_value = expected.member(&name).unwrap_or(Value::Null);
            match actual.member(&name) {
                Some(actual_value) => {
                    matched &=
                        self.compare(&expected_value, &actual_value, &child_path, depth + 1);
                }
                None => {
                    self.push(Mismatch::new(
                        child_path,
                        MismatchKind::MissingMember,
                        format!("member `{}`", name),
                        "<missing>",
                    ));
                    matched = false;
                }
            }
        }
        self.visited.finish(expected, actual, matched);
        matched
    }
}
