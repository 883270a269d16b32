//! Sequence Comparison Tests
//!
//! This test suite verifies ordered element-by-element comparison of sequences.
//!
//! ## Scenarios Covered
//!
//! 1. Same elements in the same order match
//! 2. Reordered elements fail at the first differing index
//! 3. Length differences report both counts
//! 4. Null never equals a non-null sequence
//! 5. Empty and shared-storage sequences match
//! 6. Composite and nested elements are compared structurally
//! 7. Non-sequence actuals and scalar expected values are rejected

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::simple;
use propmatch_core::shape::Value;
use propmatch_core::{has, MatchError, MismatchKind, Reflect, SequenceMatcher};

#[test]
fn test_same_elements_same_order_match() {
    let matcher = has::sequence_equal_to(&vec![1, 2, 3]).unwrap();
    assert!(matcher.matches(&vec![1, 2, 3]).is_match());
}

#[test]
fn test_reordered_elements_fail_at_first_index() {
    let matcher = has::sequence_equal_to(&vec![1, 2, 3]).unwrap();
    let report = matcher.matches(&vec![3, 2, 1]);

    let m = report.first().unwrap();
    assert_eq!(m.kind, MismatchKind::ElementDiffers);
    assert_eq!(m.path, "[0]");
    assert_eq!(m.expected, "Element at [0] should be: 1");
    assert_eq!(m.actual, "3");
}

#[test]
fn test_length_difference_reports_both_counts() {
    let matcher = has::sequence_equal_to(&vec![1, 2, 3]).unwrap();
    let report = matcher.matches(&vec![1, 2]);

    let m = report.first().unwrap();
    assert_eq!(m.kind, MismatchKind::LengthDiffers);
    assert_eq!(m.expected, "Collection with 3 elements.");
    assert_eq!(m.actual, "Collection with 2 elements.");
}

#[test]
fn test_null_never_equals_non_null_sequence() {
    let none: Option<Vec<i32>> = None;

    let report = has::sequence_equal_to(&vec![1]).unwrap().matches(&none);
    assert_eq!(report.first().unwrap().kind, MismatchKind::NullSequence);

    let report = has::sequence_equal_to(&none).unwrap().matches(&vec![1]);
    assert_eq!(report.first().unwrap().kind, MismatchKind::NullSequence);
    assert_eq!(report.first().unwrap().actual, "Collection with 1 elements.");
}

#[test]
fn test_empty_sequences_match() {
    let empty: Vec<String> = Vec::new();
    assert!(has::sequence_equal_to(&empty)
        .unwrap()
        .matches(&empty)
        .is_match());
}

#[test]
fn test_shared_storage_matches_trivially() {
    let shared = Value::sequence(vec![Value::text("a"), Value::text("b")]);
    let matcher = SequenceMatcher::new(&shared).unwrap();
    assert!(matcher.matches(&shared.clone()).is_match());
}

#[test]
fn test_composite_elements_compared_structurally() {
    let expected = vec![simple("a", 1), simple("b", 2)];
    let actual = vec![simple("a", 1), simple("b", 3)];

    let report = has::sequence_equal_to(&expected).unwrap().matches(&actual);
    let paths: Vec<_> = report.mismatches().iter().map(|m| m.path.as_str()).collect();
    assert_eq!(paths, vec!["[1]", "[1].int32_value"]);
    assert_eq!(report.first().unwrap().actual, "<SimpleObject>");
}

#[test]
fn test_nested_sequences() {
    let expected = vec![vec![1, 2], vec![3]];
    assert!(has::sequence_equal_to(&expected)
        .unwrap()
        .matches(&vec![vec![1, 2], vec![3]])
        .is_match());
    assert!(!has::sequence_equal_to(&expected)
        .unwrap()
        .matches(&vec![vec![1, 2], vec![3, 4]])
        .is_match());
}

#[test]
fn test_non_sequence_actual_is_kind_mismatch() {
    let report = has::sequence_equal_to(&vec![1]).unwrap().matches("1");
    assert_eq!(report.first().unwrap().kind, MismatchKind::KindMismatch);
}

#[test]
fn test_scalar_expected_rejected() {
    let err = SequenceMatcher::new(&"abc".reflect()).unwrap_err();
    assert!(matches!(err, MatchError::InvalidExpected { .. }));
}
