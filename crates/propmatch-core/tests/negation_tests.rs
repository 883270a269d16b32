//! Negation Tests
//!
//! This test suite verifies default and strict "not structurally equal" matching.
//!
//! ## Scenarios Covered
//!
//! 1. Equal primitives and composites fail the negation
//! 2. Differing values pass, with and without exclusions
//! 3. Strict mode requires every compared member to differ
//! 4. Strict mode still requires an overall difference
//! 5. Strict mode honours exclusions and nested members
//! 6. A member missing on the actual value is an access failure
//! 7. Stop-at-first truncates the strict report

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{complex, simple, ComplexObject, SimpleObject};
use propmatch_core::{has, member, MatchOptions, MismatchKind, PropertiesNotMatcher, Record};

// ===== Default mode =====

#[test]
fn test_primitive_equal_fails() {
    let report = has::properties_not_equal_to("one").matches("one");
    assert_eq!(report.first().unwrap().kind, MismatchKind::UnexpectedlyEqual);
}

#[test]
fn test_primitive_not_equal_matches() {
    assert!(has::properties_not_equal_to("one").matches("two").is_match());
}

#[test]
fn test_simple_equal_with_ignore_fails() {
    let expected = simple("Hello World", 42);
    let actual = simple("Hello", 42);

    let matcher = has::properties_not_equal_to(&expected)
        .ignore(member!(SimpleObject, string_value))
        .unwrap();
    assert!(!matcher.matches(&actual).is_match());
}

#[test]
fn test_simple_not_equal_with_ignore_matches() {
    let expected = simple("Hello World", 42);
    let actual = simple("Hello", 42);

    let matcher = has::properties_not_equal_to(&expected)
        .ignore(member!(SimpleObject, int32_value))
        .unwrap();
    assert!(matcher.matches(&actual).is_match());
}

#[test]
fn test_complex_equal_with_ignore_fails() {
    let expected = complex(simple("Hello", 42), "Hello World", 42);
    let actual = complex(simple("Hello", 42), "Hello", 42);

    let matcher = has::properties_not_equal_to(&expected)
        .ignore(member!(ComplexObject, string_value))
        .unwrap();
    assert!(!matcher.matches(&actual).is_match());
}

#[test]
fn test_complex_not_equal_with_ignore_matches() {
    let expected = complex(simple("Hello", 42), "Hello World", 42);
    let actual = complex(simple("Hello", 42), "Hello", 42);

    let matcher = has::properties_not_equal_to(&expected)
        .ignore(member!(ComplexObject, int32_value))
        .unwrap();
    assert!(matcher.matches(&actual).is_match());
}

#[test]
fn test_complex_equal_with_ignore_complex_fails() {
    let expected = complex(simple("Hello World", 42), "Hello", 42);
    let actual = complex(simple("Hello", 42), "Hello", 42);

    let matcher = has::properties_not_equal_to(&expected)
        .ignore(member!(ComplexObject, simple))
        .unwrap();
    assert!(!matcher.matches(&actual).is_match());
}

#[test]
fn test_complex_not_equal_with_ignore_complex_matches() {
    let expected = complex(simple("Hello", 42), "Hello World", 42);
    let actual = complex(simple("Hello", 42), "Hello", 42);

    let matcher = has::properties_not_equal_to(&expected)
        .ignore(member!(ComplexObject, simple))
        .unwrap();
    assert!(matcher.matches(&actual).is_match());
}

// ===== Strict mode =====

#[test]
fn test_strict_passes_when_every_member_differs() {
    let expected = simple("Hello World", 4200);
    let actual = simple("Hello", 42);
    assert!(has::properties_not_equal_to(&expected)
        .strict()
        .matches(&actual)
        .is_match());
}

#[test]
fn test_strict_fails_when_one_member_coincides() {
    let expected = simple("Hello World", 42);
    let actual = simple("Hello", 42);

    assert!(has::properties_not_equal_to(&expected)
        .matches(&actual)
        .is_match());

    let report = has::properties_not_equal_to(&expected)
        .strict()
        .matches(&actual);
    assert_eq!(report.mismatches().len(), 1);
    let m = report.first().unwrap();
    assert_eq!(m.kind, MismatchKind::UnexpectedlyEqual);
    assert_eq!(m.path, "int32_value");
}

#[test]
fn test_strict_still_requires_overall_difference() {
    let expected = simple("Hello", 42);
    let actual = simple("Hello", 42);

    let report = has::properties_not_equal_to(&expected)
        .strict()
        .matches(&actual);
    assert_eq!(report.mismatches().len(), 1);
    assert_eq!(report.first().unwrap().path, "");
}

#[test]
fn test_strict_respects_exclusions() {
    let expected = simple("Hello World", 42);
    let actual = simple("Hello", 42);

    let matcher = PropertiesNotMatcher::new(&expected)
        .ignore(member!(SimpleObject, int32_value))
        .unwrap()
        .strict();
    assert!(matcher.is_strict());
    assert!(matcher.matches(&actual).is_match());
}

#[test]
fn test_strict_nested_composite_member_equal_fails() {
    let expected = complex(simple("Hello", 42), "Hello World", 4200);
    let actual = complex(simple("Hello", 42), "Hello", 42);

    let report = has::properties_not_equal_to(&expected)
        .strict()
        .matches(&actual);
    assert_eq!(report.first().unwrap().path, "simple");
}

#[test]
fn test_strict_missing_member_is_access_failure() {
    let expected = Record::new("R").with("a", 1).with("b", 2);
    let actual = Record::new("R").with("a", 5);

    let report = has::properties_not_equal_to(&expected)
        .strict()
        .matches(&actual);
    let m = report.first().unwrap();
    assert_eq!(m.kind, MismatchKind::InaccessibleMember);
    assert_eq!(m.path, "b");
}

#[test]
fn test_strict_stop_at_first_truncates() {
    let expected = Record::new("R").with("a", 1).with("b", 2).with("c", 3);
    let actual = Record::new("R").with("a", 1).with("b", 2).with("c", 0);

    let report = has::properties_not_equal_to(&expected)
        .with_options(MatchOptions::default().with_stop_at_first(true))
        .unwrap()
        .strict()
        .matches(&actual);
    assert_eq!(report.mismatches().len(), 1);
    assert_eq!(report.first().unwrap().path, "a");
}
