//! Integration tests for version ordering through the public API.

use dotver::{compare_ordinal, compare_with, Operator, Version};

#[test]
fn test_reference_scenarios() {
    let cases = [
        ("1.0.0", "1.0.0", 0),
        ("5.10.0", "5.5.2", 1),
        ("5.0.3", "5.0.20", -1),
        ("1.0.x-SNAPSHOT", "1.0.x-SNAPSHOT", 0),
        ("1.0.x-SNAPSHOT", "1.1", -1),
        ("15.5.2", "6.0.2", 1),
    ];

    for (a, b, expected) in cases {
        assert_eq!(compare_ordinal(a, b), expected, "compare({a:?}, {b:?})");
        assert_eq!(compare_ordinal(b, a), -expected, "compare({b:?}, {a:?})");
    }
}

#[test]
fn test_zero_padding_equivalence() {
    assert_eq!(compare_ordinal("1.0", "1"), 0);
    assert_eq!(compare_ordinal("1.1", "1"), 1);
    assert_eq!(compare_ordinal("1", "1.1"), -1);
}

#[test]
fn test_lexicographic_fallback() {
    assert_eq!(compare_ordinal("2.a", "2.b"), -1);
    assert_eq!(compare_ordinal("b", "a"), 1);
}

#[test]
fn test_empty_strings() {
    assert_eq!(compare_ordinal("", "1"), -1);
    assert_eq!(compare_ordinal("1", ""), 1);
    assert_eq!(compare_ordinal("", ""), 0);
}

#[test]
fn test_docker_style_versions() {
    // zero-prefixed months and vendor suffixes
    assert_eq!(compare_ordinal("17.07.0-ce", "17.06.2-ce"), 1);
    assert_eq!(compare_ordinal("17.07.0-ce", "17.7.0-ce"), -1);
    assert!(compare_with("18.09.1", "17.07.0", Operator::Ge));
}

#[test]
fn test_sorting_versions() {
    let mut versions: Vec<Version> = [
        "2.0.0", "1.10", "1.9.9", "1.0.x-SNAPSHOT", "1.0", "10", "", "1.0.0.1",
    ]
    .into_iter()
    .map(Version::from)
    .collect();
    versions.sort();

    let sorted: Vec<&str> = versions.iter().map(Version::as_str).collect();
    assert_eq!(
        sorted,
        vec!["", "1.0", "1.0.0.1", "1.0.x-SNAPSHOT", "1.9.9", "1.10", "2.0.0", "10"]
    );
}
