//! Tokenization and per-token ordering.

use super::numeral::{compare_numerals, leading_numeral};
use std::cmp::Ordering;

/// Split a version string into its `.`-delimited tokens.
///
/// An empty string yields a single empty token, and empty segments are kept
/// (`"1..2"` has three tokens).
pub fn tokenize(version: &str) -> std::str::Split<'_, char> {
    version.split('.')
}

/// Compare two tokens: numeral first, then the trimmed token byte-wise.
#[must_use]
pub fn compare_tokens(a: &str, b: &str) -> Ordering {
    let a = a.trim();
    let b = b.trim();

    compare_numerals(leading_numeral(a), leading_numeral(b)).then_with(|| a.cmp(b))
}
