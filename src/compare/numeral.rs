//! Leading-numeral extraction and numeric ordering of digit runs.

use std::cmp::Ordering;

/// Numeral used for tokens that do not start with a digit.
pub const ZERO: &str = "0";

/// Extract the leading run of ASCII decimal digits from a token.
///
/// Tokens that start with a non-digit (including the empty token) have no
/// numeral and yield [`ZERO`].
#[must_use]
pub fn leading_numeral(token: &str) -> &str {
    let end = token
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(token.len());

    if end == 0 {
        ZERO
    } else {
        &token[..end]
    }
}

/// Compare two digit strings by the integer they denote.
///
/// Works on digit runs of any length: leading zeros are ignored, then the
/// longer run is the larger number, then digits are compared in order.
/// Inputs must be ASCII digits, as produced by [`leading_numeral`].
#[must_use]
pub fn compare_numerals(a: &str, b: &str) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        ZERO
    } else {
        stripped
    }
}
