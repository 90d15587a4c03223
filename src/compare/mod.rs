//! Ordering of free-form, dot-delimited version strings.
//!
//! Versions are split on `.` into tokens. Tokens are compared pairwise from
//! the left: first by their leading run of digits as an integer, then, when
//! those tie, by the trimmed token text byte-wise. A side that runs out of
//! tokens is padded with `"0"`, so `1.0` equals `1` and `1.1` is newer
//! than `1`.
//!
//! ```
//! use std::cmp::Ordering;
//! use dotver::compare_versions;
//!
//! assert_eq!(compare_versions("5.10.0", "5.5.2"), Ordering::Greater);
//! assert_eq!(compare_versions("1.0", "1"), Ordering::Equal);
//! assert_eq!(compare_versions("1.0.x-SNAPSHOT", "1.1"), Ordering::Less);
//! ```
//!
//! Every input is accepted, including empty strings and segments, so the
//! comparison never fails.

mod numeral;
mod token;

pub use numeral::{compare_numerals, leading_numeral};
pub use token::{compare_tokens, tokenize};

use std::cmp::Ordering;

/// Token used in place of segments missing from the shorter version.
const PADDING: &str = numeral::ZERO;

/// Compare two version strings.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut left = tokenize(a);
    let mut right = tokenize(b);

    loop {
        let (ta, tb) = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (ta, tb) => (ta.unwrap_or(PADDING), tb.unwrap_or(PADDING)),
        };

        match compare_tokens(ta, tb) {
            Ordering::Equal => {}
            decided => return decided,
        }
    }
}

/// Compare two version strings, returning `-1`, `0` or `1`.
#[must_use]
pub fn compare_ordinal(a: &str, b: &str) -> i8 {
    match compare_versions(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
