#![no_main]
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;

/// Fuzz the version comparator.
///
/// Splits the input on the first NUL byte into two versions and checks that
/// comparing them never panics and stays antisymmetric.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (a, b) = s.split_once('\0').unwrap_or((s, ""));
        let forward = dotver::compare_versions(a, b);
        assert_eq!(forward, dotver::compare_versions(b, a).reverse());
        assert_eq!(dotver::compare_versions(a, a), Ordering::Equal);
    }
});
