#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz constraint group parsing.
///
/// Parsed groups are rendered back and must parse to the same group.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(group) = s.parse::<dotver::ConstraintGroup>() {
            let _ = group.matches(s);
            let rendered = group.to_string();
            assert_eq!(rendered.parse::<dotver::ConstraintGroup>().ok(), Some(group));
        }
    }
});
