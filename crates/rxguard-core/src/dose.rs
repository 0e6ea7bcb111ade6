//! Dose magnitude parsing.
//!
//! Only the number is extracted. "50mg", "50 g" and "50 units" all parse to
//! 50; comparing the result against milligram bounds is a known precision gap
//! for non-mg doses.

use std::sync::LazyLock;

use regex::Regex;

/// At most four digits, matching the extractor's dose patterns.
static MAGNITUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,4}").expect("valid regex"));

/// Return the first run of 1–4 ASCII digits in `dose_text`.
///
/// A longer run is cut after its fourth digit: `"50000mg"` parses to 5000.
/// Returns `None` when the text contains no digits.
pub fn parse_magnitude(dose_text: &str) -> Option<u32> {
    MAGNITUDE
        .find(dose_text)
        .and_then(|m| m.as_str().parse().ok())
}
