//! Compiled patterns shared by the extraction heuristics.
//!
//! Name tokens are letters, digits, hyphens, spaces and tabs, and must start
//! with a letter. They never cross a line break. Doses are 1–4 digits, optional
//! whitespace, then a unit.

use std::sync::LazyLock;

use regex::Regex;

/// Name token immediately followed (after an optional `,` or `-`) by a dose.
///
/// Group 1 is the name (3–61 chars), group 2 the dose. The name may not end in
/// a digit, otherwise greedy matching would pull the dose's leading digits into
/// the name ("Amoxicillin 50" + "0mg").
pub(crate) static NAME_THEN_DOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)([A-Za-z][A-Za-z0-9\- \t]{1,59}[A-Za-z\- \t])\s*(?:,|-)?\s*([0-9]{1,4}\s*(?:mg|g|mcg|µg|ml|units|iu))",
    )
    .expect("valid regex")
});

/// A standalone dose anywhere in the text.
pub(crate) static DOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]{1,4}\s*(?:mg|g|mcg|µg|ml|units|iu)").expect("valid regex")
});

/// A name-like token inside a look-back window (3–41 chars).
pub(crate) static NAME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9\- \t]{2,40}").expect("valid regex"));
