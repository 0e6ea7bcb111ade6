//! Seam traits for the RxGuard verification pipeline.
//!
//! - `Extractor`: untrusted heuristics (turns OCR text into candidates)
//! - `Resolver`:  fuzzy lookup (maps a raw name onto the catalog)
//!
//! The engine is written against these traits so either stage can be swapped
//! (a different OCR cleanup, a different similarity metric) without touching
//! the rule checks.

use rxguard_contracts::prescription::{Candidate, Resolution};

/// Produces candidate (name, dose) pairs from free text.
///
/// Implementations must be total: garbled or empty input yields an empty or
/// partial list, never an error. No two returned candidates may share the same
/// case-insensitive (raw_name, dose_text) pair.
pub trait Extractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<Candidate>;
}

/// Maps a raw, possibly misspelled name onto a canonical catalog name.
///
/// Implementations must be deterministic: the same input against the same
/// catalog always yields the same `Resolution`.
pub trait Resolver: Send + Sync {
    /// Return the best canonical match and its similarity score.
    ///
    /// Blank input resolves to `Resolution::none()`.
    fn resolve(&self, raw_name: &str) -> Resolution;
}
