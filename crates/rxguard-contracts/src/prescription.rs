//! Extraction candidates and their per-candidate verification results.

use serde::{Deserialize, Serialize};

/// A (drug-name, dose) pair pulled heuristically out of prescription text.
///
/// Both fields are trimmed substrings of the source text. A candidate is not
/// yet validated: it may be noise, a misspelling, or a real medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The name as it appeared in the text, e.g. "Amoxicilin".
    pub raw_name: String,
    /// The dose as it appeared in the text, e.g. "500 mg".
    pub dose_text: String,
}

impl Candidate {
    /// Build a candidate, trimming both fields.
    pub fn new(raw_name: impl AsRef<str>, dose_text: impl AsRef<str>) -> Self {
        Self {
            raw_name: raw_name.as_ref().trim().to_string(),
            dose_text: dose_text.as_ref().trim().to_string(),
        }
    }

    /// The case-insensitive identity used to deduplicate extraction results.
    pub fn dedup_key(&self) -> (String, String) {
        (self.raw_name.to_lowercase(), self.dose_text.to_lowercase())
    }
}

/// The outcome of resolving and parsing a single `Candidate`.
///
/// Exactly one entry is produced per candidate, in candidate order, whether or
/// not the name matched anything in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedEntry {
    pub raw_name: String,
    pub dose_text: String,
    /// Canonical catalog name, present only when the match cleared the
    /// confidence threshold.
    pub matched_name: Option<String>,
    /// Fuzzy similarity of the best catalog name, 0–100.
    pub match_score: u8,
    /// Leading numeric magnitude of `dose_text`. The unit is not considered.
    pub dose_mg: Option<u32>,
}

impl VerifiedEntry {
    /// The name a presentation layer should display: canonical if matched,
    /// otherwise the raw text.
    pub fn display_name(&self) -> &str {
        self.matched_name.as_deref().unwrap_or(&self.raw_name)
    }
}

/// The best catalog match for a raw name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Highest-scoring canonical name; `None` only for blank input or an
    /// empty catalog.
    pub matched_name: Option<String>,
    /// Similarity 0–100.
    pub score: u8,
}

impl Resolution {
    /// The result for blank input or an empty catalog.
    pub fn none() -> Self {
        Self {
            matched_name: None,
            score: 0,
        }
    }
}
