//! Two-heuristic candidate extraction.
//!
//! Extraction runs in two independent passes over the same text:
//!
//! 1. **Adjacent**: a name token directly followed by a dose
//!    ("Amoxicillin 500mg", "Metformin, 850 mg").
//! 2. **Context window**: every dose, paired with the last name token in the
//!    60 characters before it ("Amoxicillin (oral) 500mg").
//!
//! Results are concatenated (adjacent first) and deduplicated by the
//! case-insensitive (name, dose) pair. Both passes can produce overlapping or
//! spurious pairs; the resolver's score is what filters them downstream.

use std::collections::HashSet;

use tracing::debug;

use rxguard_contracts::prescription::Candidate;
use rxguard_core::traits::Extractor;

use crate::patterns::{DOSE, NAME_THEN_DOSE, NAME_TOKEN};

/// How far back, in characters, the context pass looks for a name.
pub const CONTEXT_WINDOW: usize = 60;

/// The default `Extractor`: adjacent pass plus context-window pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateExtractor;

impl CandidateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for CandidateExtractor {
    fn extract(&self, text: &str) -> Vec<Candidate> {
        let adjacent = adjacent_pairs(text);
        let context = context_pairs(text);
        debug!(
            adjacent = adjacent.len(),
            context = context.len(),
            "extraction heuristics finished"
        );

        let merged = dedup(adjacent.into_iter().chain(context));
        debug!(candidates = merged.len(), "candidates extracted");
        merged
    }
}

/// Name tokens immediately followed by a dose.
pub fn adjacent_pairs(text: &str) -> Vec<Candidate> {
    NAME_THEN_DOSE
        .captures_iter(text)
        .filter_map(|caps| {
            let name = clean_name(caps.get(1)?.as_str());
            let dose = caps.get(2)?.as_str();
            Some(Candidate::new(name, dose))
        })
        .collect()
}

/// Every dose, paired with the last name token in the preceding window.
/// Doses with no name token in range are dropped.
pub fn context_pairs(text: &str) -> Vec<Candidate> {
    DOSE.find_iter(text)
        .filter_map(|dose| {
            let start = window_start(text, dose.start(), CONTEXT_WINDOW);
            let window = &text[start..dose.start()];
            let name = NAME_TOKEN.find_iter(window).last()?;
            let name = clean_name(name.as_str());
            if name.is_empty() {
                return None;
            }
            Some(Candidate::new(name, dose.as_str()))
        })
        .collect()
}

/// Keep the first occurrence of each case-insensitive (name, dose) pair.
pub fn dedup(candidates: impl IntoIterator<Item = Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.dedup_key()))
        .collect()
}

/// Trim whitespace and any trailing separator hyphens ("Amoxicillin -").
fn clean_name(raw: &str) -> &str {
    raw.trim()
        .trim_end_matches(|c: char| c == '-' || c.is_whitespace())
}

/// Byte offset `width` characters before `end`, or 0 if the text is shorter.
fn window_start(text: &str, end: usize, width: usize) -> usize {
    if width == 0 {
        return end;
    }
    text[..end]
        .char_indices()
        .rev()
        .nth(width - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}
