//! # rxguard-extract
//!
//! Heuristic medication/dose candidate extraction from OCR text.
//!
//! [`CandidateExtractor`] implements [`rxguard_core::traits::Extractor`].
//! It favours recall over precision: two overlapping regex passes are merged
//! and deduplicated, and spurious pairs are left for the resolver's match
//! score to discount.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use rxguard_core::traits::Extractor;
//! use rxguard_extract::CandidateExtractor;
//!
//! let candidates = CandidateExtractor::new().extract("Amoxicillin 500mg twice daily");
//! assert_eq!(candidates[0].raw_name, "Amoxicillin");
//! ```

pub mod extractor;
mod patterns;

pub use extractor::{CandidateExtractor, CONTEXT_WINDOW};
