//! # rxguard-match
//!
//! Fuzzy resolution of OCR'd medication names onto the drug catalog.
//!
//! [`FuzzyResolver`] implements [`rxguard_core::traits::Resolver`] using the
//! weighted ratio in [`fuzz`]: exact matches score 100, single typos land in
//! the mid-90s, and unrelated strings fall well under the engine's
//! confidence threshold.

pub mod fuzz;
pub mod resolver;

pub use fuzz::wratio;
pub use resolver::FuzzyResolver;
