//! # rxguard-core
//!
//! The deterministic verification engine for RxGuard.
//!
//! This crate provides:
//! - The seam traits (`Extractor`, `Resolver`) the pipeline stages implement
//! - The dose magnitude parser
//! - The `VerificationEngine` that runs the rule checks in a fixed order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rxguard_core::{VerificationEngine, traits::{Extractor, Resolver}};
//! ```

pub mod dose;
pub mod engine;
pub mod traits;

pub use dose::parse_magnitude;
pub use engine::{VerificationEngine, MATCH_THRESHOLD};
