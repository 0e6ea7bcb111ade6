//! # rxguard-pipeline
//!
//! End-to-end prescription checks: extraction, fuzzy matching, rule
//! verification, and a time-of-day schedule, wrapped in a
//! [`PrescriptionReport`] envelope.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use rxguard_contracts::patient::PatientProfile;
//! use rxguard_pipeline::Pipeline;
//!
//! let pipeline = Pipeline::with_defaults()?;
//! let patient = PatientProfile::from_fields(None, Some(54), "penicillin", "Warfarin", "");
//! let report = pipeline.check("Amoxicillin 500mg twice daily", &patient);
//! for issue in &report.issues {
//!     println!("{issue}");
//! }
//! ```

pub mod pipeline;
pub mod report;
pub mod schedule;

pub use pipeline::{bundled_reference, Pipeline};
pub use report::{CheckId, PrescriptionReport, RAW_TEXT_LIMIT};
pub use schedule::{Schedule, ScheduledDose, Slot};
