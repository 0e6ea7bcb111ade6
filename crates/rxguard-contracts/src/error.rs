//! Error types for the RxGuard verification pipeline.
//!
//! Verification itself never fails: uncertain matches and rule violations are
//! reported as issues. Errors are reserved for loading reference data and
//! reading caller input, and are fatal at startup.

use thiserror::Error;

/// The unified error type for the RxGuard crates.
#[derive(Debug, Error)]
pub enum RxGuardError {
    /// A reference or configuration file could not be read or parsed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// Reference data parsed but violates a catalog invariant
    /// (duplicate canonical name, inverted bounds, dangling interaction).
    ///
    /// The engine must never run on partial or corrupt reference data.
    #[error("reference data integrity error: {reason}")]
    DataIntegrity { reason: String },

    /// Prescription text or patient fields supplied by the caller could not be read.
    #[error("input error: {reason}")]
    InputError { reason: String },
}

/// Convenience alias used throughout the RxGuard crates.
pub type RxGuardResult<T> = Result<T, RxGuardError>;
