//! The verification verdict returned for one prescription.

use serde::{Deserialize, Serialize};

use crate::prescription::VerifiedEntry;

/// Overall verdict. Derived from issue presence, never decided independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    /// No issues were raised.
    Valid,
    /// At least one issue was raised.
    Suspicious,
}

/// The result of verifying a set of candidates against one patient.
///
/// `status` is Suspicious exactly when `issues` is non-empty. Build reports
/// with [`VerificationReport::new`], which derives the status; deserializing
/// rejects a document whose status disagrees with its issues, and derives
/// the status when it is absent. Code that mutates `issues` directly is
/// responsible for keeping `status` in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReportFields")]
pub struct VerificationReport {
    pub status: ReportStatus,
    /// Human-readable warnings in the order they were raised.
    pub issues: Vec<String>,
    /// One entry per input candidate, in candidate order.
    pub verified: Vec<VerifiedEntry>,
}

impl VerificationReport {
    /// Build a report, deriving `status` from `issues`.
    pub fn new(issues: Vec<String>, verified: Vec<VerifiedEntry>) -> Self {
        let status = if issues.is_empty() {
            ReportStatus::Valid
        } else {
            ReportStatus::Suspicious
        };
        Self {
            status,
            issues,
            verified,
        }
    }

    /// True when the report carries no issues.
    pub fn is_valid(&self) -> bool {
        self.status == ReportStatus::Valid
    }
}

/// Wire shape of a `VerificationReport`, checked before it becomes one.
#[derive(Deserialize)]
struct ReportFields {
    #[serde(default)]
    status: Option<ReportStatus>,
    #[serde(default)]
    issues: Vec<String>,
    #[serde(default)]
    verified: Vec<VerifiedEntry>,
}

impl TryFrom<ReportFields> for VerificationReport {
    type Error = String;

    fn try_from(fields: ReportFields) -> Result<Self, Self::Error> {
        let report = Self::new(fields.issues, fields.verified);
        match fields.status {
            Some(status) if status != report.status => Err(format!(
                "status {:?} contradicts {} issue(s)",
                status,
                report.issues.len()
            )),
            _ => Ok(report),
        }
    }
}
