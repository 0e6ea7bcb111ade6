//! The report envelope returned for one prescription check.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rxguard_contracts::{
    prescription::VerifiedEntry,
    report::{ReportStatus, VerificationReport},
};

use crate::schedule::Schedule;

/// Longest prefix of the input text echoed back in a report, in characters.
pub const RAW_TEXT_LIMIT: usize = 8000;

/// Unique identifier for a single `Pipeline::check` call.
///
/// Appears in the report and in every log line the pipeline emits for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(pub uuid::Uuid);

impl CheckId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Verification outcome plus the schedule and the echoed input.
///
/// `status`, `issues`, and `verified` are carried over unchanged from the
/// engine's `VerificationReport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionReport {
    pub check_id: CheckId,
    pub checked_at: DateTime<Utc>,
    pub status: ReportStatus,
    pub issues: Vec<String>,
    pub verified: Vec<VerifiedEntry>,
    pub schedule: Schedule,
    /// The first `RAW_TEXT_LIMIT` characters of the checked text.
    pub raw_text: String,
}

impl PrescriptionReport {
    pub(crate) fn assemble(check_id: CheckId, report: VerificationReport, text: &str) -> Self {
        let schedule = Schedule::from_verified(&report.verified);
        Self {
            check_id,
            checked_at: Utc::now(),
            status: report.status,
            issues: report.issues,
            verified: report.verified,
            schedule,
            raw_text: truncate_chars(text, RAW_TEXT_LIMIT).to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == ReportStatus::Valid
    }
}

fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
