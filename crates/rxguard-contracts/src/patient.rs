//! Per-request patient context.

use serde::{Deserialize, Serialize};

/// Everything the verifier knows about the patient for one check.
///
/// Supplied per request and never persisted. All lists keep caller order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub current_meds: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl PatientProfile {
    /// Build a profile from the comma-separated fields of an intake form.
    ///
    /// Each list field is split on `,`, entries are trimmed, and blank
    /// entries are dropped. `"penicillin, , sulfa"` becomes
    /// `["penicillin", "sulfa"]`.
    pub fn from_fields(
        name: Option<&str>,
        age: Option<u32>,
        allergies: &str,
        current_meds: &str,
        conditions: &str,
    ) -> Self {
        Self {
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            age,
            allergies: split_field(allergies),
            current_meds: split_field(current_meds),
            conditions: split_field(conditions),
        }
    }
}

fn split_field(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
