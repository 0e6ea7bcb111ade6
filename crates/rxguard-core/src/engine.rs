//! The RxGuard verification engine: deterministic rule checks over resolved
//! candidates.
//!
//! The engine enforces this pipeline for every call to `verify()`:
//!
//!   Candidate → Resolve → Parse dose → Threshold → Bounds / Allergy / Age
//!   → VerifiedEntry, then one Interaction pass over all entries
//!
//! Every rule failure becomes an issue string; nothing here returns an error.
//! All failures are accumulated so callers see the full picture in one report.

use tracing::{debug, warn};

use rxguard_contracts::{
    drug::{DrugRecord, PediatricRestriction},
    patient::PatientProfile,
    prescription::{Candidate, Resolution, VerifiedEntry},
    report::VerificationReport,
};
use rxguard_reference::ReferenceData;

use crate::{dose::parse_magnitude, traits::Resolver};

/// Matches scoring below this are reported as unknown/uncertain and skip all
/// catalog-based checks.
pub const MATCH_THRESHOLD: u8 = 60;

/// Verifies candidates against immutable reference data and a patient profile.
///
/// Holds no per-call state, so one engine can serve concurrent requests.
pub struct VerificationEngine {
    reference: ReferenceData,
    resolver: Box<dyn Resolver>,
}

impl VerificationEngine {
    /// Create an engine over `reference`, resolving names with `resolver`.
    ///
    /// The resolver should be built over the same catalog; a resolved name
    /// absent from `reference.catalog` is treated as unknown.
    pub fn new(reference: ReferenceData, resolver: Box<dyn Resolver>) -> Self {
        Self {
            reference,
            resolver,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Verify `candidates` for `patient`.
    ///
    /// # Pipeline
    ///
    /// 1. For each candidate in order: resolve the name, parse the dose, and
    ///    run the catalog checks (see `check_candidate`). One `VerifiedEntry`
    ///    is recorded per candidate whatever the outcome.
    /// 2. For each matched entry and each current medication: resolve the
    ///    medication and look the pair up in the interaction table.
    /// 3. Derive the status from the collected issues.
    pub fn verify(&self, candidates: &[Candidate], patient: &PatientProfile) -> VerificationReport {
        let mut issues = Vec::new();
        let mut verified = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            verified.push(self.check_candidate(candidate, patient, &mut issues));
        }

        self.check_interactions(&verified, patient, &mut issues);

        let report = VerificationReport::new(issues, verified);
        debug!(
            candidates = candidates.len(),
            issue_count = report.issues.len(),
            status = ?report.status,
            "verification complete"
        );
        report
    }

    // ── Per-candidate checks ──────────────────────────────────────────────────

    fn check_candidate(
        &self,
        candidate: &Candidate,
        patient: &PatientProfile,
        issues: &mut Vec<String>,
    ) -> VerifiedEntry {
        let Resolution {
            matched_name,
            score,
        } = self.resolver.resolve(&candidate.raw_name);
        let dose_mg = parse_magnitude(&candidate.dose_text);

        debug!(
            raw_name = %candidate.raw_name,
            dose_text = %candidate.dose_text,
            matched = ?matched_name,
            score,
            dose_mg = ?dose_mg,
            "candidate resolved"
        );

        let record = match matched_name.as_deref() {
            Some(name) if score >= MATCH_THRESHOLD => self.reference.catalog.get(name),
            _ => None,
        };

        let Some(record) = record else {
            raise(
                issues,
                format!(
                    "Unknown/uncertain med: '{}' (score={})",
                    candidate.raw_name, score
                ),
            );
            return VerifiedEntry {
                raw_name: candidate.raw_name.clone(),
                dose_text: candidate.dose_text.clone(),
                matched_name: None,
                match_score: score,
                dose_mg,
            };
        };

        if let Some(mg) = dose_mg {
            check_dose(record, mg, issues);
        }
        check_allergies(record, patient, issues);

        if let Some(age) = patient.age {
            if let Some(restriction) = self.reference.restrictions.violated_by(&record.name, age) {
                check_pediatric(restriction, dose_mg, age, issues);
            }
        }

        VerifiedEntry {
            raw_name: candidate.raw_name.clone(),
            dose_text: candidate.dose_text.clone(),
            matched_name: Some(record.name.clone()),
            match_score: score,
            dose_mg,
        }
    }

    // ── Interaction pass ──────────────────────────────────────────────────────

    /// Current medications are re-resolved for every matched entry; the lists
    /// involved are small enough that caching is not worth the state.
    fn check_interactions(
        &self,
        verified: &[VerifiedEntry],
        patient: &PatientProfile,
        issues: &mut Vec<String>,
    ) {
        let current: Vec<&str> = patient
            .current_meds
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect();

        for entry in verified {
            let Some(prescribed) = entry.matched_name.as_deref() else {
                continue;
            };
            for med in &current {
                let Some(existing) = self.resolver.resolve(med).matched_name else {
                    continue;
                };
                if let Some(warning) = self.reference.interactions.lookup(prescribed, &existing) {
                    raise(
                        issues,
                        format!("Interaction: {} + {} -> {}", prescribed, existing, warning),
                    );
                }
            }
        }
    }
}

fn check_dose(record: &DrugRecord, mg: u32, issues: &mut Vec<String>) {
    if mg < record.min_mg {
        raise(
            issues,
            format!("Low dose for {}: {}mg (min {})", record.name, mg, record.min_mg),
        );
    }
    if mg > record.max_mg {
        raise(
            issues,
            format!("High dose for {}: {}mg (max {})", record.name, mg, record.max_mg),
        );
    }
}

/// A ban always fires. A dose cap fires only when the parsed dose exceeds it;
/// an unparsed dose is not flagged.
fn check_pediatric(
    restriction: &PediatricRestriction,
    dose_mg: Option<u32>,
    age: u32,
    issues: &mut Vec<String>,
) {
    match (restriction.max_mg, dose_mg) {
        (None, _) => raise(
            issues,
            format!("Pediatric alert: {} (patient age {})", restriction.warning, age),
        ),
        (Some(max), Some(mg)) if mg > max => raise(
            issues,
            format!(
                "Pediatric dose too high for {}: {}mg (max {} under age {}, patient age {}). {}",
                restriction.drug, mg, max, restriction.min_age, age, restriction.warning
            ),
        ),
        _ => {}
    }
}

/// An allergy conflicts when it names one of the drug's allergens or appears
/// inside the drug's name ("amox" conflicts with Amoxicillin). Blank allergy
/// entries are ignored; they would otherwise match every name.
fn check_allergies(record: &DrugRecord, patient: &PatientProfile, issues: &mut Vec<String>) {
    let name = record.name.to_lowercase();
    for allergy in patient.allergies.iter().map(|a| a.trim()) {
        if allergy.is_empty() {
            continue;
        }
        if record.has_allergen(allergy) || name.contains(&allergy.to_lowercase()) {
            raise(
                issues,
                format!(
                    "Allergy alert: patient allergic to {}; prescribed {}",
                    allergy, record.name
                ),
            );
        }
    }
}

fn raise(issues: &mut Vec<String>, issue: String) {
    warn!(%issue, "verification issue raised");
    issues.push(issue);
}

// ── Tests ────────────────────────────────────────────────────────────────────
