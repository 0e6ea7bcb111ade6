//! # rxguard-contracts
//!
//! Shared types, reports, and error contracts for the RxGuard prescription
//! verifier.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod drug;
pub mod error;
pub mod patient;
pub mod prescription;
pub mod report;

#[cfg(test)]
mod tests {
    use super::*;
    use drug::{DrugRecord, InteractionRule};
    use error::RxGuardError;
    use patient::PatientProfile;
    use prescription::{Candidate, VerifiedEntry};
    use report::{ReportStatus, VerificationReport};

    fn entry(raw: &str, matched: Option<&str>) -> VerifiedEntry {
        VerifiedEntry {
            raw_name: raw.to_string(),
            dose_text: "10mg".to_string(),
            matched_name: matched.map(str::to_string),
            match_score: if matched.is_some() { 100 } else { 12 },
            dose_mg: Some(10),
        }
    }

    // ── Candidate ────────────────────────────────────────────────────────────

    #[test]
    fn candidate_new_trims_both_fields() {
        let c = Candidate::new("  Amoxicillin \t", " 500mg\n");
        assert_eq!(c.raw_name, "Amoxicillin");
        assert_eq!(c.dose_text, "500mg");
    }

    #[test]
    fn candidate_dedup_key_ignores_case() {
        let a = Candidate::new("Amoxicillin", "500MG");
        let b = Candidate::new("AMOXICILLIN", "500mg");
        assert_eq!(a.dedup_key(), b.dedup_key());
        assert_ne!(a, b);
    }

    // ── VerifiedEntry ────────────────────────────────────────────────────────

    #[test]
    fn display_name_prefers_matched_name() {
        assert_eq!(entry("amoxicilin", Some("Amoxicillin")).display_name(), "Amoxicillin");
        assert_eq!(entry("Mystery Compound", None).display_name(), "Mystery Compound");
    }

    // ── VerificationReport ───────────────────────────────────────────────────

    #[test]
    fn report_without_issues_is_valid() {
        let report = VerificationReport::new(vec![], vec![entry("Aspirin", Some("Aspirin"))]);
        assert_eq!(report.status, ReportStatus::Valid);
        assert!(report.is_valid());
    }

    #[test]
    fn report_with_issues_is_suspicious() {
        let report = VerificationReport::new(
            vec!["Unknown/uncertain med: 'Zzz' (score=10)".to_string()],
            vec![entry("Zzz", None)],
        );
        assert_eq!(report.status, ReportStatus::Suspicious);
        assert!(!report.is_valid());
    }

    #[test]
    fn report_status_serializes_as_plain_name() {
        let report = VerificationReport::new(vec![], vec![]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "Valid");

        let suspicious = VerificationReport::new(vec!["x".to_string()], vec![]);
        let json = serde_json::to_value(&suspicious).unwrap();
        assert_eq!(json["status"], "Suspicious");
    }

    #[test]
    fn report_deserialization_rejects_contradictory_status() {
        let forged = r#"{ "status": "Valid", "issues": ["High dose for Warfarin: 50mg (max 10)"], "verified": [] }"#;
        let err = serde_json::from_str::<VerificationReport>(forged).unwrap_err();
        assert!(err.to_string().contains("contradicts 1 issue"), "{err}");

        let forged = r#"{ "status": "Suspicious", "issues": [], "verified": [] }"#;
        assert!(serde_json::from_str::<VerificationReport>(forged).is_err());
    }

    #[test]
    fn report_deserialization_derives_missing_status() {
        let report: VerificationReport =
            serde_json::from_str(r#"{ "issues": ["x"], "verified": [] }"#).unwrap();
        assert_eq!(report.status, ReportStatus::Suspicious);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = VerificationReport::new(
            vec!["Unknown/uncertain med: 'Zzz' (score=10)".to_string()],
            vec![entry("Zzz", None)],
        );
        let json = serde_json::to_string(&report).unwrap();
        let back: VerificationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn unmatched_entry_serializes_null_match() {
        let json = serde_json::to_value(entry("Mystery Compound", None)).unwrap();
        assert!(json["matched_name"].is_null());
        assert_eq!(json["match_score"], 12);
        assert_eq!(json["dose_mg"], 10);
    }

    // ── DrugRecord / InteractionRule ─────────────────────────────────────────

    #[test]
    fn allergen_lookup_is_case_insensitive() {
        let record = DrugRecord {
            name: "Amoxicillin".to_string(),
            min_mg: 250,
            max_mg: 1000,
            allergens: ["Penicillin".to_string()].into_iter().collect(),
        };
        assert!(record.has_allergen("penicillin"));
        assert!(record.has_allergen("PENICILLIN"));
        assert!(!record.has_allergen("sulfa"));
    }

    #[test]
    fn drug_record_allergens_default_to_empty() {
        let record: DrugRecord =
            serde_json::from_str(r#"{ "name": "Metformin", "min_mg": 500, "max_mg": 2000 }"#)
                .unwrap();
        assert!(record.allergens.is_empty());
    }

    #[test]
    fn interaction_rule_matches_either_order() {
        let rule = InteractionRule {
            drugs: ["Warfarin".to_string(), "Aspirin".to_string()],
            warning: "Additive bleeding risk".to_string(),
        };
        assert!(rule.matches("Warfarin", "Aspirin"));
        assert!(rule.matches("Aspirin", "Warfarin"));
        assert!(!rule.matches("Warfarin", "Ibuprofen"));
        assert!(!rule.matches("Aspirin", "Aspirin"));
    }

    // ── PatientProfile ───────────────────────────────────────────────────────

    #[test]
    fn profile_from_fields_splits_and_drops_blanks() {
        let p = PatientProfile::from_fields(
            Some("  Jane Doe "),
            Some(7),
            "penicillin, , sulfa ",
            "Warfarin",
            "",
        );
        assert_eq!(p.name.as_deref(), Some("Jane Doe"));
        assert_eq!(p.age, Some(7));
        assert_eq!(p.allergies, vec!["penicillin", "sulfa"]);
        assert_eq!(p.current_meds, vec!["Warfarin"]);
        assert!(p.conditions.is_empty());
    }

    #[test]
    fn profile_from_fields_blank_name_is_none() {
        let p = PatientProfile::from_fields(Some("   "), None, "", "", "");
        assert_eq!(p, PatientProfile::default());
    }

    // ── RxGuardError display messages ────────────────────────────────────────

    #[test]
    fn error_config_error_display() {
        let err = RxGuardError::ConfigError {
            reason: "missing reference path".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing reference path"));
    }

    #[test]
    fn error_data_integrity_display() {
        let err = RxGuardError::DataIntegrity {
            reason: "duplicate canonical name 'Aspirin'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("integrity"));
        assert!(msg.contains("Aspirin"));
    }

    #[test]
    fn error_input_error_display() {
        let err = RxGuardError::InputError {
            reason: "stdin closed".to_string(),
        };
        assert!(err.to_string().contains("input error: stdin closed"));
    }
}
