//! # rxguard-reference
//!
//! The drug catalog and interaction table the RxGuard verifier checks
//! prescriptions against.
//!
//! ## Overview
//!
//! Reference data is declared in a TOML (or JSON) document, validated once at
//! load time, and then shared immutably. Any integrity fault fails the whole
//! load; the verifier never runs on a partial catalog.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use rxguard_reference::ReferenceData;
//!
//! let reference = ReferenceData::from_file(Path::new("data/reference.toml"))?;
//! // Hand `reference.catalog` to the resolver and the engine.
//! ```

pub mod catalog;
pub mod data;
pub mod document;
pub mod interactions;

pub use catalog::DrugCatalog;
pub use data::ReferenceData;
pub use document::ReferenceDocument;
pub use interactions::{AgeRestrictions, InteractionTable};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use rxguard_contracts::error::RxGuardError;

    use crate::ReferenceData;

    const SAMPLE: &str = r#"
        [[drugs]]
        name = "Amoxicillin"
        min_mg = 250
        max_mg = 1000
        allergens = ["penicillin"]

        [[drugs]]
        name = "Warfarin"
        min_mg = 1
        max_mg = 10

        [[drugs]]
        name = "Aspirin"
        min_mg = 75
        max_mg = 1000
        allergens = ["salicylate"]

        [[interactions]]
        drugs = ["Warfarin", "Amoxicillin"]
        warning = "May increase bleeding risk; monitor INR"

        [[interactions]]
        drugs = ["Warfarin", "Aspirin"]
        warning = "Additive bleeding risk"

        [[pediatric]]
        drug = "Aspirin"
        min_age = 12
        warning = "Aspirin is unsafe for children under 12"
    "#;

    fn expect_integrity_error(toml: &str, needle: &str) {
        match ReferenceData::from_toml_str(toml) {
            Err(RxGuardError::DataIntegrity { reason }) => {
                assert!(reason.contains(needle), "unexpected reason: {reason}");
            }
            other => panic!("expected DataIntegrity, got {:?}", other),
        }
    }

    // ── 1. happy path ─────────────────────────────────────────────────────────

    #[test]
    fn test_load_sample_document() {
        let data = ReferenceData::from_toml_str(SAMPLE).unwrap();

        assert_eq!(data.catalog.len(), 3);
        assert_eq!(data.interactions.len(), 2);
        assert_eq!(data.restrictions.len(), 1);

        let amox = data.catalog.get("Amoxicillin").unwrap();
        assert_eq!((amox.min_mg, amox.max_mg), (250, 1000));
        assert!(amox.has_allergen("Penicillin"));
    }

    #[test]
    fn test_catalog_preserves_declaration_order() {
        let data = ReferenceData::from_toml_str(SAMPLE).unwrap();
        let names: Vec<&str> = data.catalog.names().collect();
        assert_eq!(names, vec!["Amoxicillin", "Warfarin", "Aspirin"]);
    }

    #[test]
    fn test_catalog_lookup_is_exact() {
        let data = ReferenceData::from_toml_str(SAMPLE).unwrap();
        assert!(data.catalog.get("Warfarin").is_some());
        assert!(data.catalog.get("warfarin").is_none());
    }

    // ── 2. interaction lookup ─────────────────────────────────────────────────

    #[test]
    fn test_interaction_lookup_is_symmetric() {
        let data = ReferenceData::from_toml_str(SAMPLE).unwrap();
        let forward = data.interactions.lookup("Warfarin", "Amoxicillin");
        let reverse = data.interactions.lookup("Amoxicillin", "Warfarin");
        assert_eq!(forward, Some("May increase bleeding risk; monitor INR"));
        assert_eq!(forward, reverse);
        assert_eq!(data.interactions.lookup("Aspirin", "Amoxicillin"), None);
    }

    #[test]
    fn test_age_restriction_applies_below_min_age_only() {
        let data = ReferenceData::from_toml_str(SAMPLE).unwrap();
        assert!(data.restrictions.violated_by("Aspirin", 7).is_some());
        assert!(data.restrictions.violated_by("Aspirin", 11).is_some());
        assert!(data.restrictions.violated_by("Aspirin", 12).is_none());
        assert!(data.restrictions.violated_by("Warfarin", 7).is_none());
    }

    #[test]
    fn test_age_restriction_dose_cap_is_optional() {
        let data = ReferenceData::from_toml_str(SAMPLE).unwrap();
        let ban = data.restrictions.violated_by("Aspirin", 7).unwrap();
        assert_eq!(ban.max_mg, None);
        assert!(!ban.is_dose_cap());

        let capped = format!(
            "{SAMPLE}\n[[pediatric]]\ndrug = \"Amoxicillin\"\nmin_age = 12\nmax_mg = 500\nwarning = \"Halve the dose\"\n"
        );
        let data = ReferenceData::from_toml_str(&capped).unwrap();
        let cap = data.restrictions.violated_by("Amoxicillin", 7).unwrap();
        assert_eq!(cap.max_mg, Some(500));
        assert!(cap.is_dose_cap());
    }

    #[test]
    fn test_empty_document_is_an_empty_catalog() {
        let data = ReferenceData::from_toml_str("").unwrap();
        assert!(data.catalog.is_empty());
        assert!(data.interactions.is_empty());
        assert!(data.restrictions.is_empty());
    }

    // ── 3. integrity faults ───────────────────────────────────────────────────

    #[test]
    fn test_duplicate_name_rejected() {
        expect_integrity_error(
            r#"
                [[drugs]]
                name = "Aspirin"
                min_mg = 75
                max_mg = 1000

                [[drugs]]
                name = "ASPIRIN"
                min_mg = 75
                max_mg = 1000
            "#,
            "duplicate canonical name",
        );
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        expect_integrity_error(
            r#"
                [[drugs]]
                name = "Metformin"
                min_mg = 2000
                max_mg = 500
            "#,
            "greater than max_mg",
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        expect_integrity_error(
            r#"
                [[drugs]]
                name = "   "
                min_mg = 1
                max_mg = 2
            "#,
            "blank canonical name",
        );
    }

    #[test]
    fn test_interaction_with_unknown_drug_rejected() {
        expect_integrity_error(
            r#"
                [[drugs]]
                name = "Warfarin"
                min_mg = 1
                max_mg = 10

                [[interactions]]
                drugs = ["Warfarin", "Ibuprofen"]
                warning = "Bleeding"
            "#,
            "'Ibuprofen' which is not in the drug catalog",
        );
    }

    #[test]
    fn test_reversed_duplicate_interaction_rejected() {
        expect_integrity_error(
            r#"
                [[drugs]]
                name = "Warfarin"
                min_mg = 1
                max_mg = 10

                [[drugs]]
                name = "Aspirin"
                min_mg = 75
                max_mg = 1000

                [[interactions]]
                drugs = ["Warfarin", "Aspirin"]
                warning = "Additive bleeding risk"

                [[interactions]]
                drugs = ["Aspirin", "Warfarin"]
                warning = "Again"
            "#,
            "duplicate interaction",
        );
    }

    #[test]
    fn test_self_interaction_rejected() {
        expect_integrity_error(
            r#"
                [[drugs]]
                name = "Warfarin"
                min_mg = 1
                max_mg = 10

                [[interactions]]
                drugs = ["Warfarin", "Warfarin"]
                warning = "?"
            "#,
            "with itself",
        );
    }

    #[test]
    fn test_restriction_with_unknown_drug_rejected() {
        expect_integrity_error(
            r#"
                [[pediatric]]
                drug = "Aspirin"
                min_age = 12
                warning = "no"
            "#,
            "pediatric restriction #1",
        );
    }

    // ── 4. parse errors ───────────────────────────────────────────────────────

    #[test]
    fn test_missing_bound_is_config_error() {
        let result = ReferenceData::from_toml_str(
            r#"
                [[drugs]]
                name = "Aspirin"
                min_mg = 75
            "#,
        );
        match result {
            Err(RxGuardError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse reference TOML"), "got: {reason}");
                assert!(reason.contains("max_mg"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_bound_is_config_error() {
        let result = ReferenceData::from_toml_str(
            r#"
                [[drugs]]
                name = "Aspirin"
                min_mg = -5
                max_mg = 100
            "#,
        );
        assert!(matches!(result, Err(RxGuardError::ConfigError { .. })));
    }

    #[test]
    fn test_toml_parse_error() {
        let result = ReferenceData::from_toml_str("this is not valid toml ][[[");
        match result {
            Err(RxGuardError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse reference TOML"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 5. JSON ───────────────────────────────────────────────────────────────

    #[test]
    fn test_json_bare_drug_array() {
        let data = ReferenceData::from_json_str(
            r#"[
                { "name": "Paracetamol", "min_mg": 325, "max_mg": 1000, "allergens": [] },
                { "name": "Ibuprofen", "min_mg": 200, "max_mg": 800 }
            ]"#,
        )
        .unwrap();
        assert_eq!(data.catalog.len(), 2);
        assert!(data.interactions.is_empty());
    }

    #[test]
    fn test_json_full_document() {
        let data = ReferenceData::from_json_str(
            r#"{
                "drugs": [
                    { "name": "Warfarin", "min_mg": 1, "max_mg": 10 },
                    { "name": "Aspirin", "min_mg": 75, "max_mg": 1000 }
                ],
                "interactions": [
                    { "drugs": ["Warfarin", "Aspirin"], "warning": "Additive bleeding risk" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            data.interactions.lookup("Aspirin", "Warfarin"),
            Some("Additive bleeding risk")
        );
    }

    #[test]
    fn test_json_parse_error() {
        let result = ReferenceData::from_json_str("{ not json");
        assert!(matches!(result, Err(RxGuardError::ConfigError { .. })));
    }

    // ── 6. files ──────────────────────────────────────────────────────────────

    #[test]
    fn test_from_file_dispatches_on_extension() {
        let dir = std::env::temp_dir();
        let toml_path = dir.join(format!("rxguard-ref-{}.toml", std::process::id()));
        let json_path = dir.join(format!("rxguard-ref-{}.json", std::process::id()));
        std::fs::write(&toml_path, SAMPLE).unwrap();
        std::fs::write(
            &json_path,
            r#"[{ "name": "Aspirin", "min_mg": 75, "max_mg": 1000 }]"#,
        )
        .unwrap();

        let from_toml = ReferenceData::from_file(&toml_path).unwrap();
        let from_json = ReferenceData::from_file(&json_path).unwrap();

        std::fs::remove_file(&toml_path).ok();
        std::fs::remove_file(&json_path).ok();

        assert_eq!(from_toml.catalog.len(), 3);
        assert_eq!(from_json.catalog.len(), 1);
    }

    #[test]
    fn test_from_missing_file_is_config_error() {
        let result = ReferenceData::from_file(std::path::Path::new(
            "/definitely/not/here/reference.toml",
        ));
        match result {
            Err(RxGuardError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read reference file"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
