//! Loading reference datasets from TOML or JSON.
//!
//! `ReferenceData` is built once at process start and shared read-only (via
//! `Arc`) by every resolver and engine. Loading is all-or-nothing:
//!
//! 1. Parse the document (`ConfigError` on malformed input).
//! 2. Validate and index the catalog (`DataIntegrity` on bad rows).
//! 3. Validate interaction and age tables against the catalog.

use std::{path::Path, sync::Arc};

use tracing::{debug, warn};

use rxguard_contracts::error::{RxGuardError, RxGuardResult};

use crate::{
    catalog::DrugCatalog,
    document::{JsonReference, ReferenceDocument},
    interactions::{AgeRestrictions, InteractionTable},
};

/// The immutable reference tables for one process.
///
/// Cloning is cheap: every table sits behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub catalog: Arc<DrugCatalog>,
    pub interactions: Arc<InteractionTable>,
    pub restrictions: Arc<AgeRestrictions>,
}

impl ReferenceData {
    /// Validate a parsed document and build the indexed tables.
    pub fn from_document(doc: ReferenceDocument) -> RxGuardResult<Self> {
        let catalog = DrugCatalog::from_records(doc.drugs)?;
        let interactions = InteractionTable::from_rules(doc.interactions, &catalog)?;
        let restrictions = AgeRestrictions::from_restrictions(doc.pediatric, &catalog)?;

        debug!(
            drugs = catalog.len(),
            interactions = interactions.len(),
            restrictions = restrictions.len(),
            "reference data loaded"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            interactions: Arc::new(interactions),
            restrictions: Arc::new(restrictions),
        })
    }

    /// Parse `s` as a TOML reference document.
    ///
    /// Returns `RxGuardError::ConfigError` if the TOML is malformed or does
    /// not match `ReferenceDocument`, and `DataIntegrity` if it parses but
    /// violates a catalog invariant.
    pub fn from_toml_str(s: &str) -> RxGuardResult<Self> {
        let doc: ReferenceDocument = toml::from_str(s).map_err(|e| RxGuardError::ConfigError {
            reason: format!("failed to parse reference TOML: {}", e),
        })?;
        Self::from_document(doc)
    }

    /// Parse `s` as a JSON reference document or a bare array of drugs.
    pub fn from_json_str(s: &str) -> RxGuardResult<Self> {
        let json: JsonReference =
            serde_json::from_str(s).map_err(|e| RxGuardError::ConfigError {
                reason: format!("failed to parse reference JSON: {}", e),
            })?;
        Self::from_document(json.into())
    }

    /// Read the file at `path`; `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn from_file(path: &Path) -> RxGuardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RxGuardError::ConfigError {
            reason: format!("failed to read reference file '{}': {}", path.display(), e),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let loaded = if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        };

        if let Err(e) = &loaded {
            warn!(path = %path.display(), error = %e, "reference data rejected");
        }
        loaded
    }
}
