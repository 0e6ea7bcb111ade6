//! On-disk schema of a reference dataset.
//!
//! A `ReferenceDocument` is deserialized from TOML or JSON and holds the raw,
//! not yet validated rows. `ReferenceData::from_document` turns it into the
//! indexed, integrity-checked tables the engine uses.

use serde::{Deserialize, Serialize};

use rxguard_contracts::drug::{DrugRecord, InteractionRule, PediatricRestriction};

/// The top-level structure of a reference file.
///
/// Example:
/// ```toml
/// [[drugs]]
/// name = "Warfarin"
/// min_mg = 1
/// max_mg = 10
///
/// [[drugs]]
/// name = "Aspirin"
/// min_mg = 75
/// max_mg = 1000
/// allergens = ["salicylate"]
///
/// [[interactions]]
/// drugs = ["Warfarin", "Aspirin"]
/// warning = "Additive bleeding risk"
///
/// [[pediatric]]
/// drug = "Aspirin"
/// min_age = 12
/// warning = "Aspirin is unsafe for children under 12"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceDocument {
    /// Catalog rows in declaration order. Order is significant: it breaks
    /// ties between equally similar names.
    #[serde(default)]
    pub drugs: Vec<DrugRecord>,

    #[serde(default)]
    pub interactions: Vec<InteractionRule>,

    #[serde(default)]
    pub pediatric: Vec<PediatricRestriction>,
}

/// The JSON shapes accepted by the loader.
///
/// Besides the full document, a bare array of drug records is accepted, which
/// is how standalone `drugs.json` catalogs are usually laid out.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum JsonReference {
    Document(ReferenceDocument),
    DrugList(Vec<DrugRecord>),
}

impl From<JsonReference> for ReferenceDocument {
    fn from(json: JsonReference) -> Self {
        match json {
            JsonReference::Document(doc) => doc,
            JsonReference::DrugList(drugs) => ReferenceDocument {
                drugs,
                ..Default::default()
            },
        }
    }
}
