//! Reference records: catalog entries, interaction rules, age restrictions.
//!
//! These are the rows of the reference datasets. They are deserialized once at
//! startup and never mutated afterwards.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One drug in the reference catalog.
///
/// Example in TOML:
/// ```toml
/// [[drugs]]
/// name = "Amoxicillin"
/// min_mg = 250
/// max_mg = 1000
/// allergens = ["penicillin"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugRecord {
    /// Canonical spelling; the catalog's unique key.
    pub name: String,
    /// Lowest acceptable single dose magnitude.
    pub min_mg: u32,
    /// Highest acceptable single dose magnitude.
    pub max_mg: u32,
    /// Allergen classes a patient may be allergic to (e.g. "penicillin").
    #[serde(default)]
    pub allergens: BTreeSet<String>,
}

impl DrugRecord {
    /// True if `allergy` names one of this drug's allergens, ignoring case.
    pub fn has_allergen(&self, allergy: &str) -> bool {
        let allergy = allergy.to_lowercase();
        self.allergens.iter().any(|a| a.to_lowercase() == allergy)
    }
}

/// A warning attached to an unordered pair of canonical drug names.
///
/// Example in TOML:
/// ```toml
/// [[interactions]]
/// drugs = ["Warfarin", "Aspirin"]
/// warning = "Additive bleeding risk"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRule {
    pub drugs: [String; 2],
    pub warning: String,
}

impl InteractionRule {
    /// True if this rule covers `{a, b}` in either order.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        let [x, y] = &self.drugs;
        (x == a && y == b) || (x == b && y == a)
    }
}

/// An age rule for one drug.
///
/// Without `max_mg` the drug must not be given below `min_age` at all. With
/// `max_mg` it may be, but only up to that dose. Only consulted when the
/// patient's age is known.
///
/// Example in TOML:
/// ```toml
/// [[pediatric]]
/// drug = "Paracetamol"
/// min_age = 12
/// max_mg = 250
/// warning = "Reduce the dose for children under 12"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PediatricRestriction {
    /// Canonical catalog name.
    pub drug: String,
    /// Patients strictly younger than this are flagged.
    pub min_age: u32,
    /// Highest dose allowed below `min_age`.
    #[serde(default)]
    pub max_mg: Option<u32>,
    pub warning: String,
}

impl PediatricRestriction {
    /// True when the rule is a dose cap rather than an outright ban.
    pub fn is_dose_cap(&self) -> bool {
        self.max_mg.is_some()
    }
}
