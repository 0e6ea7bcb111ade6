//! Drug-pair interaction warnings and age restrictions.
//!
//! Both tables refer to drugs by canonical name and are validated against the
//! catalog at load time, so a rule can never name a drug the resolver is
//! unable to produce.

use rxguard_contracts::{
    drug::{InteractionRule, PediatricRestriction},
    error::{RxGuardError, RxGuardResult},
};

use crate::catalog::DrugCatalog;

/// Symmetric lookup table of interaction warnings.
#[derive(Debug, Clone, Default)]
pub struct InteractionTable {
    rules: Vec<InteractionRule>,
}

impl InteractionTable {
    /// Validate `rules` against `catalog`.
    ///
    /// Returns `RxGuardError::DataIntegrity` when a rule names a drug that is
    /// not in the catalog, pairs a drug with itself, or repeats a pair that an
    /// earlier rule already covers (in either order).
    pub fn from_rules(rules: Vec<InteractionRule>, catalog: &DrugCatalog) -> RxGuardResult<Self> {
        for (i, rule) in rules.iter().enumerate() {
            let [a, b] = &rule.drugs;
            for name in [a, b] {
                if !catalog.contains(name) {
                    return Err(RxGuardError::DataIntegrity {
                        reason: format!(
                            "interaction #{} references '{}' which is not in the drug catalog",
                            i + 1,
                            name
                        ),
                    });
                }
            }
            if a == b {
                return Err(RxGuardError::DataIntegrity {
                    reason: format!("interaction #{} pairs '{}' with itself", i + 1, a),
                });
            }
            if rules[..i].iter().any(|earlier| earlier.matches(a, b)) {
                return Err(RxGuardError::DataIntegrity {
                    reason: format!("duplicate interaction for pair {{{}, {}}}", a, b),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Return the warning for the unordered pair `{a, b}`, if any.
    pub fn lookup(&self, a: &str, b: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(a, b))
            .map(|rule| rule.warning.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractionRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Minimum-age restrictions keyed by canonical drug name.
#[derive(Debug, Clone, Default)]
pub struct AgeRestrictions {
    restrictions: Vec<PediatricRestriction>,
}

impl AgeRestrictions {
    /// Validate `restrictions` against `catalog`. At most one restriction
    /// per drug.
    pub fn from_restrictions(
        restrictions: Vec<PediatricRestriction>,
        catalog: &DrugCatalog,
    ) -> RxGuardResult<Self> {
        for (i, r) in restrictions.iter().enumerate() {
            if !catalog.contains(&r.drug) {
                return Err(RxGuardError::DataIntegrity {
                    reason: format!(
                        "pediatric restriction #{} references '{}' which is not in the drug catalog",
                        i + 1,
                        r.drug
                    ),
                });
            }
            if restrictions[..i].iter().any(|earlier| earlier.drug == r.drug) {
                return Err(RxGuardError::DataIntegrity {
                    reason: format!("duplicate pediatric restriction for '{}'", r.drug),
                });
            }
        }
        Ok(Self { restrictions })
    }

    /// The restriction that applies to `drug` at `age`, if the patient is
    /// younger than the restriction's minimum age.
    pub fn violated_by(&self, drug: &str, age: u32) -> Option<&PediatricRestriction> {
        self.restrictions
            .iter()
            .find(|r| r.drug == drug && age < r.min_age)
    }

    pub fn len(&self) -> usize {
        self.restrictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }
}
