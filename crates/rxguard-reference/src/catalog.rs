//! The drug catalog: canonical names, dosage bounds, allergens.

use std::collections::HashMap;

use rxguard_contracts::{
    drug::DrugRecord,
    error::{RxGuardError, RxGuardResult},
};

/// Immutable, indexed set of `DrugRecord`s.
///
/// Iteration order is declaration order. Lookups by canonical name are exact
/// (case-sensitive); fuzzy lookups live in the matcher.
#[derive(Debug, Clone, Default)]
pub struct DrugCatalog {
    records: Vec<DrugRecord>,
    index: HashMap<String, usize>,
}

impl DrugCatalog {
    /// Validate and index `records`.
    ///
    /// Returns `RxGuardError::DataIntegrity` when a name is blank, when two
    /// names collide ignoring case, or when `min_mg > max_mg`.
    pub fn from_records(records: Vec<DrugRecord>) -> RxGuardResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        let mut folded: HashMap<String, String> = HashMap::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(RxGuardError::DataIntegrity {
                    reason: format!("drug #{} has a blank canonical name", i + 1),
                });
            }
            if let Some(existing) = folded.insert(record.name.to_lowercase(), record.name.clone()) {
                return Err(RxGuardError::DataIntegrity {
                    reason: format!(
                        "duplicate canonical name '{}' (collides with '{}')",
                        record.name, existing
                    ),
                });
            }
            if record.min_mg > record.max_mg {
                return Err(RxGuardError::DataIntegrity {
                    reason: format!(
                        "drug '{}' has min_mg {} greater than max_mg {}",
                        record.name, record.min_mg, record.max_mg
                    ),
                });
            }
            index.insert(record.name.clone(), i);
        }

        Ok(Self { records, index })
    }

    /// Look up a record by its exact canonical name.
    pub fn get(&self, name: &str) -> Option<&DrugRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Canonical names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrugRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
