//! Catalog-backed fuzzy resolver.

use std::sync::Arc;

use tracing::debug;

use rxguard_contracts::prescription::Resolution;
use rxguard_core::traits::Resolver;
use rxguard_reference::DrugCatalog;

use crate::fuzz::{normalize, weighted_ratio};

/// Resolves raw names against a `DrugCatalog` with the weighted ratio.
///
/// Catalog names are normalized once at construction. The best-scoring name
/// wins; on a tie the name declared first in the catalog is kept.
#[derive(Debug, Clone)]
pub struct FuzzyResolver {
    catalog: Arc<DrugCatalog>,
    normalized: Vec<String>,
}

impl FuzzyResolver {
    pub fn new(catalog: Arc<DrugCatalog>) -> Self {
        let normalized = catalog.names().map(normalize).collect();
        Self {
            catalog,
            normalized,
        }
    }

    pub fn catalog(&self) -> &DrugCatalog {
        &self.catalog
    }
}

impl Resolver for FuzzyResolver {
    fn resolve(&self, raw_name: &str) -> Resolution {
        let query = normalize(raw_name);
        if query.is_empty() || self.catalog.is_empty() {
            return Resolution::none();
        }

        let mut best: Option<(&str, f64)> = None;
        for (name, candidate) in self.catalog.names().zip(&self.normalized) {
            let score = weighted_ratio(&query, candidate);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((name, score)),
            }
        }

        let Some((name, score)) = best else {
            return Resolution::none();
        };
        // Truncate, so 59.6 stays below a threshold of 60.
        let score = score.floor().clamp(0.0, 100.0) as u8;
        debug!(raw = raw_name, matched = name, score, "name resolved");
        Resolution {
            matched_name: Some(name.to_string()),
            score,
        }
    }
}
