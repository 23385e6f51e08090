//! Model bundle - everything the pipeline needs from training

use std::collections::{BTreeMap, HashMap};

use crate::logic::features::{layout_fingerprint, Category};

use super::classifier::ProbabilityEstimator;

/// Historical delay rate per observed category value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskTables {
    tables: HashMap<Category, HashMap<String, f64>>,
}

impl RiskTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, table: HashMap<String, f64>) {
        self.tables.insert(category, table);
    }

    pub fn with_table<K, I>(mut self, category: Category, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let table = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.insert(category, table);
        self
    }

    /// Rate for a value, `None` when the category has no table or the
    /// value was never observed.
    pub fn rate(&self, category: Category, value: &str) -> Option<f64> {
        self.tables.get(&category)?.get(value).copied()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.tables.contains_key(&category)
    }

}

/// Loaded artifact. Immutable once built; shared read-only across requests.
#[derive(Debug)]
pub struct ModelBundle {
    pub classifier: Box<dyn ProbabilityEstimator>,
    pub risk_tables: RiskTables,
    /// Column order the classifier was trained with
    pub feature_order: Vec<String>,
    /// Fallback risk for unseen categories
    pub base_delay_rate: f64,
    pub trained_at: serde_json::Value,
    pub metrics: BTreeMap<String, f64>,
}

impl ModelBundle {
    pub fn feature_fingerprint(&self) -> u32 {
        layout_fingerprint(&self.feature_order)
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}
