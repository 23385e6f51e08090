//! Artifact Loader - reads the bundle file produced by the training pipeline
//!
//! The file is a serde_json document with the bundle fields at the top
//! level. The classifier is tagged by `kind`; families this crate cannot
//! score are reported as incompatible rather than corrupt.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::bundle::{ModelBundle, RiskTables};
use super::classifier::ProbabilityEstimator;
use super::forest::RandomForest;
use super::logistic::LogisticRegression;
use crate::logic::features::Category;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("model artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt model artifact: {0}")]
    Corrupt(String),

    #[error("incompatible classifier format: {0}")]
    IncompatibleFormat(String),
}

// ============================================================================
// RAW LAYOUT
// ============================================================================

/// On-disk layout. Every field is required.
#[derive(Debug, Deserialize)]
struct RawBundle {
    classifier: serde_json::Value,
    risk_tables: HashMap<String, HashMap<String, f64>>,
    feature_order: Vec<String>,
    base_delay_rate: f64,
    trained_at: serde_json::Value,
    metrics: BTreeMap<String, f64>,
}

// ============================================================================
// LOADING
// ============================================================================

/// Load a bundle from a file
pub fn load(path: impl AsRef<Path>) -> Result<ModelBundle, ArtifactError> {
    let path = path.as_ref();
    tracing::info!("Loading model artifact from: {}", path.display());

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ArtifactError::NotFound(path.to_path_buf()),
        _ => ArtifactError::Io(e),
    })?;
    from_slice(&bytes)
}

/// Load a bundle from bytes already in memory
pub fn from_slice(bytes: &[u8]) -> Result<ModelBundle, ArtifactError> {
    let raw: RawBundle = serde_json::from_slice(bytes)
        .map_err(|e| ArtifactError::Corrupt(e.to_string()))?;

    if raw.trained_at.is_null() {
        return Err(ArtifactError::Corrupt("trained_at is null".to_string()));
    }

    let classifier = decode_classifier(raw.classifier)?;
    let risk_tables = decode_risk_tables(raw.risk_tables)?;
    validate_rate("base_delay_rate", raw.base_delay_rate)?;
    validate_feature_order(&raw.feature_order)?;

    if let Some(width) = classifier.n_features() {
        if width != raw.feature_order.len() {
            return Err(ArtifactError::Corrupt(format!(
                "classifier expects {} features but feature_order lists {}",
                width,
                raw.feature_order.len()
            )));
        }
    }

    let bundle = ModelBundle {
        classifier,
        risk_tables,
        feature_order: raw.feature_order,
        base_delay_rate: raw.base_delay_rate,
        trained_at: raw.trained_at,
        metrics: raw.metrics,
    };

    tracing::info!(
        "Model artifact decoded: {} with {} features (layout {:08x})",
        bundle.classifier.kind(),
        bundle.feature_order.len(),
        bundle.feature_fingerprint()
    );

    Ok(bundle)
}

fn decode_classifier(
    value: serde_json::Value,
) -> Result<Box<dyn ProbabilityEstimator>, ArtifactError> {
    let kind = value
        .get("kind")
        .and_then(|k| k.as_str())
        .ok_or_else(|| {
            ArtifactError::IncompatibleFormat("classifier has no `kind` tag".to_string())
        })?
        .to_string();

    match kind.as_str() {
        "random_forest" => {
            let forest: RandomForest = serde_json::from_value(value)
                .map_err(|e| ArtifactError::Corrupt(format!("random_forest: {}", e)))?;
            if forest.n_classes != 2 {
                return Err(ArtifactError::IncompatibleFormat(format!(
                    "binary classifier required, got {} classes",
                    forest.n_classes
                )));
            }
            forest.validate().map_err(ArtifactError::Corrupt)?;
            Ok(Box::new(forest))
        }
        "logistic_regression" => {
            let model: LogisticRegression = serde_json::from_value(value)
                .map_err(|e| ArtifactError::Corrupt(format!("logistic_regression: {}", e)))?;
            model.validate().map_err(ArtifactError::Corrupt)?;
            Ok(Box::new(model))
        }
        other => Err(ArtifactError::IncompatibleFormat(format!(
            "classifier kind `{}` does not provide class probabilities",
            other
        ))),
    }
}

fn decode_risk_tables(
    raw: HashMap<String, HashMap<String, f64>>,
) -> Result<RiskTables, ArtifactError> {
    let mut tables = RiskTables::new();

    for (key, table) in raw {
        let category = Category::from_key(&key)
            .ok_or_else(|| ArtifactError::Corrupt(format!("unknown risk table `{}`", key)))?;
        if tables.contains(category) {
            return Err(ArtifactError::Corrupt(format!(
                "risk table for `{}` given twice",
                category.key()
            )));
        }
        for (value, rate) in &table {
            validate_rate(&format!("risk_tables.{}.{}", key, value), *rate)?;
        }
        tables.insert(category, table);
    }

    Ok(tables)
}

fn validate_rate(field: &str, rate: f64) -> Result<(), ArtifactError> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(ArtifactError::Corrupt(format!(
            "{} must lie in [0, 1], got {}",
            field, rate
        )));
    }
    Ok(())
}

fn validate_feature_order(order: &[String]) -> Result<(), ArtifactError> {
    if order.is_empty() {
        return Err(ArtifactError::Corrupt("feature_order is empty".to_string()));
    }
    let mut seen = HashSet::new();
    for name in order {
        if !seen.insert(name.as_str()) {
            return Err(ArtifactError::Corrupt(format!(
                "feature `{}` appears twice in feature_order",
                name
            )));
        }
    }
    Ok(())
}
