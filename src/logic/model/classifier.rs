//! Classifier capability
//!
//! The bundle only needs one thing from its model: class probabilities for
//! a single feature row. Anything that can do that plugs in here.

use std::fmt;

/// Error raised by the underlying model while scoring
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("InferenceError: {0}")]
pub struct InferenceError(pub String);

/// Trait for probability-estimating classifiers
pub trait ProbabilityEstimator: Send + Sync {
    /// Probabilities per class for one feature row, in class order
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;

    /// Number of input columns the model was fitted on, if recorded
    fn n_features(&self) -> Option<usize>;

    /// Short model family name for logs and metadata
    fn kind(&self) -> &'static str;
}

impl fmt::Debug for dyn ProbabilityEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbabilityEstimator")
            .field("kind", &self.kind())
            .field("n_features", &self.n_features())
            .finish()
    }
}

/// Reject rows whose width does not match the fitted model
pub(crate) fn check_width(expected: usize, features: &[f64]) -> Result<(), InferenceError> {
    if features.len() != expected {
        return Err(InferenceError(format!(
            "expected {} features, got {}",
            expected,
            features.len()
        )));
    }
    if let Some(idx) = features.iter().position(|v| !v.is_finite()) {
        return Err(InferenceError(format!("feature {} is not finite", idx)));
    }
    Ok(())
}
