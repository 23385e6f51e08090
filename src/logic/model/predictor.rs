//! Predictor - probability of the delayed class for one feature vector

use crate::logic::features::FeatureVector;

use super::bundle::ModelBundle;
use super::classifier::InferenceError;

/// Index of the "delayed" class in the classifier's probability output
pub const DELAYED_CLASS: usize = 1;

/// Slack tolerated when tree averages land a hair outside [0, 1]
const PROBABILITY_EPSILON: f64 = 1e-9;

pub fn predict(vector: &FeatureVector, bundle: &ModelBundle) -> Result<f64, InferenceError> {
    let proba = bundle.classifier.predict_proba(vector.as_slice())?;

    if proba.len() != 2 {
        return Err(InferenceError(format!(
            "expected 2 class probabilities, got {}",
            proba.len()
        )));
    }

    let p = proba[DELAYED_CLASS];
    if !p.is_finite() || p < -PROBABILITY_EPSILON || p > 1.0 + PROBABILITY_EPSILON {
        return Err(InferenceError(format!("probability {} outside [0, 1]", p)));
    }

    Ok(p.clamp(0.0, 1.0))
}
