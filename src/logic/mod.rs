//! Logic Module - the prediction core
//!
//! Per request: `encode` → `predict` → `format_prediction`, all against an
//! immutable bundle snapshot. Nothing here blocks, retries or holds
//! cross-request state.

pub mod decision;
pub mod features;
pub mod flight;
pub mod model;

#[cfg(test)]
pub(crate) mod fixtures;

use chrono::{DateTime, Utc};

pub use decision::{format_prediction, DelayLabel, PredictionResult, RiskLevel};
pub use features::{encode, FeatureVector};
pub use flight::FlightRequest;
pub use model::{ArtifactError, InferenceError, ModelBundle, ModelStore};

/// Failure of a single prediction against a loaded bundle
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("feature `{feature}` in the artifact feature order is not produced by the encoder")]
    FeatureMismatch { feature: String },

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Run the full pipeline for one request
pub fn run_prediction(
    request: &FlightRequest,
    bundle: &ModelBundle,
    now: DateTime<Utc>,
) -> CoreResult<PredictionResult> {
    let vector = encode(request, bundle)?;
    let probability = model::predict(&vector, bundle)?;

    tracing::debug!(
        "Scored {} → {} ({}): p = {:.6}",
        request.origin_airport,
        request.destination_airport,
        request.carrier,
        probability
    );

    Ok(format_prediction(probability, now))
}
