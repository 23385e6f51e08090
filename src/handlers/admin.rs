//! Operator handlers

use axum::{extract::State, Json};

use crate::{AppState, AppResult};
use crate::models::ModelInfoResponse;

/// Re-read the artifact from `MODEL_PATH` and swap it in.
/// A failed reload leaves the current bundle in place.
pub async fn reload(State(state): State<AppState>) -> AppResult<Json<ModelInfoResponse>> {
    let path = state.config.model_path.clone();
    let store = state.store.clone();

    let bundle = tokio::task::spawn_blocking(move || store.load_from(&path))
        .await
        .map_err(|e| crate::AppError::InternalError(format!("reload task failed: {}", e)))??;

    tracing::info!(
        "Model reloaded from {} (trained {})",
        state.config.model_path.display(),
        bundle.trained_at
    );

    Ok(Json(ModelInfoResponse::from_bundle(&bundle)))
}
