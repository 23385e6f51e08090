//! Model metadata handler

use axum::{extract::State, Json};

use crate::{AppState, AppError, AppResult};
use crate::models::ModelInfoResponse;

/// Read-only projection of the loaded bundle
pub async fn get(State(state): State<AppState>) -> AppResult<Json<ModelInfoResponse>> {
    let bundle = state.store.current().ok_or(AppError::ModelUnavailable)?;
    Ok(Json(ModelInfoResponse::from_bundle(&bundle)))
}
