//! Health check handler

use axum::{extract::State, Json};

use crate::{AppState, AppError, AppResult};
use crate::models::HealthResponse;

pub async fn check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let bundle = state.store.current().ok_or(AppError::ModelUnavailable)?;
    Ok(Json(HealthResponse::from_bundle(&bundle)))
}
