//! Prediction handler

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{AppState, AppError, AppResult};
use crate::logic;
use crate::middleware::json::ValidatedJson;
use crate::models::{FlightInput, PredictionResponse};

/// Score one flight
pub async fn predict(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<FlightInput>,
) -> AppResult<Json<PredictionResponse>> {
    // One snapshot per request; a concurrent reload does not affect it
    let bundle = state.store.current().ok_or(AppError::ModelUnavailable)?;

    let request = input.into_request();
    let result = logic::run_prediction(&request, &bundle, Utc::now())?;

    tracing::info!(
        "Prediction {} → {} ({}): {} {}",
        request.origin_airport,
        request.destination_airport,
        request.carrier,
        result.label.as_str(),
        result.confidence_text
    );

    Ok(Json(result.into()))
}
