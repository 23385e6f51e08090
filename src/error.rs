//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::logic::{ArtifactError, CoreError};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Bundle not loaded
    ModelUnavailable,

    // Request errors
    ValidationError(Vec<String>),
    Unauthorized,

    // Core errors
    PredictionFailed(CoreError),
    ArtifactFailed(ArtifactError),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match &self {
            AppError::ModelUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Model not available".to_string(),
                None,
            ),
            AppError::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                "Invalid request".to_string(),
                Some(errors.clone()),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
                None,
            ),
            AppError::PredictionFailed(err) => {
                tracing::error!("Prediction error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to process prediction: {}", err),
                    None,
                )
            }
            AppError::ArtifactFailed(err) => {
                tracing::error!("Artifact error: {}", err);
                let status = match err {
                    ArtifactError::NotFound(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, format!("Failed to load model: {}", err), None)
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = match details {
            Some(details) => json!({
                "error": error_message,
                "details": details,
                "status": status.as_u16()
            }),
            None => json!({
                "error": error_message,
                "status": status.as_u16()
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::PredictionFailed(err)
    }
}

impl From<ArtifactError> for AppError {
    fn from(err: ArtifactError) -> Self {
        AppError::ArtifactFailed(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{}: {}", field, msg),
                    None => format!("{}: invalid value", field),
                })
            })
            .collect();
        messages.sort();
        AppError::ValidationError(messages)
    }
}
