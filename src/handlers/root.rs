//! Liveness handler

use axum::Json;

use crate::models::ServiceStatus;

/// Always online, independent of the model bundle
pub async fn status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "online",
        service: "Flight Delay Prediction API",
        version: env!("CARGO_PKG_VERSION"),
    })
}
