//! Operator authentication middleware

use axum::{
    extract::{State, Request},
    middleware::Next,
    response::Response,
    http::header::AUTHORIZATION,
};
use sha2::{Sha256, Digest};

use crate::{AppState, AppError};

/// Middleware: Require the configured admin bearer token
pub async fn require_admin_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.config.admin_token.as_deref() else {
        tracing::warn!("Operator endpoint called but ADMIN_TOKEN is not configured");
        return Err(AppError::Unauthorized);
    };

    let token = extract_bearer_token(&req)?;

    // Compare digests, not raw tokens
    if hash_token(&token) != hash_token(expected) {
        tracing::warn!("Rejected operator request with invalid token");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}

/// Extract bearer token from Authorization header
fn extract_bearer_token(req: &Request) -> Result<String, AppError> {
    let auth_header = req.headers()
        .get(AUTHORIZATION)
        .ok_or(AppError::Unauthorized)?
        .to_str()
        .map_err(|_| AppError::Unauthorized)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or(AppError::Unauthorized)
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
