//! Flight Delay Prediction API
//!
//! Serves delay predictions from a model bundle produced at training time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 FLIGHT DELAY PREDICTION API                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌───────────┐   ┌───────────┐   ┌────────┐ │
//! │  │  Feature  │──▶│ Predictor │──▶│ Decision  │──▶│  HTTP  │ │
//! │  │  Encoder  │   │           │   │ Formatter │   │ (Axum) │ │
//! │  └─────┬─────┘   └─────┬─────┘   └───────────┘   └────────┘ │
//! │        └───────┬───────┘                                    │
//! │                ▼                                            │
//! │        ┌──────────────┐                                     │
//! │        │ Model Store  │◀── artifact (startup / reload)      │
//! │        └──────────────┘                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod middleware;
pub mod models;

use axum::{
    Router,
    routing::{get, post},
    http::HeaderValue,
    middleware as axum_middleware,
};
use tower_http::{
    cors::{CorsLayer, AllowOrigin, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

use logic::ModelStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ModelStore,
    pub config: config::Config,
}

impl AppState {
    pub fn new(store: ModelStore, config: config::Config) -> Self {
        Self { store, config }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/", get(handlers::root::status))
        .route("/health", get(handlers::health::check))
        .route("/model-info", get(handlers::model_info::get))
        .route("/predict", post(handlers::predict::predict));

    // Operator routes (admin token)
    let admin_routes = Router::new()
        .route("/admin/reload", post(handlers::admin::reload))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin_token,
        ));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_allow_origin))
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = match origin {
        "*" => AllowOrigin::from(Any),
        other => match HeaderValue::from_str(other) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!("Invalid CORS_ALLOW_ORIGIN '{}', allowing any origin", other);
                AllowOrigin::from(Any)
            }
        },
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
