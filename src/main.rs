//! Flight Delay Prediction API server

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flight_delay_api::{config::Config, create_router, logic::ModelStore, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let json = config.json_logs();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "flight_delay_api=debug,tower_http=debug".into()))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Flight Delay Prediction API starting ({})...", config.environment);

    // Load model; a missing or broken artifact leaves the service degraded
    let store = ModelStore::new();
    match store.load_from(&config.model_path) {
        Ok(bundle) => {
            tracing::info!("✓ Model loaded from: {}", config.model_path.display());
            tracing::info!("  Trained at: {}", bundle.trained_at);
            if let Some(auc) = bundle.metric("roc_auc") {
                tracing::info!("  ROC-AUC: {:.4}", auc);
            }
        }
        Err(e) => {
            tracing::warn!("✗ Model not loaded ({}); serving in degraded mode", e);
        }
    }

    if config.is_production() && config.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN not set; model reload is disabled");
    }

    // Build application state
    let state = AppState::new(store, config.clone());

    // Build router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
