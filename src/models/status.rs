//! Service status models

use std::collections::BTreeMap;

use serde::Serialize;

use crate::logic::ModelBundle;

/// `GET /` liveness payload
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// `GET /health` when the bundle is loaded
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub modelo_carregado: bool,
    pub data_treinamento: serde_json::Value,
    pub metricas: BTreeMap<String, f64>,
}

impl HealthResponse {
    pub fn from_bundle(bundle: &ModelBundle) -> Self {
        Self {
            status: "healthy",
            modelo_carregado: true,
            data_treinamento: bundle.trained_at.clone(),
            metricas: bundle.metrics.clone(),
        }
    }
}

/// `GET /model-info` and reload result
#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub data_treinamento: serde_json::Value,
    pub metricas: BTreeMap<String, f64>,
    pub features: Vec<String>,
    pub taxa_base_atraso: f64,
    pub classificador: &'static str,
    /// CRC32 of the feature order, hex
    pub feature_fingerprint: String,
}

impl ModelInfoResponse {
    pub fn from_bundle(bundle: &ModelBundle) -> Self {
        Self {
            data_treinamento: bundle.trained_at.clone(),
            metricas: bundle.metrics.clone(),
            features: bundle.feature_order.clone(),
            taxa_base_atraso: bundle.base_delay_rate,
            classificador: bundle.classifier.kind(),
            feature_fingerprint: format!("{:08x}", bundle.feature_fingerprint()),
        }
    }
}
