//! Prediction response model

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::logic::{DelayLabel, PredictionResult, RiskLevel};

/// `POST /predict` response
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    /// "Pontual" or "Atrasado"
    pub previsao: DelayLabel,
    /// Delay probability, 0.0 - 1.0, four decimals
    pub probabilidade_atraso: f64,
    /// Probability as a percentage, e.g. "82.3%"
    pub confianca_percentual: String,
    pub nivel_risco: RiskLevel,
    /// ISO-8601 time of computation
    pub timestamp: String,
}

impl From<PredictionResult> for PredictionResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            previsao: result.label,
            probabilidade_atraso: result.probability,
            confianca_percentual: result.confidence_text,
            nivel_risco: result.risk_level,
            timestamp: iso_timestamp(result.timestamp),
        }
    }
}

pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
