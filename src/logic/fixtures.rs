//! Shared test fixtures

use std::collections::BTreeMap;

use super::features::Category;
use super::flight::FlightRequest;
use super::model::{InferenceError, ModelBundle, ProbabilityEstimator, RiskTables};

/// Deterministic classifier returning a fixed output
pub struct StubClassifier {
    output: Result<Vec<f64>, String>,
}

impl StubClassifier {
    pub fn fixed(p_delayed: f64) -> Self {
        Self::raw(vec![1.0 - p_delayed, p_delayed])
    }

    pub fn raw(proba: Vec<f64>) -> Self {
        Self { output: Ok(proba) }
    }

    pub fn failing(message: &str) -> Self {
        Self { output: Err(message.to_string()) }
    }
}

impl ProbabilityEstimator for StubClassifier {
    fn predict_proba(&self, _features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        self.output.clone().map_err(InferenceError)
    }

    fn n_features(&self) -> Option<usize> {
        None
    }

    fn kind(&self) -> &'static str {
        "stub"
    }
}

pub const SAMPLE_FEATURE_ORDER: [&str; 6] = [
    "is_weekend",
    "alta_temporada",
    "risco_empresa",
    "risco_periodo_dia",
    "risco_aerodromo_origem",
    "risco_aerodromo_destino",
];

pub fn sample_risk_tables() -> RiskTables {
    RiskTables::new()
        .with_table(Category::Carrier, [("LATAM", 0.30), ("GOL", 0.22), ("AZUL", 0.18)])
        .with_table(Category::TimeOfDay, [("Tarde", 0.20), ("Noite", 0.27), ("Manhã", 0.12)])
        .with_table(Category::OriginAirport, [("SBGR", 0.35), ("SBSP", 0.28)])
        .with_table(Category::DestinationAirport, [("SBRJ", 0.15), ("SBBR", 0.19)])
}

pub fn sample_bundle(classifier: impl ProbabilityEstimator + 'static) -> ModelBundle {
    let mut metrics = BTreeMap::new();
    metrics.insert("roc_auc".to_string(), 0.7134);

    ModelBundle {
        classifier: Box::new(classifier),
        risk_tables: sample_risk_tables(),
        feature_order: SAMPLE_FEATURE_ORDER.iter().map(|s| s.to_string()).collect(),
        base_delay_rate: 0.25,
        trained_at: serde_json::json!("2025-11-30T18:42:10"),
        metrics,
    }
}

/// SBGR → SBRJ, LATAM, Friday afternoon in December
pub fn sample_request() -> FlightRequest {
    FlightRequest {
        origin_airport: "SBGR".to_string(),
        destination_airport: "SBRJ".to_string(),
        carrier: "LATAM".to_string(),
        time_of_day: "Tarde".to_string(),
        departure_hour: 14,
        departure_weekday: 4,
        departure_month: 12,
    }
}
