//! Decision Formatter - probability → label, rounded score, confidence text
//!
//! Rounding is half away from zero on the scaled binary value
//! (`f64::round`): 0.03125 → 0.0313 at four decimals, 0.0625 → "6.3%".
//! The confidence text is computed from the unrounded probability.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Probabilities strictly above this are labelled delayed
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Decimal places kept in the reported probability
pub const PROBABILITY_DECIMALS: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DelayLabel {
    #[serde(rename = "Pontual")]
    OnTime,
    #[serde(rename = "Atrasado")]
    Delayed,
}

impl DelayLabel {
    pub fn from_probability(probability: f64) -> Self {
        if probability > DECISION_THRESHOLD {
            Self::Delayed
        } else {
            Self::OnTime
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTime => "Pontual",
            Self::Delayed => "Atrasado",
        }
    }
}

/// Coarse delay-risk band.
///
/// The labels are the backend's vocabulary; the cut-points at each fifth
/// of the probability range are set here, the backend defines none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "Muito baixa")]
    VeryLow,
    #[serde(rename = "Baixa")]
    Low,
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Muito alta")]
    VeryHigh,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        match probability {
            p if p < 0.2 => Self::VeryLow,
            p if p < 0.4 => Self::Low,
            p if p < 0.6 => Self::Medium,
            p if p < 0.8 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "Muito baixa",
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta",
            Self::VeryHigh => "Muito alta",
        }
    }
}

/// Final outcome of one prediction
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: DelayLabel,
    /// Rounded to four decimals
    pub probability: f64,
    /// Percentage with one decimal, e.g. "82.3%"
    pub confidence_text: String,
    pub risk_level: RiskLevel,
    pub timestamp: DateTime<Utc>,
}

/// Render a raw probability. `now` is the caller's clock reading.
pub fn format_prediction(probability: f64, now: DateTime<Utc>) -> PredictionResult {
    PredictionResult {
        label: DelayLabel::from_probability(probability),
        probability: round_to(probability, PROBABILITY_DECIMALS),
        confidence_text: confidence_text(probability),
        risk_level: RiskLevel::from_probability(probability),
        timestamp: now,
    }
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn confidence_text(probability: f64) -> String {
    format!("{:.1}%", round_to(probability * 100.0, 1))
}
