//! Logistic regression classifier

use serde::{Deserialize, Serialize};

use super::classifier::{check_width, InferenceError, ProbabilityEstimator};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("logistic regression has no coefficients".to_string());
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("logistic regression has non-finite weights".to_string());
        }
        Ok(())
    }
}

impl ProbabilityEstimator for LogisticRegression {
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        check_width(self.coefficients.len(), features)?;

        let z: f64 = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>();
        if !z.is_finite() {
            return Err(InferenceError("numeric overflow in decision function".to_string()));
        }

        let p = 1.0 / (1.0 + (-z).exp());
        Ok(vec![1.0 - p, p])
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }

    fn kind(&self) -> &'static str {
        "logistic_regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_margin_is_half() {
        let model = LogisticRegression { coefficients: vec![1.0, -1.0], intercept: 0.0 };
        let proba = model.predict_proba(&[0.3, 0.3]).unwrap();
        assert!((proba[1] - 0.5).abs() < 1e-12);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_positive_margin_leans_delayed() {
        let model = LogisticRegression { coefficients: vec![4.0], intercept: -1.0 };
        let proba = model.predict_proba(&[1.0]).unwrap();
        assert!(proba[1] > 0.9);
    }

    #[test]
    fn test_overflow_is_reported() {
        let model = LogisticRegression { coefficients: vec![f64::MAX, f64::MAX], intercept: 0.0 };
        assert!(model.predict_proba(&[f64::MAX, f64::MAX]).is_err());
    }
}
