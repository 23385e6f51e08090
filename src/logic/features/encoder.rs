//! Feature Encoder - FlightRequest → ordered numeric vector
//!
//! Produces exactly one value per entry of the bundle's feature order.
//! Categorical attributes are target-encoded through the risk tables and
//! fall back to the base delay rate for values unseen at training time.

use super::layout::{Category, Feature, PEAK_SEASON_MONTHS, WEEKEND_DAYS};
use crate::logic::flight::FlightRequest;
use crate::logic::model::ModelBundle;
use crate::logic::CoreError;

/// Encoded features, positioned by the bundle's feature order
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// Encode a request against a loaded bundle.
///
/// Fails only when the feature order names a column the encoder cannot
/// produce; that is an artifact/encoder pairing defect, not bad input.
pub fn encode(request: &FlightRequest, bundle: &ModelBundle) -> Result<FeatureVector, CoreError> {
    let values = bundle
        .feature_order
        .iter()
        .map(|name| {
            Feature::from_name(name)
                .map(|feature| feature_value(feature, request, bundle))
                .ok_or_else(|| CoreError::FeatureMismatch {
                    feature: name.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureVector::new(values))
}

pub fn is_weekend(weekday: u8) -> bool {
    WEEKEND_DAYS.contains(&weekday)
}

pub fn is_peak_season(month: u8) -> bool {
    PEAK_SEASON_MONTHS.contains(&month)
}

/// Risk score for one categorical attribute of the request
pub fn risk_score(category: Category, request: &FlightRequest, bundle: &ModelBundle) -> f64 {
    bundle
        .risk_tables
        .rate(category, category.value_of(request))
        .unwrap_or(bundle.base_delay_rate)
}

fn feature_value(feature: Feature, request: &FlightRequest, bundle: &ModelBundle) -> f64 {
    match feature {
        Feature::Weekend => flag(is_weekend(request.departure_weekday)),
        Feature::PeakSeason => flag(is_peak_season(request.departure_month)),
        Feature::Risk(category) => risk_score(category, request, bundle),
        Feature::DepartureHour => f64::from(request.departure_hour),
        Feature::DepartureWeekday => f64::from(request.departure_weekday),
        Feature::DepartureMonth => f64::from(request.departure_month),
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
