//! Feature Layout - names the encoder can produce
//!
//! The artifact's `feature_order` decides which of these features the
//! classifier consumes and in which position. Every name has a canonical
//! form and the form written by the training pipeline; both resolve to
//! the same feature.

use crc32fast::Hasher;

use crate::logic::flight::FlightRequest;

// ============================================================================
// TEMPORAL FLAGS
// ============================================================================

/// Weekdays counted as weekend (0 = Monday convention)
pub const WEEKEND_DAYS: [u8; 2] = [5, 6];

/// Months counted as peak season (December, January, July)
pub const PEAK_SEASON_MONTHS: [u8; 3] = [12, 1, 7];

// ============================================================================
// CATEGORIES
// ============================================================================

/// Categorical attributes that carry a risk table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    OriginAirport,
    DestinationAirport,
    Carrier,
    TimeOfDay,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::OriginAirport,
        Category::DestinationAirport,
        Category::Carrier,
        Category::TimeOfDay,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::OriginAirport => "origin_airport",
            Self::DestinationAirport => "destination_airport",
            Self::Carrier => "carrier",
            Self::TimeOfDay => "time_of_day",
        }
    }

    /// Column name used by the training pipeline
    pub fn training_key(self) -> &'static str {
        match self {
            Self::OriginAirport => "aerodromo_origem",
            Self::DestinationAirport => "aerodromo_destino",
            Self::Carrier => "empresa",
            Self::TimeOfDay => "periodo_dia",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == key || c.training_key() == key)
    }

    /// The request's raw value for this category
    pub fn value_of(self, request: &FlightRequest) -> &str {
        match self {
            Self::OriginAirport => &request.origin_airport,
            Self::DestinationAirport => &request.destination_airport,
            Self::Carrier => &request.carrier,
            Self::TimeOfDay => &request.time_of_day,
        }
    }

    fn risk_name(self) -> &'static str {
        match self {
            Self::OriginAirport => "origin_airport_risk",
            Self::DestinationAirport => "destination_airport_risk",
            Self::Carrier => "carrier_risk",
            Self::TimeOfDay => "time_of_day_risk",
        }
    }

    fn training_risk_name(self) -> &'static str {
        match self {
            Self::OriginAirport => "risco_aerodromo_origem",
            Self::DestinationAirport => "risco_aerodromo_destino",
            Self::Carrier => "risco_empresa",
            Self::TimeOfDay => "risco_periodo_dia",
        }
    }
}

// ============================================================================
// FEATURES
// ============================================================================

/// A single column the encoder knows how to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Weekend,
    PeakSeason,
    Risk(Category),
    DepartureHour,
    DepartureWeekday,
    DepartureMonth,
}

impl Feature {
    /// Resolve a feature name from the artifact
    pub fn from_name(name: &str) -> Option<Self> {
        let feature = match name {
            "is_weekend" => Self::Weekend,
            "is_peak_season" | "alta_temporada" => Self::PeakSeason,
            "departure_hour" | "partida_hora" => Self::DepartureHour,
            "departure_weekday" | "partida_dia_semana" => Self::DepartureWeekday,
            "departure_month" | "partida_mes" => Self::DepartureMonth,
            other => {
                return Category::ALL
                    .into_iter()
                    .find(|c| c.risk_name() == other || c.training_risk_name() == other)
                    .map(Self::Risk);
            }
        };
        Some(feature)
    }

    /// Binary flags take values in {0, 1}
    pub fn is_flag(self) -> bool {
        matches!(self, Self::Weekend | Self::PeakSeason)
    }
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 of a feature order, for comparing deployments against training output
pub fn layout_fingerprint(feature_order: &[String]) -> u32 {
    let mut hasher = Hasher::new();
    for name in feature_order {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_resolve_both_vocabularies() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
            assert_eq!(Category::from_key(category.training_key()), Some(category));
        }
        assert_eq!(Category::from_key("gate"), None);
    }

    #[test]
    fn test_feature_names_resolve() {
        assert_eq!(Feature::from_name("is_weekend"), Some(Feature::Weekend));
        assert_eq!(Feature::from_name("alta_temporada"), Some(Feature::PeakSeason));
        assert_eq!(
            Feature::from_name("risco_empresa"),
            Some(Feature::Risk(Category::Carrier))
        );
        assert_eq!(
            Feature::from_name("time_of_day_risk"),
            Some(Feature::Risk(Category::TimeOfDay))
        );
        assert_eq!(Feature::from_name("partida_mes"), Some(Feature::DepartureMonth));
        assert_eq!(Feature::from_name("wind_speed"), None);
    }

    #[test]
    fn test_fingerprint_depends_on_order() {
        let a = vec!["is_weekend".to_string(), "carrier_risk".to_string()];
        let b = vec!["carrier_risk".to_string(), "is_weekend".to_string()];
        assert_eq!(layout_fingerprint(&a), layout_fingerprint(&a.clone()));
        assert_ne!(layout_fingerprint(&a), layout_fingerprint(&b));
    }
}
