//! Flight request - the per-request input of the prediction pipeline

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Attributes of a single flight to score.
///
/// Categorical fields are free-form; values the model never saw during
/// training are valid and fall back to the base delay rate when encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRequest {
    pub origin_airport: String,
    pub destination_airport: String,
    pub carrier: String,
    pub time_of_day: String,
    /// 0-23
    pub departure_hour: u8,
    /// 0 = Monday ... 6 = Sunday
    pub departure_weekday: u8,
    /// 1-12
    pub departure_month: u8,
}

impl FlightRequest {
    /// Build a request from a scheduled departure, deriving the calendar
    /// fields and the time-of-day bucket from the timestamp.
    pub fn from_departure(
        origin_airport: impl Into<String>,
        destination_airport: impl Into<String>,
        carrier: impl Into<String>,
        departure: NaiveDateTime,
    ) -> Self {
        let hour = departure.hour() as u8;
        Self {
            origin_airport: origin_airport.into(),
            destination_airport: destination_airport.into(),
            carrier: carrier.into(),
            time_of_day: time_of_day_bucket(hour).to_string(),
            departure_hour: hour,
            departure_weekday: departure.weekday().num_days_from_monday() as u8,
            departure_month: departure.month() as u8,
        }
    }
}

/// Time-of-day bucket for a departure hour, using the training vocabulary.
pub fn time_of_day_bucket(hour: u8) -> &'static str {
    match hour {
        0..=5 => "Madrugada",
        6..=11 => "Manhã",
        12..=17 => "Tarde",
        _ => "Noite",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(time_of_day_bucket(0), "Madrugada");
        assert_eq!(time_of_day_bucket(5), "Madrugada");
        assert_eq!(time_of_day_bucket(6), "Manhã");
        assert_eq!(time_of_day_bucket(11), "Manhã");
        assert_eq!(time_of_day_bucket(12), "Tarde");
        assert_eq!(time_of_day_bucket(17), "Tarde");
        assert_eq!(time_of_day_bucket(18), "Noite");
        assert_eq!(time_of_day_bucket(23), "Noite");
    }

    #[test]
    fn test_from_departure_uses_monday_zero() {
        // 2025-12-25 is a Thursday
        let departure = NaiveDate::from_ymd_opt(2025, 12, 25)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();

        let request = FlightRequest::from_departure("SBGR", "SBRJ", "LATAM", departure);

        assert_eq!(request.departure_hour, 14);
        assert_eq!(request.departure_weekday, 3);
        assert_eq!(request.departure_month, 12);
        assert_eq!(request.time_of_day, "Tarde");
        assert_eq!(request.carrier, "LATAM");
    }

    #[test]
    fn test_from_departure_sunday() {
        let departure = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(3, 0, 0)
            .unwrap();

        let request = FlightRequest::from_departure("SBGR", "SBRJ", "GOL", departure);

        assert_eq!(request.departure_weekday, 6);
        assert_eq!(request.time_of_day, "Madrugada");
    }
}
