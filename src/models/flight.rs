//! Flight input model

use std::borrow::Cow;

use serde::{de, Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::logic::FlightRequest;

/// `POST /predict` body
///
/// Calendar fields accept JSON integers and integral floats (`14.0`);
/// fractional values are rejected.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FlightInput {
    /// ICAO code of the origin airport, e.g. "SBGR"
    #[validate(custom(function = "not_blank"))]
    pub aerodromo_origem: String,

    /// ICAO code of the destination airport, e.g. "SBRJ"
    #[validate(custom(function = "not_blank"))]
    pub aerodromo_destino: String,

    /// Carrier name, e.g. "LATAM"
    #[validate(custom(function = "not_blank"))]
    pub empresa: String,

    /// Manhã, Tarde, Noite or Madrugada
    #[validate(custom(function = "not_blank"))]
    pub periodo_dia: String,

    #[serde(deserialize_with = "integral")]
    #[validate(range(min = 0, max = 23, message = "departure hour must be between 0 and 23"))]
    pub partida_hora: i64,

    /// 0 = Monday, 6 = Sunday
    #[serde(deserialize_with = "integral")]
    #[validate(range(min = 0, max = 6, message = "departure weekday must be between 0 and 6"))]
    pub partida_dia_semana: i64,

    #[serde(deserialize_with = "integral")]
    #[validate(range(min = 1, max = 12, message = "departure month must be between 1 and 12"))]
    pub partida_mes: i64,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::from("must not be blank")));
    }
    Ok(())
}

/// Integer from a JSON number with no fractional part
fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(de::Error::custom(format!("expected an integer, got {}", value)));
    }
    Ok(value as i64)
}

impl FlightInput {
    /// Convert a validated input into the core request.
    ///
    /// Out-of-range calendar values are clamped; call `validate` first.
    pub fn into_request(self) -> FlightRequest {
        FlightRequest {
            origin_airport: self.aerodromo_origem,
            destination_airport: self.aerodromo_destino,
            carrier: self.empresa,
            time_of_day: self.periodo_dia,
            departure_hour: self.partida_hora.clamp(0, 23) as u8,
            departure_weekday: self.partida_dia_semana.clamp(0, 6) as u8,
            departure_month: self.partida_mes.clamp(1, 12) as u8,
        }
    }
}
