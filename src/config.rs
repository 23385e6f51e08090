//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Model artifact file
    pub model_path: PathBuf,

    /// Bearer token for operator endpoints; reload is refused when unset
    pub admin_token: Option<String>,

    /// Allowed CORS origin, `*` for any
    pub cors_allow_origin: String,

    /// Log output, `pretty` or `json`
    pub log_format: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            model_path: PathBuf::from("modelo_flight_delay.json"),
            admin_token: None,
            cors_allow_origin: "*".to_string(),
            log_format: "pretty".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),

            admin_token: env::var("ADMIN_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),

            cors_allow_origin: env::var("CORS_ALLOW_ORIGIN")
                .unwrap_or(defaults.cors_allow_origin),

            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
