//! Configuration management for wa-direct.
//!
//! Configuration comes from environment variables (optionally via a `.env`
//! file); command-line flags are layered on top in `main`. Every setting has
//! a default, so an empty environment is a valid configuration.

use crate::domain::Coordinates;
use crate::error::{ConfigError, ConfigResult};
use crate::geolocation::Permission;
use crate::logging::DEFAULT_LOG_LEVEL;
use std::env;

/// Default reverse-geocoding service.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuration for wa-direct.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reverse-geocoding base URL (default: Nominatim)
    pub geocoder_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Whether the user allows the location lookup (default: denied)
    pub geolocation: Permission,

    /// Position used for the lookup, if known
    pub position: Option<Coordinates>,

    /// `accept-language` sent to the geocoder (default: "en")
    pub language: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `WA_DIRECT_GEOCODER_URL`: Reverse-geocoding base URL
    /// - `WA_DIRECT_REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `WA_DIRECT_GEOLOCATION`: `granted` or `denied` (default: denied)
    /// - `WA_DIRECT_LATITUDE` / `WA_DIRECT_LONGITUDE`: position, both or neither
    /// - `WA_DIRECT_LANGUAGE`: Geocoder response language (default: "en")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let geocoder_url =
            env::var("WA_DIRECT_GEOCODER_URL").unwrap_or(defaults.geocoder_url);
        Self::validate_url("WA_DIRECT_GEOCODER_URL", &geocoder_url)?;

        let request_timeout =
            Self::parse_env_u64("WA_DIRECT_REQUEST_TIMEOUT", defaults.request_timeout)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "WA_DIRECT_REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let geolocation = match env::var("WA_DIRECT_GEOLOCATION") {
            Ok(val) => val.parse::<Permission>().map_err(|reason| ConfigError::InvalidValue {
                var: "WA_DIRECT_GEOLOCATION".to_string(),
                reason,
            })?,
            Err(_) => defaults.geolocation,
        };

        let latitude = Self::parse_env_f64("WA_DIRECT_LATITUDE")?;
        let longitude = Self::parse_env_f64("WA_DIRECT_LONGITUDE")?;
        let position = Self::position_from_parts(latitude, longitude)?;

        let language = env::var("WA_DIRECT_LANGUAGE")
            .ok()
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or(defaults.language);

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            geocoder_url,
            request_timeout,
            geolocation,
            position,
            language,
            log_level,
        })
    }

    /// Combine an optional latitude and longitude into a position.
    ///
    /// Both or neither must be present, and the pair must be in range.
    pub fn position_from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> ConfigResult<Option<Coordinates>> {
        match (latitude, longitude) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(ConfigError::IncompletePosition {
                present: "WA_DIRECT_LATITUDE",
                missing: "WA_DIRECT_LONGITUDE",
            }),
            (None, Some(_)) => Err(ConfigError::IncompletePosition {
                present: "WA_DIRECT_LONGITUDE",
                missing: "WA_DIRECT_LATITUDE",
            }),
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon).map(Some).ok_or_else(|| {
                ConfigError::InvalidValue {
                    var: "WA_DIRECT_LATITUDE/WA_DIRECT_LONGITUDE".to_string(),
                    reason: format!("({}, {}) is not a valid position", lat, lon),
                }
            }),
        }
    }

    fn validate_url(var_name: &str, url: &str) -> ConfigResult<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an optional environment variable as f64.
    fn parse_env_f64(var_name: &str) -> ConfigResult<Option<f64>> {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a decimal number, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            request_timeout: 10,
            geolocation: Permission::Denied,
            position: None,
            language: "en".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
