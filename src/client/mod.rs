//! HTTP client for the reverse-geocoding service.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. It speaks the Nominatim `/reverse` API and maps
//! transport and status failures onto [`GeocodeError`].

mod async_wrapper;
pub use async_wrapper::{AsyncGeocoder, AsyncGeocoderImpl};

use crate::config::Config;
use crate::domain::Coordinates;
use crate::error::{GeocodeError, GeocodeResult};
use crate::metrics::{HttpTimer, Metrics};
use serde::Deserialize;
use std::error::Error as _;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Sent with every request; Nominatim rejects anonymous clients.
const USER_AGENT: &str = concat!("wa-direct/", env!("CARGO_PKG_VERSION"));

/// Response body of `GET /reverse?format=json`.
///
/// Only the fields used here are modelled; everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
    /// Human-readable place name
    #[serde(default)]
    pub display_name: Option<String>,

    /// Structured address, absent when nothing was found
    #[serde(default)]
    pub address: Option<Address>,

    /// Set by Nominatim instead of `address` when geocoding fails
    #[serde(default)]
    pub error: Option<String>,
}

/// Address block of a reverse-geocoding response.
#[derive(Debug, Deserialize)]
pub struct Address {
    /// ISO 3166-1 alpha-2 code, usually lower case
    #[serde(default)]
    pub country_code: Option<String>,

    #[serde(default)]
    pub country: Option<String>,
}

impl ReverseResponse {
    /// The country code, upper-cased, if the response has a non-empty one.
    pub fn country_code(&self) -> Option<String> {
        self.address
            .as_ref()?
            .country_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_ascii_uppercase)
    }
}

/// HTTP client for the reverse-geocoding service.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct GeocodingClient {
    /// Base URL of the service
    base_url: String,

    /// Value of the `accept-language` query parameter
    language: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl GeocodingClient {
    /// Create a new GeocodingClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.geocoder_url.clone(),
            config.language.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a GeocodingClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::with_base_url_and_timeout(base_url, Duration::from_secs(10))
    }

    /// Create a GeocodingClient with a custom base URL and request timeout.
    #[doc(hidden)]
    pub fn with_base_url_and_timeout(base_url: String, timeout: Duration) -> Self {
        Self::build(base_url, "en".to_string(), timeout)
    }

    fn build(base_url: String, language: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();

        Self {
            base_url,
            language,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the `/reverse` URL for a position.
    fn reverse_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/reverse?format=json&lat={}&lon={}&accept-language={}",
            self.base_url.trim_end_matches('/'),
            coordinates.latitude(),
            coordinates.longitude(),
            urlencoding::encode(&self.language)
        )
    }

    /// Reverse-geocode a position.
    pub fn reverse(&self, coordinates: Coordinates) -> GeocodeResult<ReverseResponse> {
        let url = self.reverse_url(coordinates);
        tracing::debug!("GET {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let response = match self.agent.get(&url).call() {
            Ok(response) => {
                timer.complete();
                response
            }
            Err(e) => {
                timer.complete_with_error();
                let err = Self::map_error(e);
                tracing::debug!("GET {} - Error: {:?}", url, err);
                return Err(err);
            }
        };

        let body = response
            .into_string()
            .map_err(|e| GeocodeError::HttpError(e.to_string()))?;

        let parsed: ReverseResponse =
            serde_json::from_str(&body).map_err(GeocodeError::JsonError)?;

        if let Some(reason) = &parsed.error {
            tracing::debug!("Geocoder reported: {}", reason);
        }

        Ok(parsed)
    }

    /// Resolve a position to an upper-case ISO alpha-2 country code.
    pub fn country_code(&self, coordinates: Coordinates) -> GeocodeResult<String> {
        let code = self
            .reverse(coordinates)?
            .country_code()
            .ok_or(GeocodeError::MissingCountryCode)?;

        self.metrics.record_country_resolved();
        Ok(code)
    }

    /// Map a ureq error to a GeocodeError.
    fn map_error(error: ureq::Error) -> GeocodeError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    429 => GeocodeError::RateLimitExceeded,
                    _ => GeocodeError::Status {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    GeocodeError::HttpError("Connection failed".to_string())
                } else if Self::is_timeout(&transport) {
                    GeocodeError::Timeout
                } else {
                    GeocodeError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Whether a transport error was caused by the request timing out.
    fn is_timeout(transport: &ureq::Transport) -> bool {
        transport.kind() == ureq::ErrorKind::Io
            && transport
                .source()
                .and_then(|source| source.downcast_ref::<io::Error>())
                .is_some_and(|e| {
                    matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
                })
    }
}
