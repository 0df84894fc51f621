//! Error types for wa-direct.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! User-facing validation errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur when calling the reverse-geocoding service.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Service returned a non-success status code
    #[error("Geocoder error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Response did not carry `address.country_code`
    #[error("Response has no country code")]
    MissingCountryCode,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Only one half of a coordinate pair was provided
    #[error("{present} is set but {missing} is not")]
    IncompletePosition {
        present: &'static str,
        missing: &'static str,
    },
}

/// Errors that can occur when handing a link to the host environment.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The launcher process could not be started
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The launcher exited unsuccessfully
    #[error("{program} exited with status {status}")]
    Failed { program: String, status: String },

    /// Writing the link to the terminal failed
    #[error("Failed to write link: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenience type alias for Results with GeocodeError
pub type GeocodeResult<T> = Result<T, GeocodeError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with LaunchError
pub type LaunchResult<T> = Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeocodeError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");

        let err = ConfigError::IncompletePosition {
            present: "WA_DIRECT_LATITUDE",
            missing: "WA_DIRECT_LONGITUDE",
        };
        assert_eq!(
            err.to_string(),
            "WA_DIRECT_LATITUDE is set but WA_DIRECT_LONGITUDE is not"
        );

        let err = LaunchError::Failed {
            program: "xdg-open".to_string(),
            status: "exit status: 3".to_string(),
        };
        assert_eq!(err.to_string(), "xdg-open exited with status exit status: 3");
    }

    #[test]
    fn test_status_error_variant() {
        let err = GeocodeError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service Unavailable"));
    }
}
