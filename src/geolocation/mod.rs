//! Host geolocation capability.
//!
//! A [`PositionProvider`] is asked for the current position exactly once. It
//! either yields [`Coordinates`] or a [`PositionError`] carrying a code and a
//! message, mirroring the success and error callbacks of a platform
//! geolocation API.

use crate::domain::Coordinates;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::str::FromStr;

/// Whether the user allows their position to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "granted" | "allow" | "yes" | "true" | "1" => Ok(Self::Granted),
            "denied" | "deny" | "no" | "false" | "0" => Ok(Self::Denied),
            other => Err(format!("Expected 'granted' or 'denied', got: {}", other)),
        }
    }
}

/// Why a position could not be obtained.
///
/// Numeric values follow the W3C geolocation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionErrorCode {
    PermissionDenied = 1,
    PositionUnavailable = 2,
    Timeout = 3,
}

/// Failure reported by a [`PositionProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionError {
    pub code: PositionErrorCode,
    pub message: String,
}

impl PositionError {
    pub fn new(code: PositionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Geolocation error ({}): {}", self.code as u8, self.message)
    }
}

impl std::error::Error for PositionError {}

/// Source of the device's current position.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    /// Request the current position once, asking for permission if needed.
    async fn current_position(&self) -> Result<Coordinates, PositionError>;
}

/// Position provider backed by configuration.
///
/// The terminal has no location sensor, so the position and the user's
/// consent both come from settings.
#[derive(Debug, Clone)]
pub struct ConfiguredPosition {
    permission: Permission,
    position: Option<Coordinates>,
}

impl ConfiguredPosition {
    pub fn new(permission: Permission, position: Option<Coordinates>) -> Self {
        Self {
            permission,
            position,
        }
    }
}

#[async_trait]
impl PositionProvider for ConfiguredPosition {
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        if self.permission == Permission::Denied {
            return Err(PositionError::new(
                PositionErrorCode::PermissionDenied,
                "User denied Geolocation",
            ));
        }

        self.position.ok_or_else(|| {
            PositionError::new(
                PositionErrorCode::PositionUnavailable,
                "No position configured",
            )
        })
    }
}

/// The provider to hand to the suggester, if the lookup is allowed at all.
///
/// A denied permission yields no provider, so nothing is requested and no
/// denial is reported for a question the user was never asked.
pub fn provider_for(
    permission: Permission,
    position: Option<Coordinates>,
) -> Option<Arc<dyn PositionProvider>> {
    match permission {
        Permission::Granted => Some(
            Arc::new(ConfiguredPosition::new(permission, position)) as Arc<dyn PositionProvider>
        ),
        Permission::Denied => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_from_str() {
        assert_eq!("granted".parse::<Permission>(), Ok(Permission::Granted));
        assert_eq!(" Denied ".parse::<Permission>(), Ok(Permission::Denied));
        assert!("sometimes".parse::<Permission>().is_err());
    }

    #[test]
    fn test_position_error_display() {
        let err = PositionError::new(PositionErrorCode::Timeout, "Timeout expired");
        assert_eq!(err.to_string(), "Geolocation error (3): Timeout expired");
    }

    #[tokio::test]
    async fn test_configured_position_denied() {
        let provider = ConfiguredPosition::new(Permission::Denied, Coordinates::new(1.0, 2.0));
        let err = provider.current_position().await.unwrap_err();
        assert_eq!(err.code, PositionErrorCode::PermissionDenied);
    }

    #[tokio::test]
    async fn test_configured_position_unavailable() {
        let provider = ConfiguredPosition::new(Permission::Granted, None);
        let err = provider.current_position().await.unwrap_err();
        assert_eq!(err.code, PositionErrorCode::PositionUnavailable);
    }

    #[test]
    fn test_no_provider_when_denied() {
        assert!(provider_for(Permission::Denied, Coordinates::new(1.0, 2.0)).is_none());
        assert!(provider_for(Permission::Granted, None).is_some());
    }

    #[tokio::test]
    async fn test_configured_position_granted() {
        let paris = Coordinates::new(48.8566, 2.3522);
        let provider = ConfiguredPosition::new(Permission::Granted, paris);
        assert_eq!(provider.current_position().await.ok(), paris);
    }
}
