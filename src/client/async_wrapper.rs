//! Async wrapper around the synchronous GeocodingClient.
//!
//! This module provides an async interface to the synchronous client by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::GeocodingClient;
use crate::domain::Coordinates;
use crate::error::{GeocodeError, GeocodeResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async reverse-geocoding operations.
#[async_trait]
pub trait AsyncGeocoder: Send + Sync {
    /// Resolve a position to an upper-case ISO alpha-2 country code.
    async fn country_code(&self, coordinates: Coordinates) -> GeocodeResult<String>;
}

/// Async wrapper around synchronous GeocodingClient.
#[derive(Clone)]
pub struct AsyncGeocoderImpl {
    client: Arc<GeocodingClient>,
}

impl AsyncGeocoderImpl {
    pub fn new(client: GeocodingClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped synchronous client.
    pub fn client(&self) -> &GeocodingClient {
        &self.client
    }
}

#[async_trait]
impl AsyncGeocoder for AsyncGeocoderImpl {
    async fn country_code(&self, coordinates: Coordinates) -> GeocodeResult<String> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.country_code(coordinates))
            .await
            .map_err(|e| GeocodeError::HttpError(format!("Task join error: {}", e)))?
    }
}
