use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wa_direct::geolocation::{PositionError, PositionErrorCode};
use wa_direct::{Coordinates, PositionProvider};

/// Position provider returning a fixed result and counting requests.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockPositionProvider {
    result: Result<Coordinates, PositionError>,
    requests: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockPositionProvider {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            result: Coordinates::new(latitude, longitude).ok_or_else(|| {
                PositionError::new(PositionErrorCode::PositionUnavailable, "bad fixture")
            }),
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(code: PositionErrorCode, message: &str) -> Self {
        Self {
            result: Err(PositionError::new(code, message)),
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PositionProvider for MockPositionProvider {
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
