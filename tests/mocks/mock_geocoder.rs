use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wa_direct::error::{GeocodeError, GeocodeResult};
use wa_direct::{AsyncGeocoder, Coordinates};

/// Mock reverse geocoder for testing.
///
/// Replies are queued up front and handed out in order; an empty queue
/// answers with a connection failure. Every call is recorded.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockGeocoder {
    replies: Arc<Mutex<VecDeque<GeocodeResult<String>>>>,
    calls: Arc<Mutex<Vec<Coordinates>>>,
}

#[allow(dead_code)]
impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geocoder that resolves every lookup to `code`.
    pub fn resolving(code: &str) -> Self {
        let mock = Self::new();
        mock.push_reply(Ok(code.to_string()));
        mock
    }

    /// Geocoder that fails with the given error.
    pub fn failing(error: GeocodeError) -> Self {
        let mock = Self::new();
        mock.push_reply(Err(error));
        mock
    }

    pub fn push_reply(&self, reply: GeocodeResult<String>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Coordinates> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AsyncGeocoder for MockGeocoder {
    async fn country_code(&self, coordinates: Coordinates) -> GeocodeResult<String> {
        self.calls.lock().unwrap().push(coordinates);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GeocodeError::HttpError("Connection failed".to_string())))
    }
}
