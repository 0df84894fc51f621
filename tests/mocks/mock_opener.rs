use std::sync::{Arc, Mutex};
use wa_direct::error::{LaunchError, LaunchResult};
use wa_direct::LinkOpener;

/// Link opener that records URLs instead of launching anything.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
    fail: bool,
    prints: bool,
}

#[allow(dead_code)]
impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opener whose launches always fail (URLs are still recorded).
    pub fn broken() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Opener that shows the link itself, like `--dry-run`.
    pub fn printing() -> Self {
        Self {
            prints: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> LaunchResult<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(LaunchError::Failed {
                program: "mock".to_string(),
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }

    fn prints_link(&self) -> bool {
        self.prints
    }
}
