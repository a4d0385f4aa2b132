use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pinned p5.js build fetched when the page did not load one itself.
pub const DEFAULT_LIBRARY_URL: &str = "https://cdn.jsdelivr.net/npm/p5@1.11.3/lib/p5.min.js";

pub const DEFAULT_LOAD_TIMEOUT_MS: u32 = 30_000;

/// How to acquire p5.js when it is not already on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub url: String,
    /// `None` waits for the script indefinitely.
    pub timeout_ms: Option<u32>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_LIBRARY_URL.to_string(),
            timeout_ms: Some(DEFAULT_LOAD_TIMEOUT_MS),
        }
    }
}

impl LoadConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Rounds up to whole milliseconds, so a non-zero timeout never becomes 0.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout_ms = timeout.map(|d| d.as_nanos().div_ceil(1_000_000).min(u32::MAX as u128) as u32);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(|ms| Duration::from_millis(ms as u64))
    }
}
