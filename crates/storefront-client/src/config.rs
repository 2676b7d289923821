//! Store configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://storerestservice.azurewebsites.net/api/products/".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Configuration for [`ProductStore`](crate::ProductStore).
///
/// All fields have defaults, so `StoreConfig::default()` points at the public
/// demo catalog with a page size of 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the catalog endpoint. A trailing slash is appended when
    /// missing.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of products requested per page when no explicit size is given.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Artificial delay applied to insert results, in milliseconds.
    ///
    /// Off by default. The original front end delayed insert delivery by two
    /// seconds to demo UI latency feedback; enable this only for that purpose.
    #[serde(default)]
    pub insert_delay_ms: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
            insert_delay_ms: None,
        }
    }
}

impl StoreConfig {
    /// Sets the catalog base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the default page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_secs = timeout.as_secs();
        self
    }

    /// Enables the artificial insert delay.
    #[must_use]
    pub fn with_insert_delay(mut self, delay: Duration) -> Self {
        self.insert_delay_ms = Some(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the artificial insert delay, if enabled.
    #[must_use]
    pub fn insert_delay(&self) -> Option<Duration> {
        self.insert_delay_ms.map(Duration::from_millis)
    }
}
