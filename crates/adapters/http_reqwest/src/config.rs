//! Controller connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where and how to reach the terrarium controller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL of the controller (e.g. `http://terrarium.local:8080`).
    pub base_url: String,
    /// Whole-request timeout, in seconds.
    pub timeout_secs: u64,
    /// TCP connect timeout, in seconds.
    pub connect_timeout_secs: u64,
}

impl HttpConfig {
    /// Whole-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// TCP connect timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        }
    }
}
