//! Client configuration.

use std::time::Duration;

/// Default terminal endpoint on the local machine.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:25510/";

/// Configuration for a [`ThetaClient`](crate::ThetaClient) session.
///
/// The defaults target a ThetaData terminal running locally with its stock
/// port settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the terminal's HTTP listener.
    pub base_url: String,
    /// Deadline for a single request/response round trip.
    pub timeout: Duration,
    /// Deadline for establishing a new connection.
    pub connect_timeout: Duration,
    /// Capacity of the per-stream record buffer between the paging task and
    /// the consumer.
    pub page_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            page_buffer: 256,
        }
    }
}

impl Config {
    /// Override the terminal base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the connect deadline.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the per-stream record buffer capacity.
    #[must_use]
    pub const fn with_page_buffer(mut self, capacity: usize) -> Self {
        self.page_buffer = capacity;
        self
    }
}
