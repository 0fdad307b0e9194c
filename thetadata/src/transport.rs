//! HTTP transport seam.
//!
//! The endpoint clients talk to the terminal through the [`Transport`] trait
//! so tests can inject canned responses; production code uses the
//! reqwest-backed [`HttpTransport`], which owns the connection pool.

use async_trait::async_trait;

use thetadata_types::ThetaError;

use crate::config::Config;

/// Pagination header set by the service; the literal value `null` means the
/// current page is the last one.
pub(crate) const NEXT_PAGE_HEADER: &str = "Next-Page";

/// One decoded HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Absolute URL of the next page, if the service signalled one.
    pub next_page: Option<String>,
    /// Response body text.
    pub body: String,
}

/// Minimal GET-only transport over the terminal's HTTP listener.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one GET request and return the decoded exchange.
    ///
    /// # Errors
    /// `Connection` for transport-level failures, `Timeout` when the
    /// configured deadline elapses. Non-2xx statuses are NOT errors at this
    /// layer; callers decide how to surface them.
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse, ThetaError>;
}

/// Production transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build the connection pool from `config`.
    ///
    /// # Errors
    /// `Connection` if the underlying TLS/client setup fails.
    pub fn new(config: &Config) -> Result<Self, ThetaError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ThetaError::connection(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse, ThetaError> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(map_transport_err)?;
        let status = response.status().as_u16();
        let next_page = response
            .headers()
            .get(NEXT_PAGE_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| *v != "null")
            .map(String::from);
        let body = response.text().await.map_err(map_transport_err)?;

        tracing::debug!(url, status, next_page = next_page.is_some(), "terminal GET");

        Ok(RawResponse {
            status,
            next_page,
            body,
        })
    }
}

fn map_transport_err(e: reqwest::Error) -> ThetaError {
    if e.is_timeout() {
        ThetaError::Timeout
    } else {
        ThetaError::connection(e.to_string())
    }
}
