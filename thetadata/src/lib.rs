//! thetadata
//!
//! Asynchronous client for the ThetaData terminal's HTTP API.
//!
//! Overview
//! - One pooled session per [`ThetaClient`]; the `option`, `stock`, and
//!   `index` endpoint families hang off it as cheap clones.
//! - Tabular CSV replies decode into typed records from `thetadata-types`;
//!   a row either parses fully or the stream yields a `Parse` error.
//! - Long requests paginate transparently: server-driven `Next-Page` chains
//!   and client-side date windows both feed one lazy [`RecordStream`].
//! - Dropping a stream cancels its in-flight request without disturbing
//!   other requests on the same session.
//!
//! Key behaviors and trade-offs
//! - Requests are validated before dispatch; malformed dates, times, or
//!   prices fail with `InvalidParam` instead of reaching the wire.
//! - Failures are never swallowed: transport errors, non-2xx statuses, and
//!   schema mismatches surface as distinct `ThetaError` variants, including
//!   mid-stream.
//! - The client trusts the terminal for retries and caching; it performs
//!   neither.
//!
//! Example
//! ```rust,ignore
//! use thetadata::{Config, ThetaClient};
//! use thetadata::types::{OptionContract, OptionRight};
//!
//! let client = ThetaClient::connect(Config::default()).await?;
//!
//! let contract = OptionContract::new(
//!     "SPXW",
//!     chrono::NaiveDate::from_ymd_opt(2025, 2, 21).unwrap(),
//!     "6000".parse().unwrap(),
//!     OptionRight::Put,
//! )?;
//!
//! let mut quotes =
//!     client.option().quotes_at_time(&contract, 20250217, 20250221, "10:00:00")?;
//! while let Some(quote) = quotes.next().await {
//!     let quote = quote?;
//!     println!("{} bid {} ask {}", quote.time, quote.bid, quote.ask);
//! }
//! ```
#![warn(missing_docs)]

mod client;
/// Client configuration.
pub mod config;
/// Index endpoint family.
pub mod index;
/// Option endpoint family.
pub mod option;
/// Request parameter values and wire encodings.
pub mod request;
mod response;
/// Stock endpoint family.
pub mod stock;
/// Lazy record streams.
pub mod stream;
/// HTTP transport seam.
pub mod transport;

use std::sync::Arc;

use thetadata_types::ThetaError;

/// Re-export of the shared types crate.
pub use thetadata_types as types;

pub use config::{Config, DEFAULT_BASE_URL};
pub use index::IndexClient;
pub use option::OptionClient;
pub use request::{
    DateParam, DateTimeParam, PriceParam, TimeParam, format_date, format_date_time, format_price,
    format_time,
};
pub use stock::StockClient;
pub use stream::RecordStream;
pub use transport::{HttpTransport, RawResponse, Transport};

use client::RawClient;

/// A session against one ThetaData terminal.
///
/// Cloning is cheap and shares the underlying connection pool. All resources
/// are released when the last clone (and every outstanding stream) is
/// dropped; no explicit close is needed.
#[derive(Clone)]
pub struct ThetaClient {
    raw: RawClient,
}

impl std::fmt::Debug for ThetaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThetaClient").finish_non_exhaustive()
    }
}

impl ThetaClient {
    /// Build a session without touching the network.
    ///
    /// # Errors
    /// `InvalidParam` for an unusable base URL, `Connection` if the
    /// underlying pool cannot be constructed.
    pub fn new(config: Config) -> Result<Self, ThetaError> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Self::with_transport(transport, &config)
    }

    /// Build a session and verify the terminal is reachable with one probe
    /// request.
    ///
    /// # Errors
    /// `Connection` if the host does not answer; any HTTP response, success
    /// or not, counts as reachable.
    pub async fn connect(config: Config) -> Result<Self, ThetaError> {
        let client = Self::new(config)?;
        client.raw.probe().await?;
        Ok(client)
    }

    /// Build a session over a custom [`Transport`].
    ///
    /// This is the seam tests use to inject canned responses; production
    /// code should prefer [`ThetaClient::new`].
    ///
    /// # Errors
    /// `InvalidParam` for an unusable base URL.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        config: &Config,
    ) -> Result<Self, ThetaError> {
        Ok(Self {
            raw: RawClient::new(transport, config)?,
        })
    }

    /// The option endpoint family.
    #[must_use]
    pub fn option(&self) -> OptionClient {
        OptionClient::new(self.raw.clone())
    }

    /// The stock endpoint family.
    #[must_use]
    pub fn stock(&self) -> StockClient {
        StockClient::new(self.raw.clone())
    }

    /// The index endpoint family.
    #[must_use]
    pub fn index(&self) -> IndexClient {
        IndexClient::new(self.raw.clone())
    }
}
