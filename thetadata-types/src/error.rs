use thiserror::Error;

/// Unified error type for the thetadata workspace.
///
/// Transport failures, HTTP-level rejections, payload schema mismatches, and
/// request-parameter validation problems all surface through this one enum so
/// callers can match on the failure class without digging through source
/// chains.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ThetaError {
    /// Transport-level failure: the terminal is unreachable or the connection
    /// broke before a response arrived.
    #[error("connection failed: {message}")]
    Connection {
        /// Human-readable description of the transport failure.
        message: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("ThetaData returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Response body text, preserved for diagnostics.
        body: String,
    },

    /// The payload did not match the expected tabular schema.
    #[error("malformed response: {message}")]
    Parse {
        /// Description of the offending row, column, or value.
        message: String,
    },

    /// No response arrived within the configured deadline.
    #[error("request timed out")]
    Timeout,

    /// A request parameter failed validation before dispatch.
    #[error("invalid parameter: {message}")]
    InvalidParam {
        /// Description of the rejected value.
        message: String,
    },

    /// An operation that promises exactly one record got an empty reply.
    #[error("no data: {what}")]
    NoData {
        /// Description of the missing record, e.g. "eod report for AAPL".
        what: String,
    },
}

impl ThetaError {
    /// Helper: build a `Connection` error from any displayable cause.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper: build a `Status` error preserving the response body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Helper: build a `Parse` error for a schema mismatch.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Helper: build an `InvalidParam` error for a rejected input value.
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::InvalidParam {
            message: message.into(),
        }
    }

    /// Helper: build a `NoData` error for an empty single-record reply.
    pub fn no_data(what: impl Into<String>) -> Self {
        Self::NoData { what: what.into() }
    }

    /// Returns true when retrying the same request later could succeed.
    ///
    /// Parse and parameter errors are deterministic; transport failures and
    /// timeouts are not.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout)
    }
}
