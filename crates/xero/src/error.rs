//! Xero client error types.

use thiserror::Error;

/// Errors from the Xero REST client.
///
/// Non-transport variants carry the raw response body for diagnostics;
/// Xero's error payloads are often the only clue to what went wrong.
#[derive(Debug, Error)]
pub enum XeroError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the Xero API.
    #[error("Xero API returned status {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Response body could not be decoded as a report.
    #[error("Failed to decode Xero response: {source}")]
    Decode {
        /// Underlying decode error.
        source: serde_json::Error,
        /// Raw response body.
        body: String,
    },

    /// Response decoded but contained no report.
    #[error("Xero response contained no report")]
    EmptyResponse {
        /// Raw response body.
        body: String,
    },
}
