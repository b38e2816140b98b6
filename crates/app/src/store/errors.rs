//! Row-store errors.

use thiserror::Error;

/// Failures raised by the row-store client.
///
/// Classification happens here, once, at the client boundary: transport
/// failures (DNS, connect, timeout) become [`RowStoreError::Unavailable`],
/// non-2xx responses become [`RowStoreError::Rejected`], and everything the
/// caller can inspect is carried as structured data rather than message
/// text.
#[derive(Debug, Error)]
pub enum RowStoreError {
    /// The endpoint URL or API key is missing.
    #[error("row store credentials are not configured")]
    NotConfigured,

    /// The remote service could not be reached. Retryable by the caller.
    #[error("row store unreachable")]
    Unavailable(#[source] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("row store rejected the request with status {status}")]
    Rejected {
        status: u16,
        message: String,
    },

    /// A row body could not be encoded or decoded.
    #[error("malformed row payload")]
    Decode(#[from] serde_json::Error),
}
