//! Error type for the provider boundary.
//!
//! There is exactly one error kind at the store boundary: a fetch
//! failed, with a human-readable message. The variants below exist so
//! transport and decode failures keep their sources for logging; the
//! store only ever looks at the `Display` output.

use thiserror::Error;

/// Failure of a single fetch. Terminal for that intent handling only;
/// dispatching the load intent again starts fresh.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {code}")]
    Status { code: u16 },

    /// The response body was not a well-formed post array.
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Provider-specific failure with no richer source (used by
    /// non-HTTP providers such as test fakes).
    #[error("{0}")]
    Unavailable(String),
}
