//! Client construction errors.
//!
//! Only building a caller can fail. Once built, every request outcome is an
//! envelope.

use thiserror::Error;

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not an absolute http(s) URL.
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be built.
    #[error("http client: {0}")]
    Build(#[from] reqwest::Error),
}
