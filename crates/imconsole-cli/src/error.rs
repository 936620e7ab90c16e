//! CLI errors.

use imconsole_client::ClientError;
use thiserror::Error;

/// Why a command did not complete.
#[derive(Debug, Error)]
pub enum CliError {
    /// The caller could not be built.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The backend reported a failure. Already toasted to the log.
    #[error("{0}")]
    Failed(String),

    /// A destructive command was not confirmed with its phrase.
    #[error("type the confirmation phrase with --confirm {0}")]
    ConfirmationRequired(&'static str),

    /// Writing output failed.
    #[error("output: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding output failed.
    #[error("output: {0}")]
    Json(#[from] serde_json::Error),
}
