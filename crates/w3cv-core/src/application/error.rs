//! Application layer errors.
//!
//! A transport failure ends one target, never the batch, so it is carried
//! in the target's outcome rather than propagated as a `W3cvError`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the HTTP exchange itself, as opposed to a response that could
/// not be interpreted. Never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The local document could not be read for upload.
    #[error("cannot read {path}: {reason}")]
    Upload { path: PathBuf, reason: String },

    /// Connection, TLS, timeout or body read failure. HTTP error statuses
    /// are not transport failures: their bodies go on to interpretation.
    #[error("request to {endpoint} failed: {reason}")]
    Request { endpoint: String, reason: String },
}

impl TransportError {
    /// Hint shown next to the cause in debug logs.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Upload { .. } => "check that the file exists and is readable",
            Self::Request { .. } => {
                "check the network, or point the endpoint at a local validator"
            }
        }
    }
}
