// ── Connector error taxonomy ─────────────────────────────────────────────────
//
// Four error classes cover everything a connector call can hit; all of them
// are folded into a single structured `{title, message}` payload at the
// operation boundary. Nothing is retried.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Internal error classes, raised inside connector code and propagated
/// with `?` up to the operation boundary.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Unusable stored configuration (e.g. unparseable port). Raised before
    /// any network activity.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Base folder and relative path both blank; raised before any network
    /// activity.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// TCP, handshake, host-key, or authentication failure during session
    /// setup.
    #[error("connection error: {0}")]
    Connection(String),

    /// Failure while opening the SFTP channel or performing the single
    /// get/put, including a missing remote file or a broken stream.
    #[error("transfer error: {0}")]
    Transfer(String),
}

impl ConnectorError {
    /// The underlying message, without the class prefix `Display` adds.
    pub fn message(&self) -> &str {
        match self {
            ConnectorError::Configuration(m)
            | ConnectorError::InvalidPath(m)
            | ConnectorError::Connection(m)
            | ConnectorError::Transfer(m) => m,
        }
    }

    /// Fold into the structured payload surfaced to the host, keeping the
    /// underlying message verbatim.
    pub fn into_integration(self, title: &str) -> IntegrationError {
        IntegrationError {
            title: title.to_string(),
            message: self.message().to_string(),
        }
    }
}

/// The error shape handed back to the host platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationError {
    pub title: String,
    pub message: String,
}

impl std::fmt::Display for IntegrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
