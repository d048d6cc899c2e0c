// ── Types ────────────────────────────────────────────────────────────────────

use appdock_core::diagnostics::IntegrationDiagnostic;
use appdock_core::document::{DocumentId, FolderId, StoredDocument};
use appdock_core::error::ConnectorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

fn default_port() -> u16 {
    22
}

// ── Connection ───────────────────────────────────────────────────────────────

/// Resolved, ready-to-use connection parameters. Built once per call from
/// `ConnectedSystemValues`, never mutated, discarded at call end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub base_folder: Option<String>,
    #[serde(default)]
    pub host_key_policy: HostKeyPolicy,
}

impl ConnectionConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// How the server's host key is checked after the handshake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum HostKeyPolicy {
    /// Trust whatever key the server presents (`StrictHostKeyChecking=no`
    /// equivalent). Logged as insecure on every connect.
    #[default]
    AcceptAny,
    /// SHA-256 fingerprint of the expected host key, hex-encoded.
    PinnedFingerprint(String),
    /// OpenSSH `known_hosts` file to check the presented key against.
    KnownHostsFile(PathBuf),
}

// ── Host configuration surface ───────────────────────────────────────────────

/// The raw stored configuration as the host hands it over. The port arrives
/// as free text from the configuration form and is parsed at resolve time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedSystemValues {
    pub host_name: String,
    pub port: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub base_folder: Option<String>,
    #[serde(default)]
    pub host_key_policy: HostKeyPolicy,
}

impl ConnectedSystemValues {
    /// Validate presence and parse the port. Fails fast, before any network
    /// activity.
    pub fn resolve(&self) -> Result<ConnectionConfig, ConnectorError> {
        if self.host_name.is_empty() {
            return Err(ConnectorError::Configuration(
                "Host name is required".to_string(),
            ));
        }
        if self.username.is_empty() {
            return Err(ConnectorError::Configuration(
                "Username is required".to_string(),
            ));
        }
        let port: u16 = self.port.parse().map_err(|_| {
            ConnectorError::Configuration(format!(
                "Port '{}' is not a valid TCP port",
                self.port
            ))
        })?;
        if port == 0 {
            return Err(ConnectorError::Configuration(
                "Port 0 is not a valid TCP port".to_string(),
            ));
        }
        Ok(ConnectionConfig {
            host: self.host_name.clone(),
            port,
            username: self.username.clone(),
            password: self.password.clone(),
            base_folder: self.base_folder.clone(),
            host_key_policy: self.host_key_policy.clone(),
        })
    }
}

// ── Operation requests ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequestValues {
    /// Remote source path, absolute or relative to the configured base folder.
    #[serde(rename = "sourceSFTPFolderPath")]
    pub source_sftp_folder_path: String,
    pub destination_appian_folder: FolderId,
    /// Target document name; the source file name is used when blank.
    #[serde(default)]
    pub appian_document_file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequestValues {
    pub source_appian_document: DocumentId,
    /// Remote destination path, absolute or relative to the base folder.
    #[serde(rename = "destinationSFTPFolderPath")]
    pub destination_sftp_folder_path: String,
}

// ── Operation results ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResult {
    pub document: StoredDocument,
    pub diagnostic: IntegrationDiagnostic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub file_name: String,
    pub size_bytes: u64,
    pub remote_path: String,
    pub diagnostic: IntegrationDiagnostic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConnectionOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// ── Transfer lifecycle ───────────────────────────────────────────────────────

/// Linear per-call lifecycle. Any step's error is terminal for the call;
/// resource release still runs before the executor returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferPhase {
    PathResolved,
    SessionOpen,
    ChannelOpen,
    TransferComplete,
    Closed,
}

impl fmt::Display for TransferPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransferPhase::PathResolved => "path resolved",
            TransferPhase::SessionOpen => "session open",
            TransferPhase::ChannelOpen => "channel open",
            TransferPhase::TransferComplete => "transfer complete",
            TransferPhase::Closed => "closed",
        };
        f.write_str(name)
    }
}
