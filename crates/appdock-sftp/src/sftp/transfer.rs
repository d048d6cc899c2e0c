// ── File transfer ────────────────────────────────────────────────────────────
//
// Remote path resolution happens before any network I/O, so a bad path
// never opens a connection. Downloads are fully read into memory before
// the document store sees a byte: a failed transfer ingests nothing.

use crate::sftp::path::resolve_remote_path;
use crate::sftp::service::SftpConnector;
use crate::sftp::types::{DownloadRequestValues, TransferPhase, UploadRequestValues};
use appdock_core::document::{DocumentStore, StoredDocument};
use appdock_core::error::ConnectorError;
use log::{debug, info};
use ssh2::{OpenFlags, OpenType, Session};
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

impl SftpConnector {
    /// Fetch a remote file and ingest it into the document store. Returns
    /// the stored document record.
    pub fn download(
        &self,
        request: &DownloadRequestValues,
        store: &dyn DocumentStore,
    ) -> Result<StoredDocument, ConnectorError> {
        let remote_path = resolve_remote_path(
            self.config().base_folder.as_deref(),
            Some(&request.source_sftp_folder_path),
        )?;
        debug!("{}: {}", TransferPhase::PathResolved, remote_path);

        let started = Instant::now();
        let session = self.open_session()?;
        debug!("{}", TransferPhase::SessionOpen);

        let result = self.fetch_remote(&session, &remote_path, request, store);
        self.release(session);
        debug!("{}", TransferPhase::Closed);

        let document = result?;
        info!(
            "Downloaded {} ({} bytes) in {} ms",
            remote_path,
            document.size_bytes,
            started.elapsed().as_millis()
        );
        Ok(document)
    }

    fn fetch_remote(
        &self,
        session: &Session,
        remote_path: &str,
        request: &DownloadRequestValues,
        store: &dyn DocumentStore,
    ) -> Result<StoredDocument, ConnectorError> {
        let sftp = session.sftp().map_err(|e| {
            ConnectorError::Connection(format!("Failed to open SFTP channel: {}", e))
        })?;
        debug!("{}", TransferPhase::ChannelOpen);

        let mut remote = sftp.open(Path::new(remote_path)).map_err(|e| {
            ConnectorError::Transfer(format!("Failed to open remote file '{}': {}", remote_path, e))
        })?;
        let mut content = Vec::new();
        remote.read_to_end(&mut content).map_err(|e| {
            ConnectorError::Transfer(format!("Failed to read remote file '{}': {}", remote_path, e))
        })?;
        debug!("{}: {} bytes", TransferPhase::TransferComplete, content.len());

        let file_name = effective_file_name(
            request.appian_document_file_name.as_deref(),
            remote_path,
        );
        store
            .ingest(request.destination_appian_folder, &file_name, &content)
            .map_err(ConnectorError::Transfer)
    }

    /// Push a stored document to the remote server. Returns the stored
    /// document record and the resolved remote path it was written to.
    pub fn upload(
        &self,
        request: &UploadRequestValues,
        store: &dyn DocumentStore,
    ) -> Result<(StoredDocument, String), ConnectorError> {
        // Retrieve first: an unknown document never touches the network.
        let (document, content) = store
            .retrieve(&request.source_appian_document)
            .map_err(ConnectorError::Transfer)?;

        let folder_path = resolve_remote_path(
            self.config().base_folder.as_deref(),
            Some(&request.destination_sftp_folder_path),
        )?;
        let remote_path = format!("{}/{}", folder_path.trim_end_matches('/'), document.full_name());
        debug!("{}: {}", TransferPhase::PathResolved, remote_path);

        let started = Instant::now();
        let session = self.open_session()?;
        debug!("{}", TransferPhase::SessionOpen);

        let result = put_remote(&session, &remote_path, &content);
        self.release(session);
        debug!("{}", TransferPhase::Closed);

        result?;
        info!(
            "Uploaded {} ({} bytes) in {} ms",
            remote_path,
            content.len(),
            started.elapsed().as_millis()
        );
        Ok((document, remote_path))
    }
}

fn put_remote(session: &Session, remote_path: &str, content: &[u8]) -> Result<(), ConnectorError> {
    let sftp = session
        .sftp()
        .map_err(|e| ConnectorError::Connection(format!("Failed to open SFTP channel: {}", e)))?;
    debug!("{}", TransferPhase::ChannelOpen);

    let mut remote = sftp
        .open_mode(
            Path::new(remote_path),
            OpenFlags::WRITE | OpenFlags::CREATE | OpenFlags::TRUNCATE,
            0o644,
            OpenType::File,
        )
        .map_err(|e| {
            ConnectorError::Transfer(format!(
                "Failed to create remote file '{}': {}",
                remote_path, e
            ))
        })?;
    remote.write_all(content).map_err(|e| {
        ConnectorError::Transfer(format!("Failed to write remote file '{}': {}", remote_path, e))
    })?;
    debug!("{}: {} bytes", TransferPhase::TransferComplete, content.len());
    Ok(())
}

/// The stored name is the request override when present and non-blank,
/// otherwise the last segment of the remote path.
fn effective_file_name(requested: Option<&str>, remote_path: &str) -> String {
    match requested {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => remote_path
            .rsplit('/')
            .next()
            .unwrap_or(remote_path)
            .to_string(),
    }
}
