// ── Host-facing operations ───────────────────────────────────────────────────
//
// Thin wrappers: resolve the connected-system values, run the connector,
// classify failures into `{title, message}`. Diagnostics echo the request
// back to the designer; the password is never echoed.

use crate::sftp::service::SftpConnector;
use crate::sftp::types::{
    ConnectedSystemValues, DownloadRequestValues, DownloadResult, TestConnectionOutcome,
    UploadRequestValues, UploadResult,
};
use appdock_core::diagnostics::DiagnosticBuilder;
use appdock_core::document::DocumentStore;
use appdock_core::error::IntegrationError;
use log::info;

pub const DOWNLOAD_ERROR_TITLE: &str = "Unable to download document";
pub const UPLOAD_ERROR_TITLE: &str = "Unable to upload document";

/// Validate the connected-system values by opening and closing one session.
pub fn execute_test_connection(values: &ConnectedSystemValues) -> TestConnectionOutcome {
    let config = match values.resolve() {
        Ok(config) => config,
        Err(e) => {
            return TestConnectionOutcome {
                success: false,
                message: Some(e.message().to_string()),
            }
        }
    };
    SftpConnector::new(config).test_connection()
}

/// Download a remote file into the document store.
pub fn execute_download(
    values: &ConnectedSystemValues,
    request: &DownloadRequestValues,
    store: &dyn DocumentStore,
) -> Result<DownloadResult, IntegrationError> {
    let mut diagnostic = DiagnosticBuilder::new();
    echo_connection(&mut diagnostic, values);
    diagnostic.request_entry("sourceFolderPath", request.source_sftp_folder_path.clone());
    diagnostic.request_entry("folderId", request.destination_appian_folder);

    let config = values
        .resolve()
        .map_err(|e| e.into_integration(DOWNLOAD_ERROR_TITLE))?;
    let connector = SftpConnector::new(config);
    let document = connector
        .download(request, store)
        .map_err(|e| e.into_integration(DOWNLOAD_ERROR_TITLE))?;

    diagnostic.response_entry("File Name", document.full_name());
    diagnostic.response_entry("File Size", document.size_bytes);
    info!("Download complete: {}", document.full_name());
    Ok(DownloadResult {
        document,
        diagnostic: diagnostic.finish(),
    })
}

/// Upload a stored document to the remote server.
pub fn execute_upload(
    values: &ConnectedSystemValues,
    request: &UploadRequestValues,
    store: &dyn DocumentStore,
) -> Result<UploadResult, IntegrationError> {
    let mut diagnostic = DiagnosticBuilder::new();
    echo_connection(&mut diagnostic, values);
    diagnostic.request_entry("documentId", request.source_appian_document.clone());
    diagnostic.request_entry(
        "destinationFolderPath",
        request.destination_sftp_folder_path.clone(),
    );

    let config = values
        .resolve()
        .map_err(|e| e.into_integration(UPLOAD_ERROR_TITLE))?;
    let connector = SftpConnector::new(config);
    let (document, remote_path) = connector
        .upload(request, store)
        .map_err(|e| e.into_integration(UPLOAD_ERROR_TITLE))?;

    diagnostic.response_entry("File Name", document.full_name());
    diagnostic.response_entry("File Size", document.size_bytes);
    diagnostic.response_entry("Remote Path", remote_path.clone());
    info!("Upload complete: {}", remote_path);
    Ok(UploadResult {
        file_name: document.full_name(),
        size_bytes: document.size_bytes,
        remote_path,
        diagnostic: diagnostic.finish(),
    })
}

fn echo_connection(diagnostic: &mut DiagnosticBuilder, values: &ConnectedSystemValues) {
    diagnostic.request_entry("hostName", values.host_name.clone());
    diagnostic.request_entry("port", values.port.clone());
    diagnostic.request_entry("username", values.username.clone());
}
