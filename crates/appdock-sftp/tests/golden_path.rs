//! End-to-end transfers against a live SFTP server.
//!
//! Opt-in: `cargo test -p appdock-sftp --features docker-e2e`. Expects a
//! server such as `atmoz/sftp` reachable via the `APPDOCK_SFTP_*`
//! environment variables, with the configured user able to write under
//! the base folder.

#![cfg(feature = "docker-e2e")]

use appdock_core::document::{DocumentStore, InMemoryDocumentStore};
use appdock_sftp::sftp::types::{
    ConnectedSystemValues, DownloadRequestValues, HostKeyPolicy, UploadRequestValues,
};
use appdock_sftp::sftp::{execute_download, execute_test_connection, execute_upload};

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn live_values() -> ConnectedSystemValues {
    ConnectedSystemValues {
        host_name: env_or("APPDOCK_SFTP_HOST", "127.0.0.1"),
        port: env_or("APPDOCK_SFTP_PORT", "2222"),
        username: env_or("APPDOCK_SFTP_USER", "demo"),
        password: env_or("APPDOCK_SFTP_PASSWORD", "demo"),
        base_folder: Some(env_or("APPDOCK_SFTP_BASE", "upload")),
        host_key_policy: HostKeyPolicy::AcceptAny,
    }
}

#[test]
fn test_connection_succeeds_against_the_live_server() {
    let outcome = execute_test_connection(&live_values());
    assert!(outcome.success, "{:?}", outcome.message);
}

#[test]
fn upload_then_download_round_trips_the_bytes() {
    let values = live_values();
    let store = InMemoryDocumentStore::new();
    let content = b"golden path payload\n".to_vec();
    let document = store.ingest(1, "roundtrip.txt", &content).unwrap();

    let upload = execute_upload(
        &values,
        &UploadRequestValues {
            source_appian_document: document.id,
            destination_sftp_folder_path: String::new(),
        },
        &store,
    )
    .unwrap();
    assert_eq!(upload.size_bytes, content.len() as u64);

    let download = execute_download(
        &values,
        &DownloadRequestValues {
            source_sftp_folder_path: "roundtrip.txt".to_string(),
            destination_appian_folder: 2,
            appian_document_file_name: None,
        },
        &store,
    )
    .unwrap();
    assert_eq!(download.document.size_bytes, content.len() as u64);

    let (_, fetched) = store.retrieve(&download.document.id).unwrap();
    assert_eq!(fetched, content);
}

#[test]
fn zero_byte_upload_is_accepted() {
    let values = live_values();
    let store = InMemoryDocumentStore::new();
    let document = store.ingest(1, "empty.dat", b"").unwrap();

    let upload = execute_upload(
        &values,
        &UploadRequestValues {
            source_appian_document: document.id,
            destination_sftp_folder_path: String::new(),
        },
        &store,
    )
    .unwrap();
    assert_eq!(upload.size_bytes, 0);
}

#[test]
fn missing_remote_file_names_the_file_and_ingests_nothing() {
    let values = live_values();
    let store = InMemoryDocumentStore::new();

    let err = execute_download(
        &values,
        &DownloadRequestValues {
            source_sftp_folder_path: "definitely-not-there.bin".to_string(),
            destination_appian_folder: 2,
            appian_document_file_name: None,
        },
        &store,
    )
    .unwrap_err();
    assert!(err.message.contains("definitely-not-there.bin"));
    assert_eq!(store.document_count(), 0);
}
