// ── Document-store seam ──────────────────────────────────────────────────────
//
// Connectors never touch the host's document store directly; they go through
// this trait. Hosts adapt their own storage behind it, and tests use the
// in-memory implementation below.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Opaque folder identifier within the host's document store.
pub type FolderId = i64;

/// Opaque document identifier within the host's document store.
pub type DocumentId = String;

/// Metadata of a document held by the host platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub id: DocumentId,
    pub folder_id: FolderId,
    /// File name without the extension.
    pub file_name: String,
    pub extension: Option<String>,
    pub size_bytes: u64,
}

impl StoredDocument {
    /// The display name, extension re-attached.
    pub fn full_name(&self) -> String {
        match &self.extension {
            Some(ext) => format!("{}.{}", self.file_name, ext),
            None => self.file_name.clone(),
        }
    }
}

/// The two directions a connector needs: ingest bytes as a new document,
/// and retrieve an existing document's metadata plus content.
pub trait DocumentStore {
    fn ingest(
        &self,
        folder: FolderId,
        file_name: &str,
        content: &[u8],
    ) -> Result<StoredDocument, String>;

    fn retrieve(&self, id: &str) -> Result<(StoredDocument, Vec<u8>), String>;
}

/// Mutex-guarded in-memory store for tests and embedding hosts without a
/// real document service.
pub struct InMemoryDocumentStore {
    inner: Mutex<HashMap<DocumentId, (StoredDocument, Vec<u8>)>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        InMemoryDocumentStore {
            inner: Mutex::new(HashMap::new()),
        }
    }

    // A panic while the lock was held leaves the map intact; recover the
    // guard rather than propagating the poison.
    fn documents(&self) -> MutexGuard<'_, HashMap<DocumentId, (StoredDocument, Vec<u8>)>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn document_count(&self) -> usize {
        self.documents().len()
    }

    pub fn documents_in(&self, folder: FolderId) -> Vec<StoredDocument> {
        self.documents()
            .values()
            .filter(|(doc, _)| doc.folder_id == folder)
            .map(|(doc, _)| doc.clone())
            .collect()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn ingest(
        &self,
        folder: FolderId,
        file_name: &str,
        content: &[u8],
    ) -> Result<StoredDocument, String> {
        if file_name.is_empty() {
            return Err("Document file name must not be empty".to_string());
        }
        let (stem, extension) = split_file_name(file_name);
        let document = StoredDocument {
            id: Uuid::new_v4().to_string(),
            folder_id: folder,
            file_name: stem.to_string(),
            extension: extension.map(str::to_string),
            size_bytes: content.len() as u64,
        };
        self.documents()
            .insert(document.id.clone(), (document.clone(), content.to_vec()));
        Ok(document)
    }

    fn retrieve(&self, id: &str) -> Result<(StoredDocument, Vec<u8>), String> {
        self.documents()
            .get(id)
            .cloned()
            .ok_or_else(|| format!("Document '{}' not found", id))
    }
}

/// Split `name.ext` into stem and extension. A leading dot or a name with
/// no dot yields no extension.
fn split_file_name(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (file_name, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_then_retrieve_roundtrips_content() {
        let store = InMemoryDocumentStore::new();
        let doc = store.ingest(7, "q1.csv", b"a,b,c\n1,2,3\n").unwrap();
        assert_eq!(doc.folder_id, 7);
        assert_eq!(doc.file_name, "q1");
        assert_eq!(doc.extension.as_deref(), Some("csv"));
        assert_eq!(doc.size_bytes, 12);

        let (meta, content) = store.retrieve(&doc.id).unwrap();
        assert_eq!(meta, doc);
        assert_eq!(content, b"a,b,c\n1,2,3\n");
    }

    #[test]
    fn ingest_accepts_empty_content() {
        let store = InMemoryDocumentStore::new();
        let doc = store.ingest(1, "empty.bin", &[]).unwrap();
        assert_eq!(doc.size_bytes, 0);
        let (_, content) = store.retrieve(&doc.id).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn ingest_rejects_empty_file_name() {
        let store = InMemoryDocumentStore::new();
        assert!(store.ingest(1, "", b"data").is_err());
    }

    #[test]
    fn store_survives_a_poisoned_lock() {
        let store = std::sync::Arc::new(InMemoryDocumentStore::new());
        let doc = store.ingest(1, "q1.csv", b"a,b\n").unwrap();

        let poisoner = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the store lock");
        })
        .join();
        assert!(store.inner.is_poisoned());

        let (meta, content) = store.retrieve(&doc.id).unwrap();
        assert_eq!(meta, doc);
        assert_eq!(content, b"a,b\n");
        assert_eq!(store.document_count(), 1);
        store.ingest(1, "q2.csv", b"c,d\n").unwrap();
        assert_eq!(store.document_count(), 2);
    }

    #[test]
    fn retrieve_unknown_id_fails() {
        let store = InMemoryDocumentStore::new();
        let err = store.retrieve("nope").unwrap_err();
        assert!(err.contains("nope"));
    }

    #[test]
    fn documents_in_filters_by_folder() {
        let store = InMemoryDocumentStore::new();
        store.ingest(1, "a.txt", b"a").unwrap();
        store.ingest(1, "b.txt", b"b").unwrap();
        store.ingest(2, "c.txt", b"c").unwrap();
        assert_eq!(store.documents_in(1).len(), 2);
        assert_eq!(store.documents_in(2).len(), 1);
        assert!(store.documents_in(3).is_empty());
    }

    #[test]
    fn split_keeps_only_the_last_extension() {
        assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", Some("gz")));
        assert_eq!(split_file_name("q1.csv"), ("q1", Some("csv")));
    }

    #[test]
    fn split_handles_dotless_and_hidden_names() {
        assert_eq!(split_file_name("README"), ("README", None));
        assert_eq!(split_file_name(".bashrc"), (".bashrc", None));
        assert_eq!(split_file_name("trailing."), ("trailing.", None));
    }

    #[test]
    fn full_name_reattaches_extension() {
        let store = InMemoryDocumentStore::new();
        let doc = store.ingest(1, "report.pdf", b"%PDF").unwrap();
        assert_eq!(doc.full_name(), "report.pdf");
        let plain = store.ingest(1, "LICENSE", b"MIT").unwrap();
        assert_eq!(plain.full_name(), "LICENSE");
    }
}
