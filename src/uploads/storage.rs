//! Storage operations for ingested documents
//!
//! Directory structure per project:
//! ```text
//! projects/{project-id}/
//! ├── files.json                # Document metadata
//! └── files/
//!     └── {doc-id}_{filename}   # Ingested blobs
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use super::models::StoredDocument;
use crate::storage::{Result, StoreError};

pub struct UploadStorage {
    data_dir: PathBuf,
}

impl UploadStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn project_dir(&self, project_id: Uuid) -> PathBuf {
        self.data_dir.join("projects").join(project_id.to_string())
    }

    fn files_dir(&self, project_id: Uuid) -> PathBuf {
        self.project_dir(project_id).join("files")
    }

    fn index_path(&self, project_id: Uuid) -> PathBuf {
        self.project_dir(project_id).join("files.json")
    }

    fn blob_path(&self, doc: &StoredDocument) -> PathBuf {
        self.files_dir(doc.project_id)
            .join(format!("{}_{}", doc.id, doc.original_filename))
    }

    /// List a project's documents in ingestion order
    pub fn list_documents(&self, project_id: Uuid) -> Result<Vec<StoredDocument>> {
        let path = self.index_path(project_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let docs: Vec<StoredDocument> = serde_json::from_str(&content)?;
        Ok(docs)
    }

    /// Copy a file into the project and record its metadata
    pub fn ingest(&self, project_id: Uuid, source: &Path) -> Result<StoredDocument> {
        let original_filename = source
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                StoreError::Invalid(format!("source path has no file name: {}", source.display()))
            })?;

        let size = fs::metadata(source)?.len();
        fs::create_dir_all(self.files_dir(project_id))?;

        let doc = StoredDocument {
            id: Uuid::new_v4(),
            project_id,
            original_filename,
            size,
            added_at: Utc::now(),
        };

        fs::copy(source, self.blob_path(&doc))?;

        let mut docs = self.list_documents(project_id)?;
        docs.push(doc.clone());
        self.save_index(project_id, &docs)?;

        log::info!(
            "Ingested {} ({} bytes) into project {}",
            doc.original_filename,
            doc.size,
            project_id
        );
        Ok(doc)
    }

    /// Remove a document's blob and metadata
    pub fn remove(&self, project_id: Uuid, doc_id: Uuid) -> Result<()> {
        let mut docs = self.list_documents(project_id)?;
        let doc = docs
            .iter()
            .position(|d| d.id == doc_id)
            .map(|i| docs.remove(i))
            .ok_or(StoreError::DocumentNotFound(doc_id))?;

        let blob = self.blob_path(&doc);
        if blob.exists() {
            fs::remove_file(blob)?;
        }
        self.save_index(project_id, &docs)?;

        Ok(())
    }

    /// Path to the stored blob, for viewers and exports
    pub fn document_path(&self, doc: &StoredDocument) -> PathBuf {
        self.blob_path(doc)
    }

    fn save_index(&self, project_id: Uuid, docs: &[StoredDocument]) -> Result<()> {
        fs::write(
            self.index_path(project_id),
            serde_json::to_string_pretty(docs)?,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_copies_the_blob_and_records_metadata() {
        let data_dir = tempfile::tempdir().unwrap();
        let source_dir = tempfile::tempdir().unwrap();
        let source = source_dir.path().join("lecture01.pdf");
        fs::write(&source, b"not really a pdf").unwrap();

        let storage = UploadStorage::new(data_dir.path().to_path_buf());
        let project_id = Uuid::new_v4();

        let doc = storage.ingest(project_id, &source).unwrap();

        assert_eq!(doc.original_filename, "lecture01.pdf");
        assert_eq!(doc.size, 16);
        assert!(storage.document_path(&doc).exists());

        let listed = storage.list_documents(project_id).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, doc.id);
    }

    #[test]
    fn remove_deletes_blob_and_metadata() {
        let data_dir = tempfile::tempdir().unwrap();
        let source_dir = tempfile::tempdir().unwrap();
        let source = source_dir.path().join("notes.txt");
        fs::write(&source, b"notes").unwrap();

        let storage = UploadStorage::new(data_dir.path().to_path_buf());
        let project_id = Uuid::new_v4();
        let doc = storage.ingest(project_id, &source).unwrap();

        storage.remove(project_id, doc.id).unwrap();

        assert!(storage.list_documents(project_id).unwrap().is_empty());
        assert!(!storage.document_path(&doc).exists());
    }

    #[test]
    fn removing_an_unknown_document_reports_not_found() {
        let data_dir = tempfile::tempdir().unwrap();
        let storage = UploadStorage::new(data_dir.path().to_path_buf());

        let err = storage.remove(Uuid::new_v4(), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, StoreError::DocumentNotFound(_)));
    }
}
