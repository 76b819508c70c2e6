//! Document ingestion for projects
//!
//! Uploaded lecture material is copied verbatim into the project's
//! subtree and tracked by metadata only. Deriving cards from documents
//! happens elsewhere; this module stops at the bytes.

pub mod models;
pub mod storage;

pub use models::StoredDocument;
pub use storage::UploadStorage;
