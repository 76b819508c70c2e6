//! Data models for ingested documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for one document attached to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub id: Uuid,
    pub project_id: Uuid,
    pub original_filename: String,
    /// Size in bytes at ingestion time
    pub size: u64,
    pub added_at: DateTime<Utc>,
}
