use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::DocumentVersion;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// A fetched text, the input of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub source: String,
    pub version: DocumentVersion,
    pub content: String,
    pub fetched_at: DateTime<Utc>,
}

impl Document {
    /// Ingest raw bytes into a Document, stamped with the current time.
    ///
    /// This and [`Document::ingest_at`] are the ONLY ways to construct a Document.
    /// They validate the bytes as UTF-8 and compute the content version.
    pub fn ingest(source: impl Into<String>, raw_content: Vec<u8>) -> Result<Self, DocumentError> {
        Self::ingest_at(source, raw_content, Utc::now())
    }

    pub fn ingest_at(
        source: impl Into<String>,
        raw_content: Vec<u8>,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;

        // Version computed on verified content
        let version = DocumentVersion::from_content(content.as_bytes());

        Ok(Document {
            source: source.into(),
            version,
            content,
            fetched_at,
        })
    }
}
