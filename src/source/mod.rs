pub mod file;
pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::document::{Document, DocumentError};

pub use file::FileSource;
pub use http::{HttpSource, DEFAULT_SOURCE_URL};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed body: {0}")]
    Document(#[from] DocumentError),
}

/// Where the raw text comes from.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Human-readable location, used in logs and as the document source.
    fn describe(&self) -> &str;

    async fn fetch(&self) -> Result<Document, FetchError>;
}
