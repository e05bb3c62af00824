use std::path::PathBuf;

use async_trait::async_trait;

use crate::document::Document;
use crate::source::{FetchError, TextSource};

/// Reads the text from a local file instead of the network.
pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }
}

#[async_trait]
impl TextSource for FileSource {
    fn describe(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> Result<Document, FetchError> {
        let raw = tokio::fs::read(&self.path).await?;
        Ok(Document::ingest(self.label.as_str(), raw)?)
    }
}
