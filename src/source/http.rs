use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::document::Document;
use crate::source::{FetchError, TextSource};

pub const DEFAULT_SOURCE_URL: &str = "https://www.terriblytinytales.com/test.txt";

/// Plain GET against a fixed URL. No auth, no retries.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl TextSource for HttpSource {
    fn describe(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Document, FetchError> {
        log::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        log::debug!("received {} bytes from {}", body.len(), self.url);

        Ok(Document::ingest(self.url.as_str(), body.to_vec())?)
    }
}
