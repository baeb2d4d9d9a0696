//! Data sources for the tool catalog.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::domain::ToolRecord;
use crate::error::{Result, ToolboardError};

/// A place the record list can be read from.
///
/// One call is one attempt: no retries and no caching between calls.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Read and parse the full record list
    async fn fetch(&self) -> Result<Vec<ToolRecord>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Parse a JSON document whose top-level value must be an array.
///
/// A leading byte-order mark is skipped, as HTTP bodies already are.
pub fn parse_records(body: &str) -> Result<Vec<ToolRecord>> {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);
    let value: Value = serde_json::from_str(body)?;
    match value {
        Value::Array(items) => Ok(items.iter().map(ToolRecord::from_value).collect()),
        _ => Err(ToolboardError::NotAnArray),
    }
}

/// Reads the data file over HTTP(S).
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    /// Create a source for `url` with a request timeout
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<ToolRecord>> {
        let response = self
            .client
            .get(self.url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolboardError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the data file from the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Vec<ToolRecord>> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
