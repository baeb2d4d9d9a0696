//! Data loading with fallback.
//!
//! The loader is the only place external data enters the system. Every
//! failure is caught here and turned into a `LoadOutcome::Fallback`, so
//! nothing above this boundary ever sees a load error.

mod location;
mod source;

pub use location::SourceLocation;
pub use source::{DataSource, FileSource, HttpSource, parse_records};

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};

use crate::config::SourceConfig;
use crate::domain::{LoadOutcome, ToolRecord};
use crate::error::{Result, ToolboardError};

/// Loads the record list from one source, falling back on failure.
pub struct Loader {
    source: Box<dyn DataSource>,
    fallback: Vec<ToolRecord>,
}

impl Loader {
    /// Create a loader with an empty fallback list
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self {
            source,
            fallback: Vec::new(),
        }
    }

    /// Set the records used when loading fails
    pub fn with_fallback(mut self, fallback: Vec<ToolRecord>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Build the loader described by the source config.
    ///
    /// A base that cannot be resolved still yields a loader; its loads fail
    /// and land on the fallback list like any other failed fetch.
    pub fn from_config(config: &SourceConfig) -> Self {
        let source = build_source(config).unwrap_or_else(|e| -> Box<dyn DataSource> {
            warn!("Cannot use source base {:?}: {}", config.base, e);
            let detail = match e {
                ToolboardError::InvalidLocation(detail) => detail,
                other => format!("{}: {}", config.base, other),
            };
            Box::new(UnresolvedSource { detail })
        });

        let fallback = match &config.fallback {
            Some(path) => read_fallback(path),
            None => Vec::new(),
        };

        Self::new(source).with_fallback(fallback)
    }

    /// The records used when loading fails
    pub fn fallback(&self) -> &[ToolRecord] {
        &self.fallback
    }

    /// Description of the source, for logs and the header
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Run one load cycle.
    pub async fn load(&self) -> LoadOutcome {
        let target = self.source.describe();
        info!("Loading tool records from {}", target);

        match self.source.fetch().await {
            Ok(records) => {
                info!("Loaded {} tool records", records.len());
                LoadOutcome::Loaded(records)
            }
            Err(e) => {
                warn!("Failed to load {}: {} (using {} fallback records)", target, e, self.fallback.len());
                LoadOutcome::Fallback {
                    records: self.fallback.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn build_source(config: &SourceConfig) -> Result<Box<dyn DataSource>> {
    let source: Box<dyn DataSource> = match SourceLocation::resolve(&config.base, &config.file_name)? {
        SourceLocation::Url(url) => Box::new(HttpSource::new(url, Duration::from_millis(config.timeout_ms))?),
        SourceLocation::File(path) => Box::new(FileSource::new(path)),
    };
    Ok(source)
}

/// Stands in for a base that could not be resolved.
struct UnresolvedSource {
    detail: String,
}

#[async_trait]
impl DataSource for UnresolvedSource {
    async fn fetch(&self) -> Result<Vec<ToolRecord>> {
        Err(ToolboardError::InvalidLocation(self.detail.clone()))
    }

    fn describe(&self) -> String {
        format!("unresolved ({})", self.detail)
    }
}

/// Read the fallback list, or an empty list if it cannot be read.
pub fn read_fallback(path: &Path) -> Vec<ToolRecord> {
    let parsed = std::fs::read_to_string(path)
        .map_err(ToolboardError::from)
        .and_then(|body| parse_records(&body));

    match parsed {
        Ok(records) => {
            info!("Loaded {} fallback records from {}", records.len(), path.display());
            records
        }
        Err(e) => {
            warn!("Ignoring fallback file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    struct FailingSource;

    #[async_trait]
    impl DataSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<ToolRecord>> {
            Err(ToolboardError::HttpStatus(404))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    struct FixedSource(Vec<ToolRecord>);

    #[async_trait]
    impl DataSource for FixedSource {
        async fn fetch(&self) -> Result<Vec<ToolRecord>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_success_has_no_error() {
        let records = vec![ToolRecord::new("Gemini", "Fast")];
        let loader = Loader::new(Box::new(FixedSource(records.clone())));
        let outcome = loader.load().await;
        assert_eq!(outcome, LoadOutcome::Loaded(records));
    }

    #[tokio::test]
    async fn test_load_failure_uses_empty_fallback() {
        let loader = Loader::new(Box::new(FailingSource));
        let outcome = loader.load().await;
        assert_eq!(outcome.error(), Some("Failed to fetch data: 404"));
        assert!(outcome.records().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_uses_configured_fallback() {
        let fallback = vec![ToolRecord::new("Offline Tool", "Cached")];
        let loader = Loader::new(Box::new(FailingSource)).with_fallback(fallback.clone());
        let outcome = loader.load().await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.records(), fallback.as_slice());
    }

    #[tokio::test]
    async fn test_load_success_ignores_fallback() {
        let loader = Loader::new(Box::new(FixedSource(vec![])))
            .with_fallback(vec![ToolRecord::new("Offline Tool", "")]);
        let outcome = loader.load().await;
        assert!(outcome.error().is_none());
        assert!(outcome.records().is_empty());
    }

    #[tokio::test]
    async fn test_from_config_directory_base() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("image_models_data.json"),
            r#"[{"Tool": "Gemini"}, {"Tool": "Ideogram"}]"#,
        )
        .unwrap();

        let config = SourceConfig {
            base: dir.path().display().to_string(),
            ..Default::default()
        };
        let loader = Loader::from_config(&config);
        let outcome = loader.load().await;
        assert!(outcome.error().is_none());
        assert_eq!(outcome.records().len(), 2);
    }

    #[tokio::test]
    async fn test_from_config_missing_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let mut fallback = NamedTempFile::new().unwrap();
        write!(fallback, r#"[{{"Tool": "Embedded"}}]"#).unwrap();

        let config = SourceConfig {
            base: dir.path().display().to_string(),
            fallback: Some(fallback.path().to_path_buf()),
            ..Default::default()
        };
        let loader = Loader::from_config(&config);
        assert_eq!(loader.fallback().len(), 1);

        let outcome = loader.load().await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.records()[0].tool(), "Embedded");
    }

    #[tokio::test]
    async fn test_from_config_unresolvable_base_falls_back() {
        let mut fallback = NamedTempFile::new().unwrap();
        write!(fallback, r#"[{{"Tool": "Embedded"}}]"#).unwrap();

        let config = SourceConfig {
            base: "http://".to_string(),
            fallback: Some(fallback.path().to_path_buf()),
            ..Default::default()
        };
        let loader = Loader::from_config(&config);
        let outcome = loader.load().await;

        assert!(outcome.is_fallback());
        let error = outcome.error().unwrap();
        assert!(error.starts_with("Invalid source location: http://"), "{}", error);
        assert!(!error.contains("location: Invalid source location"));
        assert_eq!(outcome.records()[0].tool(), "Embedded");
    }

    #[test]
    fn test_read_fallback_skips_byte_order_mark() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\u{feff}[{{\"Tool\": \"Offline Tool\"}}]").unwrap();
        let records = read_fallback(file.path());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tool(), "Offline Tool");
    }

    #[test]
    fn test_read_fallback_unreadable_is_empty() {
        assert!(read_fallback(Path::new("/definitely/not/here.json")).is_empty());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"not\": \"an array\"}}").unwrap();
        assert!(read_fallback(file.path()).is_empty());
    }
}
