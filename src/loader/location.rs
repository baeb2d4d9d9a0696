//! Where the data file lives.

use std::fmt;
use std::path::PathBuf;

use reqwest::Url;

use crate::error::{Result, ToolboardError};

/// Resolved location of the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Remote file fetched over HTTP(S)
    Url(Url),
    /// Local file
    File(PathBuf),
}

impl SourceLocation {
    /// Resolve `file_name` relative to `base`.
    ///
    /// A base starting with `http://` or `https://` is treated as a URL
    /// directory, so `https://host/app` and `https://host/app/` both resolve
    /// to `https://host/app/<file_name>`. Anything else is a filesystem
    /// directory.
    pub fn resolve(base: &str, file_name: &str) -> Result<Self> {
        let base = base.trim();
        if is_http(base) {
            let mut dir = base.to_string();
            if !dir.ends_with('/') {
                dir.push('/');
            }
            let url = Url::parse(&dir)
                .and_then(|dir| dir.join(file_name))
                .map_err(|e| ToolboardError::InvalidLocation(format!("{}: {}", base, e)))?;
            return Ok(Self::Url(url));
        }

        let dir = if base.is_empty() { "." } else { base };
        Ok(Self::File(PathBuf::from(dir).join(file_name)))
    }
}

fn is_http(base: &str) -> bool {
    let lower = base.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = "image_models_data.json";

    #[test]
    fn test_resolve_url_with_trailing_slash() {
        let location = SourceLocation::resolve("https://example.github.io/CreatingWithAI/", FILE).unwrap();
        assert_eq!(
            location.to_string(),
            "https://example.github.io/CreatingWithAI/image_models_data.json"
        );
    }

    #[test]
    fn test_resolve_url_without_trailing_slash() {
        let location = SourceLocation::resolve("https://example.github.io/CreatingWithAI", FILE).unwrap();
        assert_eq!(
            location,
            SourceLocation::Url(Url::parse("https://example.github.io/CreatingWithAI/image_models_data.json").unwrap())
        );
    }

    #[test]
    fn test_resolve_url_root() {
        let location = SourceLocation::resolve("http://127.0.0.1:8080", FILE).unwrap();
        assert_eq!(location.to_string(), "http://127.0.0.1:8080/image_models_data.json");
    }

    #[test]
    fn test_resolve_directory() {
        let location = SourceLocation::resolve("/srv/site", FILE).unwrap();
        assert_eq!(location, SourceLocation::File(PathBuf::from("/srv/site/image_models_data.json")));
    }

    #[test]
    fn test_resolve_empty_base_is_cwd() {
        let location = SourceLocation::resolve("", FILE).unwrap();
        assert_eq!(location, SourceLocation::File(PathBuf::from("./image_models_data.json")));
    }

    #[test]
    fn test_resolve_invalid_url() {
        let err = SourceLocation::resolve("http://", FILE).unwrap_err();
        assert!(matches!(err, ToolboardError::InvalidLocation(_)));
    }
}
