//! Tool catalog records.
//!
//! A `ToolRecord` keeps every field exactly as the source delivered it. The
//! accessors are the only way to read a field, and each one goes through
//! [`clean_text`], so absent, null, or non-string values never reach
//! comparison or rendering code unnormalized.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{clean_text, split_bullets};

/// One catalog entry describing an image tool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ToolRecord {
    #[serde(rename = "Tool", default, skip_serializing_if = "Option::is_none")]
    tool: Option<Value>,

    #[serde(rename = "Characteristics", default, skip_serializing_if = "Option::is_none")]
    characteristics: Option<Value>,

    #[serde(rename = "How to page", default, skip_serializing_if = "Option::is_none")]
    how_to_url: Option<Value>,

    #[serde(rename = "Site link", default, skip_serializing_if = "Option::is_none")]
    site_url: Option<Value>,

    #[serde(rename = "Platform Icon", default, skip_serializing_if = "Option::is_none")]
    icon_url: Option<Value>,
}

impl ToolRecord {
    /// Create a record with a name and characteristics text
    pub fn new(tool: impl Into<String>, characteristics: impl Into<String>) -> Self {
        Self {
            tool: Some(Value::String(tool.into())),
            characteristics: Some(Value::String(characteristics.into())),
            ..Default::default()
        }
    }

    /// Set the how-to page link
    pub fn with_how_to(mut self, url: impl Into<String>) -> Self {
        self.how_to_url = Some(Value::String(url.into()));
        self
    }

    /// Set the site link
    pub fn with_site(mut self, url: impl Into<String>) -> Self {
        self.site_url = Some(Value::String(url.into()));
        self
    }

    /// Set the platform icon link
    pub fn with_icon(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(Value::String(url.into()));
        self
    }

    /// Build a record from one element of the source array.
    ///
    /// Recognized keys are picked out and everything else is ignored.
    /// Elements that are not JSON objects yield a record with every field
    /// absent.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                log::debug!("Unreadable record, treating all fields as absent: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Display name, cleaned
    pub fn tool(&self) -> String {
        clean_text(self.tool.as_ref())
    }

    /// Characteristics text, cleaned but not split
    pub fn characteristics(&self) -> String {
        clean_text(self.characteristics.as_ref())
    }

    /// Characteristics split into bullets
    pub fn bullets(&self) -> Vec<String> {
        split_bullets(&self.characteristics())
    }

    /// How-to page link, if present
    pub fn how_to_url(&self) -> Option<String> {
        non_empty(clean_text(self.how_to_url.as_ref()))
    }

    /// Site link, if present
    pub fn site_url(&self) -> Option<String> {
        non_empty(clean_text(self.site_url.as_ref()))
    }

    /// Platform icon link, if present
    pub fn icon_url(&self) -> Option<String> {
        non_empty(clean_text(self.icon_url.as_ref()))
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
