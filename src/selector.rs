//! Presentation selection: search filtering and view dispatch.
//!
//! Takes the loaded records, the current query, and the view mode, and
//! produces the display models the renderers draw. Nothing here touches the
//! terminal.

use crate::domain::ToolRecord;

/// Placeholder shown for missing values in the table
pub const PLACEHOLDER: &str = "—";

/// Title shown on cards for records without a name
pub const UNTITLED_TOOL: &str = "Untitled Tool";

/// Text shown on cards for records without characteristics
pub const NO_CHARACTERISTICS: &str = "No characteristics provided.";

/// A normalized search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Normalize a raw query: trimmed and lowercased
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// The normalized query text
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Whether the query matches everything
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring match on name or characteristics
    pub fn matches(&self, record: &ToolRecord) -> bool {
        if self.is_empty() {
            return true;
        }
        record.tool().to_lowercase().contains(&self.needle)
            || record.characteristics().to_lowercase().contains(&self.needle)
    }
}

/// Keep the records matching `query`, in input order.
///
/// An empty query (after trimming) keeps every record.
pub fn filter_records<'a, I>(records: I, query: &str) -> Vec<&'a ToolRecord>
where
    I: IntoIterator<Item = &'a ToolRecord>,
{
    let query = SearchQuery::new(query);
    if query.is_empty() {
        return records.into_iter().collect();
    }
    records.into_iter().filter(|record| query.matches(record)).collect()
}

/// Layout used for the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Grid of detail cards
    #[default]
    Cards,
    /// Four-column table
    Table,
}

impl ViewMode {
    /// Switch to the other mode
    pub fn toggle(self) -> Self {
        match self {
            Self::Cards => Self::Table,
            Self::Table => Self::Cards,
        }
    }

    /// Get the mode name for display
    pub fn name(self) -> &'static str {
        match self {
            Self::Cards => "Cards",
            Self::Table => "Table",
        }
    }
}

/// Display model for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub title: String,
    /// First character of the name, or `?`
    pub monogram: char,
    pub icon_url: Option<String>,
    pub how_to_url: Option<String>,
    pub site_url: Option<String>,
    pub bullets: Vec<String>,
}

impl CardModel {
    /// Build the card for a record
    pub fn from_record(record: &ToolRecord) -> Self {
        let tool = record.tool();
        let monogram = tool.chars().next().unwrap_or('?');
        let title = if tool.is_empty() { UNTITLED_TOOL.to_string() } else { tool };

        Self {
            title,
            monogram,
            icon_url: record.icon_url(),
            how_to_url: record.how_to_url(),
            site_url: record.site_url(),
            bullets: record.bullets(),
        }
    }

    /// Lines of body text: bullets, or the empty notice
    pub fn body_lines(&self) -> Vec<String> {
        if self.bullets.is_empty() {
            vec![NO_CHARACTERISTICS.to_string()]
        } else {
            self.bullets.iter().map(|b| format!("• {}", b)).collect()
        }
    }
}

/// Characteristics column of a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacteristicsCell {
    /// Split bullets
    Bullets(Vec<String>),
    /// Raw text, or the placeholder
    Text(String),
}

/// Link column of a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCell {
    pub url: Option<String>,
}

impl LinkCell {
    /// Cell label: `Open` when a link exists
    pub fn label(&self) -> &'static str {
        if self.url.is_some() { "Open" } else { PLACEHOLDER }
    }
}

/// Display model for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub tool: String,
    pub characteristics: CharacteristicsCell,
    pub how_to: LinkCell,
    pub site: LinkCell,
}

impl TableRow {
    /// Column headers, in order
    pub const HEADERS: [&'static str; 4] = ["Tool", "Characteristics", "How to", "Site"];

    /// Build the row for a record
    pub fn from_record(record: &ToolRecord) -> Self {
        let bullets = record.bullets();
        let characteristics = if bullets.is_empty() {
            let text = record.characteristics();
            CharacteristicsCell::Text(if text.is_empty() { PLACEHOLDER.to_string() } else { text })
        } else {
            CharacteristicsCell::Bullets(bullets)
        };

        Self {
            tool: record.tool(),
            characteristics,
            how_to: LinkCell { url: record.how_to_url() },
            site: LinkCell { url: record.site_url() },
        }
    }
}

/// What the record area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Nothing matched (or nothing loaded)
    NoResults,
    Cards(Vec<CardModel>),
    Table(Vec<TableRow>),
}

/// Route the visible records to the renderer for `mode`.
pub fn present(records: &[&ToolRecord], mode: ViewMode) -> Presentation {
    if records.is_empty() {
        return Presentation::NoResults;
    }
    match mode {
        ViewMode::Cards => Presentation::Cards(records.iter().map(|r| CardModel::from_record(r)).collect()),
        ViewMode::Table => Presentation::Table(records.iter().map(|r| TableRow::from_record(r)).collect()),
    }
}

/// Summary badges shown under the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub visible: usize,
    pub filtered: bool,
    pub offline: bool,
}

impl StatusLine {
    /// Build from the visible count, the raw query, and the load error
    pub fn new(visible: usize, raw_query: &str, load_error: Option<&str>) -> Self {
        Self {
            visible,
            filtered: !raw_query.is_empty(),
            offline: load_error.is_some(),
        }
    }

    /// Badge texts, in display order
    pub fn badges(&self) -> Vec<String> {
        let mut badges = vec![format!("{} tools", self.visible)];
        if self.filtered {
            badges.push("filtered".to_string());
        }
        if self.offline {
            badges.push("offline mode".to_string());
        }
        badges
    }
}
