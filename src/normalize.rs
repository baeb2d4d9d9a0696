//! Text normalization and chart derivation.
//!
//! Everything here is a total function over its input: no field value, however
//! malformed, can make these fail.
//!
//! Bullet splitting treats `,` as a delimiter like the others. Characteristics
//! that contain a comma inside a single statement are therefore split into
//! separate bullets.

use serde_json::Value;

use crate::domain::{ChartPoint, ToolRecord};

/// Characters that separate bullets in a characteristics field
pub const BULLET_DELIMITERS: [char; 6] = ['\n', '·', '•', ';', '|', ','];

/// Label used in the chart for records without a name
pub const UNTITLED_LABEL: &str = "(untitled)";

/// Coerce an optional raw value into a trimmed string.
///
/// Absent and null become the empty string. Numbers and booleans use their
/// JSON text. Arrays join their cleaned elements with `,`. Objects carry no
/// displayable text and become empty.
pub fn clean_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Object(_)) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| clean_text(Some(item)))
            .collect::<Vec<_>>()
            .join(",")
            .trim()
            .to_string(),
    }
}

/// Split free text into trimmed, non-empty bullets.
///
/// Consecutive or mixed delimiters collapse. Order and duplicates are kept.
pub fn split_bullets(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    text.split(&BULLET_DELIMITERS[..])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count bullets per record for charting.
///
/// Produces exactly one point per record, in input order. A non-empty
/// characteristics text that yields no bullets (only delimiters) still
/// counts as one item.
pub fn characteristic_counts<'a, I>(records: I) -> Vec<ChartPoint>
where
    I: IntoIterator<Item = &'a ToolRecord>,
{
    records
        .into_iter()
        .map(|record| {
            let tool = record.tool();
            let tool = if tool.is_empty() { UNTITLED_LABEL.to_string() } else { tool };

            let characteristics = record.characteristics();
            let items = match split_bullets(&characteristics).len() {
                0 if !characteristics.is_empty() => 1,
                n => n,
            };

            ChartPoint::new(tool, items)
        })
        .collect()
}
