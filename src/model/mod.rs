use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Service keys the legacy schema carries as dedicated columns, in the
/// positional order they appear after the `cut` column.
pub const LEGACY_SNS_KEYS: [&str; 7] = [
    "x",
    "pixiv",
    "booth",
    "web",
    "instagram",
    "bluesky",
    "tumblr",
];

/// SNS contact info as it appears in the source data.
///
/// The legacy schema splits services across dedicated columns, so the parser
/// assembles a key→url mapping. The modern schema carries one free-form cell
/// (typically a `|`/whitespace/comma separated URL list) which is kept raw
/// and interpreted by the view layer.
///
/// Serialized untagged: a mapping becomes a JSON object, a raw cell a JSON
/// string, matching the shape the listing page has always consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnsField {
    Mapping(BTreeMap<String, String>),
    Raw(String),
}

impl SnsField {
    /// Mapping with all seven legacy service keys present, unset ones empty.
    pub fn legacy_mapping(values: &[&str]) -> Self {
        let map = LEGACY_SNS_KEYS
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let v = values.get(i).copied().unwrap_or_default();
                (key.to_string(), v.to_string())
            })
            .collect();
        SnsField::Mapping(map)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SnsField::Mapping(map) => map.values().all(|v| v.trim().is_empty()),
            SnsField::Raw(s) => s.trim().is_empty(),
        }
    }
}

impl Default for SnsField {
    fn default() -> Self {
        SnsField::Raw(String::new())
    }
}

/// One exhibitor circle, normalized from a CSV row.
///
/// Every text field is a plain `String`; columns missing from a ragged row
/// come through as `""`, never as an absent value. Records are immutable once
/// produced and carry no identity beyond the parse call that made them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircleRecord {
    /// Circle display name.
    pub name: String,
    /// Pen name of the exhibitor.
    pub pn: String,
    /// Booth/space code, free-form (e.g. `A-12`).
    pub space: String,
    /// Category tag (企業, 委託, or empty for general participation).
    pub cat: String,
    /// Thumbnail image path. Legacy rows mirror `cut` here.
    pub thumb: String,
    /// Legacy cut image path; empty for modern rows.
    pub cut: String,
    /// Phonetic sort key; the view layer falls back to `name` when empty.
    pub kana: String,
    /// SNS links, mapping or raw cell depending on the source schema.
    #[serde(default)]
    pub sns: SnsField,
}
