//! Directory wire types
//!
//! Serde shapes of the directory's JSON responses, and their conversion
//! into the app's [`Station`] records.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::data::types::Station;

// =============================================================================
// Internal API response types (serde)
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RbStation {
    #[serde(default)]
    pub stationuuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub url_resolved: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub favicon: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub countrycode: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub codec: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub bitrate: u32,
}

/// Some mirrors send numbers as strings, some as numbers
fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(u64),
        Str(String),
        Other(Value),
    }

    Ok(match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => u32::try_from(n).unwrap_or(u32::MAX),
        NumOrString::Str(s) => s.trim().parse().unwrap_or(0),
        NumOrString::Other(_) => 0,
    })
}

/// Convert an empty string to None
fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl RbStation {
    /// Convert to a [`Station`]. Records with no stream URL at all are
    /// dropped.
    pub(crate) fn into_station(self) -> Option<Station> {
        let url = non_empty(&self.url).or_else(|| non_empty(&self.url_resolved))?;

        let tags = self
            .tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let bitrate = (self.bitrate != 0).then_some(self.bitrate);

        Some(
            Station::new(&self.name, url)
                .with_ids(non_empty(&self.stationuuid), non_empty(&self.url_resolved))
                .with_metadata(
                    non_empty(&self.country),
                    non_empty(&self.countrycode),
                    non_empty(&self.language),
                    tags,
                )
                .with_audio_info(non_empty(&self.codec), bitrate)
                .with_links(non_empty(&self.homepage), non_empty(&self.favicon)),
        )
    }
}

/// Convert a directory response array, dropping unusable records
pub(crate) fn stations_from(records: Vec<RbStation>) -> Vec<Station> {
    records.into_iter().filter_map(RbStation::into_station).collect()
}

// =============================================================================
// Listing entries
// =============================================================================

/// One row of a category listing (country, codec, state, language, tag)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub stationcount: u32,
}

// =============================================================================
// Playable-URL response
// =============================================================================

/// Body of the `{ver}/{fmt}/url/{station_id}` endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PlayableResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub ok: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub url: String,
}

/// `true`, `"true"` and `"1"` are all accepted
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "1"),
        Value::Number(n) => n.as_u64() == Some(1),
        _ => false,
    })
}

// =============================================================================
// Raw payloads
// =============================================================================

/// A decoded directory response
///
/// JSON responses come back parsed; XML is handed over as raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(v) => Some(v),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            Payload::Json(_) => None,
        }
    }
}
