//! Common data types
//!
//! Station records as shown to the user and saved channel entries.

use serde::{Deserialize, Serialize};

// =============================================================================
// Helper functions
// =============================================================================

/// Replace every comma in a display name with a space.
///
/// Names end up in comma-delimited `#EXTINF` lines. Idempotent.
pub fn sanitize_name(name: &str) -> String {
    name.replace(',', " ")
}

// =============================================================================
// Station - A directory entry
// =============================================================================

/// A radio station as returned by the directory
///
/// Immutable once built; the name is always sanitized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    // === Basic Info ===
    /// Display name (commas replaced)
    pub name: String,
    /// Stream URL as listed (may be a playlist container)
    pub url: String,
    /// URL the directory already followed redirects for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_resolved: Option<String>,
    /// Directory station UUID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,

    // === Metadata ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Audio codec (e.g., "MP3", "AAC", "OGG")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    /// Bitrate in kbps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl Station {
    /// Create a new station with minimal info
    pub fn new(name: impl AsRef<str>, url: impl Into<String>) -> Self {
        Self {
            name: sanitize_name(name.as_ref()),
            url: url.into(),
            url_resolved: None,
            station_id: None,
            country: None,
            country_code: None,
            language: None,
            tags: Vec::new(),
            codec: None,
            bitrate: None,
            homepage: None,
            favicon: None,
        }
    }

    /// Set directory identifiers
    pub fn with_ids(mut self, station_id: Option<String>, url_resolved: Option<String>) -> Self {
        self.station_id = station_id;
        self.url_resolved = url_resolved;
        self
    }

    /// Set metadata
    pub fn with_metadata(
        mut self,
        country: Option<String>,
        country_code: Option<String>,
        language: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        self.country = country;
        self.country_code = country_code;
        self.language = language;
        self.tags = tags;
        self
    }

    /// Set audio info
    pub fn with_audio_info(mut self, codec: Option<String>, bitrate: Option<u32>) -> Self {
        self.codec = codec;
        self.bitrate = bitrate;
        self
    }

    /// Set homepage and favicon
    pub fn with_links(mut self, homepage: Option<String>, favicon: Option<String>) -> Self {
        self.homepage = homepage;
        self.favicon = favicon;
        self
    }

    /// The saved-channel form of this station
    pub fn to_channel(&self) -> ChannelListEntry {
        ChannelListEntry::new(&self.name, &self.url)
    }
}

// =============================================================================
// ChannelListEntry - A saved favorite
// =============================================================================

/// A user-saved (name, url) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelListEntry {
    pub name: String,
    pub url: String,
}

impl ChannelListEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
