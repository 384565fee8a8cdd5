//! Stream resolution types

use std::fmt;

use crate::error::{RadioError, Result};

/// Where a resolved stream URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamSource {
    /// The station URL was already a stream
    Direct,
    /// Extracted from a `.pls` container
    Pls,
    /// Extracted from a `.m3u` container
    M3u,
}

impl fmt::Display for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamSource::Direct => write!(f, "Direct"),
            StreamSource::Pls => write!(f, "PLS"),
            StreamSource::M3u => write!(f, "M3U"),
        }
    }
}

/// A direct, playable stream URL
///
/// Never points at another playlist container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStreamUrl {
    url: String,
    original_url: String,
    source: StreamSource,
}

impl ResolvedStreamUrl {
    /// A station URL that needs no resolution
    pub fn direct(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            original_url: url.clone(),
            url,
            source: StreamSource::Direct,
        }
    }

    /// A stream URL extracted from a playlist at `original_url`
    pub fn from_playlist(
        url: impl Into<String>,
        original_url: impl Into<String>,
        source: StreamSource,
    ) -> Self {
        Self {
            url: url.into(),
            original_url: original_url.into(),
            source,
        }
    }

    /// The playable URL
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The URL that was asked to be resolved
    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn source(&self) -> StreamSource {
        self.source
    }

    pub fn into_string(self) -> String {
        self.url
    }
}

impl fmt::Display for ResolvedStreamUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for ResolvedStreamUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// Outcome of resolving a station URL
///
/// `Unavailable` is a normal outcome, not an error: the playlist was fetched
/// but carried nothing playable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Playable(ResolvedStreamUrl),
    Unavailable { playlist_url: String },
}

impl Resolution {
    pub fn is_playable(&self) -> bool {
        matches!(self, Resolution::Playable(_))
    }

    /// The playable URL, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Resolution::Playable(stream) => Some(stream.as_str()),
            Resolution::Unavailable { .. } => None,
        }
    }

    /// Convert to a `Result`, turning `Unavailable` into `RadioError::Unresolvable`
    pub fn into_result(self) -> Result<ResolvedStreamUrl> {
        match self {
            Resolution::Playable(stream) => Ok(stream),
            Resolution::Unavailable { playlist_url } => {
                Err(RadioError::Unresolvable { url: playlist_url })
            }
        }
    }
}
