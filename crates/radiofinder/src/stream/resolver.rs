//! Playlist resolver
//!
//! Turns a station URL into a `Resolution`: direct URLs pass straight
//! through, `.pls`/`.m3u` containers are fetched once and scanned.

use tracing::{debug, info, warn};

use crate::config::ResolverConfig;
use crate::error::{RadioError, Result};
use crate::stream::playlist::{
    check_playlist_type, fetch_playlist, scan_playlist, strip_query_suffix, PlaylistCheck,
};
use crate::stream::types::{Resolution, ResolvedStreamUrl, StreamSource};

/// Resolves station URLs into playable stream URLs
///
/// Blocks the calling thread for the duration of a playlist fetch. Nested
/// playlists are not followed.
pub struct PlaylistResolver {
    client: reqwest::blocking::Client,
    config: ResolverConfig,
}

impl PlaylistResolver {
    /// Create a resolver with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(ResolverConfig::default())
    }

    /// Create a resolver with explicit settings
    pub fn with_config(config: ResolverConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a station URL.
    ///
    /// 0. Blank URL → `RadioError::Configuration`, no request
    /// 1. Non-playlist URL → `Playable` as given, no request
    /// 2. Strip anything from the first `&`
    /// 3. Fetch the playlist (non-200 → `RadioError::Http`)
    /// 4. Scan the body → `Playable`, or `Unavailable` if nothing usable
    pub fn resolve(&self, url: &str) -> Result<Resolution> {
        let url = url.trim();
        if url.is_empty() {
            return Err(RadioError::Configuration("station URL must not be empty".into()));
        }
        let kind = check_playlist_type(url);
        let source = match kind {
            PlaylistCheck::NotPlaylist => {
                debug!(url, "direct stream URL");
                return Ok(Resolution::Playable(ResolvedStreamUrl::direct(url)));
            }
            PlaylistCheck::Pls => StreamSource::Pls,
            PlaylistCheck::M3u => StreamSource::M3u,
        };

        let playlist_url = strip_query_suffix(url);
        info!(playlist_url, %source, "resolving playlist");
        let content = fetch_playlist(&self.client, playlist_url)?;

        let Some(stream_url) = scan_playlist(&content, kind, playlist_url, self.config.strategy)
        else {
            warn!(playlist_url, "no playable URL in playlist");
            return Ok(Resolution::Unavailable {
                playlist_url: playlist_url.to_string(),
            });
        };

        if check_playlist_type(&stream_url) != PlaylistCheck::NotPlaylist {
            warn!(playlist_url, %stream_url, "playlist points at another playlist");
            return Ok(Resolution::Unavailable {
                playlist_url: playlist_url.to_string(),
            });
        }

        debug!(playlist_url, %stream_url, "resolved");
        Ok(Resolution::Playable(ResolvedStreamUrl::from_playlist(
            stream_url,
            url,
            source,
        )))
    }
}
