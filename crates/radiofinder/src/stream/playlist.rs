//! Playlist containers (PLS/M3U)
//!
//! URL classification, share-link normalization, and the scanners that pull a
//! stream URL out of a fetched playlist body.

use reqwest::StatusCode;
use tracing::debug;

use crate::config::ScanStrategy;
use crate::error::{RadioError, Result};

/// Result of checking a URL's playlist type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistCheck {
    Pls,
    M3u,
    NotPlaylist,
}

/// Check what type of playlist a URL points to based on extension.
///
/// `.m3u8` is HLS, which players consume directly, so it is not a playlist
/// container here.
pub fn check_playlist_type(url: &str) -> PlaylistCheck {
    let lower = strip_query_suffix(url).to_lowercase();
    if lower.ends_with(".pls") || lower.contains(".pls?") {
        PlaylistCheck::Pls
    } else if lower.ends_with(".m3u") || lower.contains(".m3u?") {
        PlaylistCheck::M3u
    } else {
        PlaylistCheck::NotPlaylist
    }
}

/// Drop everything from the first `&` onward.
///
/// Shared links sometimes arrive as `list.pls&token=...` with no `?`.
pub fn strip_query_suffix(url: &str) -> &str {
    url.split_once('&').map_or(url, |(head, _)| head)
}

/// Extract the base URL (directory) from a full URL
pub fn get_base_url(url: &str) -> &str {
    url.rsplit_once('/').map_or("", |(base, _)| base)
}

/// Make a URI absolute, using base_url if the URI is relative
pub fn make_absolute_url(uri: &str, base_url: &str) -> String {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        uri.to_string()
    } else {
        format!("{}/{}", base_url, uri)
    }
}

/// Non-empty lines of a playlist body, broken at `\n`, `\r\n` or a lone `\r`
fn playlist_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split(['\n', '\r']).filter(|line| !line.is_empty())
}

/// First line containing `http`, cut to begin at that substring.
///
/// Not a parser: comment lines and `FileN=` structure are ignored, and the
/// first match wins.
pub fn first_http_line(content: &str) -> Option<&str> {
    playlist_lines(content).find_map(|line| {
        line.find("http")
            .map(|pos| line[pos..].trim_end())
            .filter(|url| !url.is_empty())
    })
}

/// Parse a PLS playlist and return the first `FileN=` stream URL
pub fn parse_pls(content: &str) -> Option<String> {
    playlist_lines(content).find_map(|line| {
        let (key, value) = line.trim().split_once('=')?;
        let key = key.trim().to_lowercase();
        let value = value.trim();
        let is_file_key = key
            .strip_prefix("file")
            .is_some_and(|n| n.chars().all(|c| c.is_ascii_digit()));
        (is_file_key && value.starts_with("http")).then(|| value.to_string())
    })
}

/// Parse an M3U playlist and return the first entry, made absolute
pub fn parse_m3u(content: &str, base_url: &str) -> Option<String> {
    playlist_lines(content)
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| make_absolute_url(line, base_url))
}

/// Pull the stream URL out of a playlist body
pub fn scan_playlist(
    content: &str,
    kind: PlaylistCheck,
    playlist_url: &str,
    strategy: ScanStrategy,
) -> Option<String> {
    match strategy {
        ScanStrategy::FirstHttpLine => first_http_line(content).map(str::to_string),
        ScanStrategy::Structured => match kind {
            PlaylistCheck::Pls => parse_pls(content),
            PlaylistCheck::M3u => parse_m3u(content, get_base_url(playlist_url)),
            PlaylistCheck::NotPlaylist => None,
        },
    }
}

/// Fetch a playlist body. Anything but 200 is an error.
pub(crate) fn fetch_playlist(client: &reqwest::blocking::Client, url: &str) -> Result<String> {
    debug!(url, "fetching playlist");
    let response = client.get(url).send()?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(RadioError::Http {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.text()?)
}
