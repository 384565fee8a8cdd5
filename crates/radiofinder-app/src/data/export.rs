//! M3U export of search results

use std::path::Path;

use crate::data::storage;
use crate::data::types::Station;
use crate::error::Result;

/// Header line of an extended M3U file
pub const M3U_HEADER: &str = "#EXTM3U\n";

/// Render stations as an extended M3U playlist.
///
/// Entries are numbered from 1. `None` when there is nothing to export.
pub fn to_m3u(stations: &[Station]) -> Option<String> {
    if stations.is_empty() {
        return None;
    }

    let mut playlist = String::from(M3U_HEADER);
    for (i, station) in stations.iter().enumerate() {
        playlist.push_str(&format!(
            "#EXTINF:{},{}\n{}\n",
            i + 1,
            station.name,
            station.url
        ));
    }
    Some(playlist)
}

/// Write stations to an `.m3u` file. Returns false if there was nothing to write.
pub fn save_m3u(path: &Path, stations: &[Station]) -> Result<bool> {
    match to_m3u(stations) {
        Some(playlist) => {
            storage::write_text(path, &playlist)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
