//! Station directory trait
//!
//! The seam between the finder session and a concrete directory service.

use std::sync::Arc;

use crate::data::types::Station;
use crate::error::Result;

use super::client::DirectoryClient;
use super::query::DirectoryQuery;

/// A source of radio station listings
pub trait StationDirectory: Send + Sync {
    /// Display name (e.g., "Radio Browser")
    fn name(&self) -> &'static str;

    /// Search for stations. Matching is up to the service.
    fn search(&self, query: &DirectoryQuery) -> Result<Vec<Station>>;

    /// The service's canonical stream URL for a station id
    fn resolve_playable(&self, station_id: &str) -> Result<String>;
}

impl StationDirectory for DirectoryClient {
    fn name(&self) -> &'static str {
        "Radio Browser"
    }

    fn search(&self, query: &DirectoryQuery) -> Result<Vec<Station>> {
        DirectoryClient::search(self, query)
    }

    fn resolve_playable(&self, station_id: &str) -> Result<String> {
        DirectoryClient::resolve_playable(self, station_id)
    }
}

impl<T: StationDirectory + ?Sized> StationDirectory for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn search(&self, query: &DirectoryQuery) -> Result<Vec<Station>> {
        (**self).search(query)
    }

    fn resolve_playable(&self, station_id: &str) -> Result<String> {
        (**self).resolve_playable(station_id)
    }
}
