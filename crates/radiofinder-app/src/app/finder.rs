//! Finder session
//!
//! Bundles a station directory and a playlist resolver behind the calls a
//! front-end makes: search, resolve a stream, ask the directory for a
//! station's canonical URL.

use radiofinder::stream::{PlaylistResolver, Resolution};
use tracing::{debug, info};

use crate::data::settings::Settings;
use crate::data::types::Station;
use crate::directory::{DirectoryClient, DirectoryQuery, StationDirectory};
use crate::error::{AppError, Result};

use super::generation::{RequestGeneration, RequestKind, Ticket};

/// A result tagged with the request that produced it
#[derive(Debug)]
pub struct Tracked<T> {
    pub ticket: Ticket,
    pub value: T,
}

/// Search and resolve session
pub struct Finder {
    directory: Box<dyn StationDirectory>,
    resolver: PlaylistResolver,
    searches: RequestGeneration,
    resolves: RequestGeneration,
}

impl Finder {
    pub fn new(directory: Box<dyn StationDirectory>, resolver: PlaylistResolver) -> Self {
        Self {
            directory,
            resolver,
            searches: RequestGeneration::new(RequestKind::Search),
            resolves: RequestGeneration::new(RequestKind::Resolve),
        }
    }

    /// Radio Browser directory and resolver, configured from `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let directory = DirectoryClient::with_config(settings.directory_config())?;
        let resolver = PlaylistResolver::with_config(settings.resolver_config())?;
        Ok(Self::new(Box::new(directory), resolver))
    }

    pub fn directory_name(&self) -> &'static str {
        self.directory.name()
    }

    pub fn resolver(&self) -> &PlaylistResolver {
        &self.resolver
    }

    /// Search the directory by name
    pub fn search_stations(
        &self,
        term: &str,
        exact: bool,
        country_code: Option<&str>,
    ) -> Result<Vec<Station>> {
        self.search(&DirectoryQuery::new(term).exact(exact).country(country_code))
    }

    /// Search the directory. A blank term is rejected without a request.
    pub fn search(&self, query: &DirectoryQuery) -> Result<Vec<Station>> {
        if query.term.trim().is_empty() {
            return Err(AppError::configuration("search term must not be empty"));
        }
        let stations = self.directory.search(query)?;
        info!(
            directory = self.directory.name(),
            term = %query.term,
            count = stations.len(),
            "search finished"
        );
        Ok(stations)
    }

    /// [`Finder::search`], tagged with a fresh ticket
    pub fn search_tracked(&self, query: &DirectoryQuery) -> Tracked<Result<Vec<Station>>> {
        let ticket = self.searches.begin();
        let value = self.search(query);
        if !self.searches.is_current(ticket) {
            debug!(ticket = ticket.value(), "search superseded");
        }
        Tracked { ticket, value }
    }

    /// [`Finder::resolve_stream`], tagged with a fresh ticket
    pub fn resolve_tracked(&self, url: &str) -> Tracked<Result<Resolution>> {
        let ticket = self.resolves.begin();
        let value = self.resolve_stream(url);
        if !self.resolves.is_current(ticket) {
            debug!(ticket = ticket.value(), "resolve superseded");
        }
        Tracked { ticket, value }
    }

    /// Whether `ticket` belongs to the most recent tracked request of its
    /// kind. Searches and resolutions never make each other stale.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        match ticket.kind() {
            RequestKind::Search => self.searches.is_current(ticket),
            RequestKind::Resolve => self.resolves.is_current(ticket),
        }
    }

    /// Drop interest in every outstanding tracked request
    pub fn cancel_pending(&self) {
        self.searches.invalidate();
        self.resolves.invalidate();
    }

    /// Turn a station URL into a playable one.
    ///
    /// `Resolution::Unavailable` is an outcome, not an error: show it as
    /// "station unavailable".
    pub fn resolve_stream(&self, url: &str) -> Result<Resolution> {
        Ok(self.resolver.resolve(url)?)
    }

    /// The directory's own canonical stream URL for a station
    pub fn resolve_playable(&self, station_id: &str) -> Result<String> {
        self.directory.resolve_playable(station_id)
    }

    /// Resolve a station for playback
    pub fn play_url(&self, station: &Station) -> Result<Resolution> {
        debug!(name = %station.name, url = %station.url, "preparing station");
        self.resolve_stream(&station.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiofinder::error::RadioError;
    use radiofinder::stream::StreamSource;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    /// Records queries and answers from a fixed list
    #[derive(Default)]
    struct MockDirectory {
        stations: Vec<Station>,
        delay: Duration,
        queries: Mutex<Vec<DirectoryQuery>>,
    }

    impl StationDirectory for MockDirectory {
        fn name(&self) -> &'static str {
            "Mock"
        }

        fn search(&self, query: &DirectoryQuery) -> Result<Vec<Station>> {
            self.queries.lock().unwrap().push(query.clone());
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            Ok(self
                .stations
                .iter()
                .filter(|s| s.name.to_lowercase().contains(&query.term.to_lowercase()))
                .cloned()
                .collect())
        }

        fn resolve_playable(&self, station_id: &str) -> Result<String> {
            match station_id {
                "known" => Ok("http://canonical.example/live".to_string()),
                _ => Err(AppError::Engine(RadioError::Http {
                    status: 500,
                    url: format!("http://mock/v2/json/url/{station_id}"),
                })),
            }
        }
    }

    /// Finder over a mock that callers can still inspect
    fn finder_with(stations: Vec<Station>) -> (Finder, Arc<MockDirectory>) {
        let mock = Arc::new(MockDirectory {
            stations,
            ..Default::default()
        });
        let finder = Finder::new(Box::new(Arc::clone(&mock)), PlaylistResolver::new().unwrap());
        (finder, mock)
    }

    fn sample() -> Vec<Station> {
        vec![
            Station::new("Jazz, Lounge", "http://jazz.example/live"),
            Station::new("Rock FM", "http://rock.example/list.pls"),
        ]
    }

    #[test]
    fn test_search_passes_query_through() {
        let (finder, mock) = finder_with(sample());
        let stations = finder.search_stations("jazz", true, Some("de")).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "Jazz  Lounge");

        let queries = mock.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].exact);
        assert_eq!(queries[0].country_code.as_deref(), Some("de"));
        assert_eq!(finder.directory_name(), "Mock");
    }

    #[test]
    fn test_empty_term_rejected_without_request() {
        let (finder, mock) = finder_with(sample());
        let err = finder.search_stations("   ", false, None).unwrap_err();
        assert!(matches!(err, AppError::Engine(RadioError::Configuration(_))));
        assert!(mock.queries.lock().unwrap().is_empty());
    }

    #[test]
    fn test_tracked_search_staleness() {
        let (finder, _) = finder_with(sample());
        let first = finder.search_tracked(&DirectoryQuery::new("jazz"));
        let second = finder.search_tracked(&DirectoryQuery::new("rock"));

        assert!(!finder.is_current(first.ticket));
        assert!(finder.is_current(second.ticket));
        assert_eq!(second.value.unwrap()[0].name, "Rock FM");
    }

    #[test]
    fn test_resolve_does_not_stale_search() {
        let (finder, _) = finder_with(sample());
        let search = finder.search_tracked(&DirectoryQuery::new("jazz"));
        let resolve = finder.resolve_tracked("http://jazz.example/live");
        assert!(finder.is_current(search.ticket));
        assert!(finder.is_current(resolve.ticket));

        let later = finder.resolve_tracked("http://rock.example/live");
        assert!(!finder.is_current(resolve.ticket));
        assert!(finder.is_current(later.ticket));
        assert!(finder.is_current(search.ticket));

        finder.cancel_pending();
        assert!(!finder.is_current(search.ticket));
        assert!(!finder.is_current(later.ticket));
    }

    #[test]
    fn test_resolve_during_slow_search_keeps_search_current() {
        let mock = Arc::new(MockDirectory {
            stations: sample(),
            delay: Duration::from_millis(200),
            ..Default::default()
        });
        let finder = Arc::new(Finder::new(
            Box::new(Arc::clone(&mock)),
            PlaylistResolver::new().unwrap(),
        ));

        let searching = {
            let finder = Arc::clone(&finder);
            thread::spawn(move || finder.search_tracked(&DirectoryQuery::new("jazz")))
        };
        while mock.queries.lock().unwrap().is_empty() {
            thread::sleep(Duration::from_millis(5));
        }
        let play = finder.resolve_tracked("http://rock.example/live");
        let search = searching.join().unwrap();

        assert!(search.value.is_ok());
        assert!(finder.is_current(search.ticket));
        assert!(finder.is_current(play.ticket));
    }

    #[test]
    fn test_resolve_playable_delegates() {
        let (finder, _) = finder_with(Vec::new());
        assert_eq!(
            finder.resolve_playable("known").unwrap(),
            "http://canonical.example/live"
        );
        assert_eq!(finder.resolve_playable("other").unwrap_err().status(), Some(500));
    }

    #[test]
    fn test_play_url_direct_station() {
        let (finder, _) = finder_with(Vec::new());
        let station = Station::new("Jazz", "http://jazz.example/live");
        let Resolution::Playable(stream) = finder.play_url(&station).unwrap() else {
            panic!("expected a playable stream");
        };
        assert_eq!(stream.as_str(), "http://jazz.example/live");
        assert_eq!(stream.source(), StreamSource::Direct);
    }

    #[test]
    fn test_resolve_stream_network_error_is_typed() {
        let (finder, _) = finder_with(Vec::new());
        let err = finder
            .resolve_stream("http://invalid.invalid.invalid/list.pls")
            .unwrap_err();
        assert!(matches!(err, AppError::Engine(RadioError::Network(_))));
    }
}
