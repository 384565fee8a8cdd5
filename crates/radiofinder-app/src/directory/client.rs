//! Station directory client
//!
//! Blocking client for the Radio Browser directory
//! (<https://www.radio-browser.info/>). Every call is one GET against
//! `base_url + endpoint`; nothing is retried.

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::directory::PLAYABLE_API_VERSION;
use crate::config::{DirectoryConfig, ResponseFormat};
use crate::data::types::Station;
use crate::error::{AppError, Result};
use crate::network::HttpClient;

use super::endpoint::EndpointBuilder;
use super::query::{Category, DirectoryQuery, StationLookup};
use super::types::{stations_from, DirectoryEntry, Payload, PlayableResponse, RbStation};

/// Radio Browser directory client
pub struct DirectoryClient {
    http: HttpClient,
    config: DirectoryConfig,
}

impl DirectoryClient {
    /// Create a client for the default server
    pub fn new() -> Result<Self> {
        Self::with_config(DirectoryConfig::default())
    }

    /// Create a client with explicit settings (mirror, test server, format)
    pub fn with_config(config: DirectoryConfig) -> Result<Self> {
        let http = HttpClient::new(&config.user_agent, config.connect_timeout, config.timeout)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Build a full API URL from an endpoint path
    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Build an endpoint path in the configured format
    pub fn build_endpoint(&self, name: &str, parts: &[(&str, &str)]) -> Result<String> {
        EndpointBuilder::new(self.config.format).build(name, parts)
    }

    /// Raw request: GET `endpoint` with `params`.
    ///
    /// JSON responses are parsed; XML bodies are returned as text.
    pub fn request(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        format: ResponseFormat,
    ) -> Result<Payload> {
        let url = self.url(endpoint);
        let content_type = format.content_type();
        match format {
            ResponseFormat::Json => Ok(Payload::Json(self.http.get_json(
                &url,
                params,
                &content_type,
            )?)),
            ResponseFormat::Xml => Ok(Payload::Text(self.http.get_text(
                &url,
                params,
                &content_type,
            )?)),
        }
    }

    /// Typed calls always speak JSON, whatever the configured format
    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        self.http.get_json(&url, params, &ResponseFormat::Json.content_type())
    }

    fn json_endpoint(&self, name: &str, parts: &[(&str, &str)]) -> Result<String> {
        EndpointBuilder::new(ResponseFormat::Json).build(name, parts)
    }

    /// Free-text station search
    pub fn search(&self, query: &DirectoryQuery) -> Result<Vec<Station>> {
        let endpoint = EndpointBuilder::new(ResponseFormat::Json).station_search()?;
        let params = query.to_params();
        info!(
            term = %query.term,
            exact = query.exact,
            country = ?query.country_code,
            "searching stations"
        );

        let records: Vec<RbStation> = self.get_json(&endpoint, &params)?;
        let stations = stations_from(records);
        debug!(count = stations.len(), "search results");
        Ok(stations)
    }

    /// Free-text station search from loose arguments
    pub fn search_stations(
        &self,
        term: &str,
        exact: bool,
        country_code: Option<&str>,
    ) -> Result<Vec<Station>> {
        self.search(&DirectoryQuery::new(term).exact(exact).country(country_code))
    }

    /// `stations/{by}/{term}`
    pub fn stations_by(&self, lookup: StationLookup, term: &str) -> Result<Vec<Station>> {
        let endpoint =
            EndpointBuilder::new(ResponseFormat::Json).stations_by(lookup.as_str(), term)?;
        let records: Vec<RbStation> = self.get_json(&endpoint, &[])?;
        Ok(stations_from(records))
    }

    /// Every station, optionally narrowed by query params (`limit`, `order`, ...)
    pub fn all_stations(&self, params: &[(String, String)]) -> Result<Vec<Station>> {
        let endpoint = self.json_endpoint("stations", &[])?;
        let records: Vec<RbStation> = self.get_json(&endpoint, params)?;
        Ok(stations_from(records))
    }

    /// List a category, optionally filtered by name prefix
    pub fn list(&self, category: Category, filter: Option<&str>) -> Result<Vec<DirectoryEntry>> {
        let endpoint = match filter.map(str::trim).filter(|f| !f.is_empty()) {
            Some(filter) => self.json_endpoint(category.endpoint(), &[("filter", filter)])?,
            None => self.json_endpoint(category.endpoint(), &[])?,
        };
        let entries: Vec<DirectoryEntry> = self.get_json(&endpoint, &[])?;
        Ok(entries.into_iter().filter(|e| !e.name.is_empty()).collect())
    }

    /// States of one country matching `filter`
    pub fn states_in(&self, country: &str, filter: &str) -> Result<Vec<DirectoryEntry>> {
        let endpoint = self.json_endpoint("states", &[("country", country), ("filter", filter)])?;
        let entries: Vec<DirectoryEntry> = self.get_json(&endpoint, &[])?;
        Ok(entries.into_iter().filter(|e| !e.name.is_empty()).collect())
    }

    /// Ask the directory for its canonical stream URL of a station
    pub fn resolve_playable(&self, station_id: &str) -> Result<String> {
        let station_id = station_id.trim();
        if station_id.is_empty() {
            return Err(AppError::configuration("station id must not be empty"));
        }

        let endpoint = EndpointBuilder::new(ResponseFormat::Json)
            .playable_station(PLAYABLE_API_VERSION, station_id)?;
        let response: PlayableResponse = self.get_json(&endpoint, &[])?;

        if !response.ok || response.url.trim().is_empty() {
            let reason = if response.message.is_empty() {
                "no url returned".to_string()
            } else {
                response.message
            };
            return Err(AppError::NotFound(format!("station {station_id}: {reason}")));
        }

        debug!(station_id, url = %response.url, "directory resolved station");
        Ok(response.url.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_at(base: &str) -> DirectoryClient {
        DirectoryClient::with_config(DirectoryConfig::default().with_base_url(base)).unwrap()
    }

    #[test]
    fn test_url_join_trims_slashes() {
        assert_eq!(
            client_at("http://host/").url("json/tags"),
            "http://host/json/tags"
        );
        assert_eq!(
            client_at("http://host").url("/json/tags"),
            "http://host/json/tags"
        );
    }

    #[test]
    fn test_build_endpoint_uses_configured_format() {
        let mut config = DirectoryConfig::default();
        config.format = ResponseFormat::Xml;
        let client = DirectoryClient::with_config(config).unwrap();
        assert_eq!(client.build_endpoint("countries", &[]).unwrap(), "xml/countries");
    }

    #[test]
    fn test_empty_station_id_rejected_without_request() {
        let client = client_at("http://invalid.invalid.invalid");
        assert!(matches!(
            client.resolve_playable("  "),
            Err(AppError::Engine(radiofinder::error::RadioError::Configuration(_)))
        ));
    }

    #[test]
    #[ignore]
    fn integration_search_live_directory() {
        let client = DirectoryClient::new().unwrap();
        let stations = client.search_stations("jazz", false, Some("DE")).unwrap();
        assert!(stations.iter().all(|s| !s.name.contains(',')));
    }
}
