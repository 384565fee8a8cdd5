//! Directory queries
//!
//! Structured parameters for a station search, built per search and then
//! discarded.

use std::fmt;
use std::str::FromStr;

/// Filters for a free-text station search
///
/// Matching itself is done by the directory; nothing is filtered locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub term: String,
    pub exact: bool,
    pub country_code: Option<String>,
}

impl DirectoryQuery {
    /// Substring search for `term` in any country
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            exact: false,
            country_code: None,
        }
    }

    /// Ask for exact name matches
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Restrict to a country. Blank codes mean "all countries".
    pub fn country(mut self, code: Option<&str>) -> Self {
        self.country_code = code
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        self
    }

    /// Query-string parameters for the search endpoint
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("name".to_string(), self.term.clone()),
            ("nameExact".to_string(), self.exact.to_string()),
        ];
        if let Some(code) = &self.country_code {
            params.push(("countrycode".to_string(), code.clone()));
        }
        params
    }
}

/// The `{by}` segment of the `stations/{by}/{search_term}` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationLookup {
    ByName,
    ByNameExact,
    ByCountry,
    ByCountryCodeExact,
    ByCodec,
    ByLanguage,
    ByTag,
    ByTagExact,
    ByUuid,
}

impl StationLookup {
    pub fn as_str(self) -> &'static str {
        match self {
            StationLookup::ByName => "byname",
            StationLookup::ByNameExact => "bynameexact",
            StationLookup::ByCountry => "bycountry",
            StationLookup::ByCountryCodeExact => "bycountrycodeexact",
            StationLookup::ByCodec => "bycodec",
            StationLookup::ByLanguage => "bylanguage",
            StationLookup::ByTag => "bytag",
            StationLookup::ByTagExact => "bytagexact",
            StationLookup::ByUuid => "byuuid",
        }
    }
}

impl fmt::Display for StationLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StationLookup {
    type Err = String;

    /// Accepts `byname` as well as the short `name`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let key = lower.strip_prefix("by").unwrap_or(&lower);
        match key {
            "name" => Ok(StationLookup::ByName),
            "nameexact" => Ok(StationLookup::ByNameExact),
            "country" => Ok(StationLookup::ByCountry),
            "countrycodeexact" | "countrycode" => Ok(StationLookup::ByCountryCodeExact),
            "codec" => Ok(StationLookup::ByCodec),
            "language" => Ok(StationLookup::ByLanguage),
            "tag" => Ok(StationLookup::ByTag),
            "tagexact" => Ok(StationLookup::ByTagExact),
            "uuid" => Ok(StationLookup::ByUuid),
            _ => Err(format!("unknown station lookup '{s}'")),
        }
    }
}

/// Listable directory categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Countries,
    Codecs,
    States,
    Languages,
    Tags,
}

impl Category {
    /// Endpoint name in the template table
    pub fn endpoint(self) -> &'static str {
        match self {
            Category::Countries => "countries",
            Category::Codecs => "codecs",
            Category::States => "states",
            Category::Languages => "languages",
            Category::Tags => "tags",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "countries" | "country" => Ok(Category::Countries),
            "codecs" | "codec" => Ok(Category::Codecs),
            "states" | "state" => Ok(Category::States),
            "languages" | "language" => Ok(Category::Languages),
            "tags" | "tag" => Ok(Category::Tags),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}
