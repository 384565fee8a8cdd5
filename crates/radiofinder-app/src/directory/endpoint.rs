//! Directory endpoint templates
//!
//! Every endpoint is a fixed path template keyed by name and by the list of
//! path parameters it needs. A template's arity counts the endpoint name
//! itself plus its parameters; the response format is filled in by the
//! builder and is never a supplied part.

use tracing::debug;

use crate::config::ResponseFormat;
use crate::error::{AppError, Result};

/// One path template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointTemplate {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub template: &'static str,
}

impl EndpointTemplate {
    /// Endpoint name plus path parameters
    pub fn arity(&self) -> usize {
        self.params.len() + 1
    }

    fn render(&self, format: ResponseFormat, parts: &[(&str, &str)]) -> String {
        let mut path = self.template.replace("{fmt}", format.as_str());
        for (key, value) in parts {
            path = path.replace(&format!("{{{key}}}"), &urlencoding::encode(value));
        }
        path
    }
}

const fn endpoint(
    name: &'static str,
    params: &'static [&'static str],
    template: &'static str,
) -> EndpointTemplate {
    EndpointTemplate {
        name,
        params,
        template,
    }
}

/// All known endpoints
pub const ENDPOINTS: &[EndpointTemplate] = &[
    endpoint("countries", &[], "{fmt}/countries"),
    endpoint("countries", &["filter"], "{fmt}/countries/{filter}"),
    endpoint("codecs", &[], "{fmt}/codecs"),
    endpoint("codecs", &["filter"], "{fmt}/codecs/{filter}"),
    endpoint("states", &[], "{fmt}/states"),
    endpoint("states", &["filter"], "{fmt}/states/{filter}"),
    endpoint("states", &["country", "filter"], "{fmt}/states/{country}/{filter}"),
    endpoint("languages", &[], "{fmt}/languages"),
    endpoint("languages", &["filter"], "{fmt}/languages/{filter}"),
    endpoint("tags", &[], "{fmt}/tags"),
    endpoint("tags", &["filter"], "{fmt}/tags/{filter}"),
    endpoint("stations", &[], "{fmt}/stations"),
    endpoint("stations", &["by", "search_term"], "{fmt}/stations/{by}/{search_term}"),
    endpoint("playable_station", &["ver", "station_id"], "{ver}/{fmt}/url/{station_id}"),
    endpoint("station_search", &[], "{fmt}/stations/search"),
];

/// Look up the template for `name` at `arity`
pub fn find_template(name: &str, arity: usize) -> Result<&'static EndpointTemplate> {
    let mut known = ENDPOINTS.iter().filter(|t| t.name == name).peekable();
    if known.peek().is_none() {
        return Err(AppError::configuration(format!("unknown endpoint '{name}'")));
    }
    known.find(|t| t.arity() == arity).ok_or_else(|| {
        AppError::configuration(format!("endpoint '{name}' has no template of arity {arity}"))
    })
}

/// Builds endpoint paths for one response format
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointBuilder {
    format: ResponseFormat,
}

impl EndpointBuilder {
    pub fn new(format: ResponseFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    /// Build the path for `name` from named path parts.
    ///
    /// The template is chosen by arity (`1 + parts.len()`); the supplied part
    /// names must then match that template's parameters exactly.
    pub fn build(&self, name: &str, parts: &[(&str, &str)]) -> Result<String> {
        let template = find_template(name, parts.len() + 1)?;

        for (i, (key, _)) in parts.iter().enumerate() {
            if !template.params.iter().any(|p| p == key) {
                return Err(AppError::configuration(format!(
                    "endpoint '{name}' does not take '{key}' (expects {:?})",
                    template.params
                )));
            }
            if parts[..i].iter().any(|(earlier, _)| earlier == key) {
                return Err(AppError::configuration(format!(
                    "endpoint '{name}' got '{key}' twice"
                )));
            }
        }

        let path = template.render(self.format, parts);
        debug!(name, %path, "built endpoint");
        Ok(path)
    }

    /// `stations/search`
    pub fn station_search(&self) -> Result<String> {
        self.build("station_search", &[])
    }

    /// `stations/{by}/{search_term}`
    pub fn stations_by(&self, by: &str, search_term: &str) -> Result<String> {
        self.build("stations", &[("by", by), ("search_term", search_term)])
    }

    /// `{ver}/{fmt}/url/{station_id}`
    pub fn playable_station(&self, ver: &str, station_id: &str) -> Result<String> {
        self.build("playable_station", &[("ver", ver), ("station_id", station_id)])
    }
}

/// Build an endpoint path in the given format
pub fn build_endpoint(
    format: ResponseFormat,
    name: &str,
    parts: &[(&str, &str)],
) -> Result<String> {
    EndpointBuilder::new(format).build(name, parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiofinder::error::RadioError;

    fn json() -> EndpointBuilder {
        EndpointBuilder::new(ResponseFormat::Json)
    }

    fn is_configuration_error(result: Result<String>) -> bool {
        matches!(result, Err(AppError::Engine(RadioError::Configuration(_))))
    }

    // ---- table consistency ----

    #[test]
    fn every_template_mentions_exactly_its_params() {
        for t in ENDPOINTS {
            assert!(t.template.contains("{fmt}"), "{} lacks {{fmt}}", t.template);
            for p in t.params {
                assert!(t.template.contains(&format!("{{{p}}}")), "{} lacks {p}", t.template);
            }
            let placeholders = t.template.matches('{').count();
            assert_eq!(placeholders, t.params.len() + 1, "{}", t.template);
        }
    }

    #[test]
    fn no_two_templates_share_name_and_arity() {
        for (i, a) in ENDPOINTS.iter().enumerate() {
            for b in &ENDPOINTS[i + 1..] {
                assert!(
                    !(a.name == b.name && a.arity() == b.arity()),
                    "{} arity {} defined twice",
                    a.name,
                    a.arity()
                );
            }
        }
    }

    // ---- every (name, arity) pair ----

    #[test]
    fn countries_paths() {
        assert_eq!(json().build("countries", &[]).unwrap(), "json/countries");
        assert_eq!(
            json().build("countries", &[("filter", "germany")]).unwrap(),
            "json/countries/germany"
        );
    }

    #[test]
    fn codecs_paths() {
        assert_eq!(json().build("codecs", &[]).unwrap(), "json/codecs");
        assert_eq!(
            json().build("codecs", &[("filter", "mp3")]).unwrap(),
            "json/codecs/mp3"
        );
    }

    #[test]
    fn states_paths() {
        assert_eq!(json().build("states", &[]).unwrap(), "json/states");
        assert_eq!(
            json().build("states", &[("filter", "bavaria")]).unwrap(),
            "json/states/bavaria"
        );
        assert_eq!(
            json()
                .build("states", &[("country", "germany"), ("filter", "bavaria")])
                .unwrap(),
            "json/states/germany/bavaria"
        );
    }

    #[test]
    fn languages_paths() {
        assert_eq!(json().build("languages", &[]).unwrap(), "json/languages");
        assert_eq!(
            json().build("languages", &[("filter", "french")]).unwrap(),
            "json/languages/french"
        );
    }

    #[test]
    fn tags_paths() {
        assert_eq!(json().build("tags", &[]).unwrap(), "json/tags");
        assert_eq!(
            json().build("tags", &[("filter", "jazz")]).unwrap(),
            "json/tags/jazz"
        );
    }

    #[test]
    fn stations_paths() {
        assert_eq!(json().build("stations", &[]).unwrap(), "json/stations");
        assert_eq!(
            json()
                .build("stations", &[("by", "byname"), ("search_term", "jazz")])
                .unwrap(),
            "json/stations/byname/jazz"
        );
    }

    #[test]
    fn playable_station_path() {
        assert_eq!(
            json()
                .build("playable_station", &[("ver", "v2"), ("station_id", "abc-123")])
                .unwrap(),
            "v2/json/url/abc-123"
        );
    }

    #[test]
    fn station_search_path() {
        assert_eq!(json().build("station_search", &[]).unwrap(), "json/stations/search");
    }

    #[test]
    fn part_order_does_not_matter() {
        assert_eq!(
            json()
                .build("states", &[("filter", "bavaria"), ("country", "germany")])
                .unwrap(),
            "json/states/germany/bavaria"
        );
    }

    #[test]
    fn xml_format_substituted() {
        let xml = EndpointBuilder::new(ResponseFormat::Xml);
        assert_eq!(xml.build("tags", &[]).unwrap(), "xml/tags");
        assert_eq!(
            xml.playable_station("v2", "id").unwrap(),
            "v2/xml/url/id"
        );
    }

    #[test]
    fn parts_are_percent_encoded() {
        assert_eq!(
            json().stations_by("byname", "Radio One/FM").unwrap(),
            "json/stations/byname/Radio%20One%2FFM"
        );
    }

    // ---- failures ----

    #[test]
    fn unsupported_arity_fails() {
        assert!(is_configuration_error(json().build("stations", &[("by", "byname")])));
        assert!(is_configuration_error(json().build("station_search", &[("x", "y")])));
        assert!(is_configuration_error(json().build("playable_station", &[])));
        assert!(is_configuration_error(
            json().build("countries", &[("filter", "a"), ("country", "b")])
        ));
    }

    #[test]
    fn unknown_name_fails() {
        assert!(is_configuration_error(json().build("podcasts", &[])));
    }

    #[test]
    fn wrong_part_name_fails() {
        assert!(is_configuration_error(json().build("tags", &[("tag", "jazz")])));
    }

    #[test]
    fn duplicate_part_fails() {
        assert!(is_configuration_error(
            json().build("states", &[("filter", "a"), ("filter", "b")])
        ));
    }

    #[test]
    fn error_message_names_endpoint_and_arity() {
        let err = json().build("stations", &[("by", "byname")]).unwrap_err();
        assert!(err.to_string().contains("'stations'"));
        assert!(err.to_string().contains("arity 2"));
    }

    #[test]
    fn free_function_matches_builder() {
        assert_eq!(
            build_endpoint(ResponseFormat::Json, "tags", &[("filter", "rock")]).unwrap(),
            json().build("tags", &[("filter", "rock")]).unwrap()
        );
    }
}
