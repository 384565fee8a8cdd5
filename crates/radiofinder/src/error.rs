//! Error types for Radiofinder
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for the radiofinder engine
#[derive(Error, Debug)]
pub enum RadioError {
    /// Transport-level failure (DNS, connect, timeout, bad body)
    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    /// The remote answered with a status other than 200
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// Bad endpoint name, arity or parameter set
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Playlist fetched but no playable URL inside
    #[error("No playable URL found in {url}")]
    Unresolvable { url: String },
}

impl RadioError {
    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            RadioError::Http { status, .. } => Some(*status),
            RadioError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the UI should show this as "station unavailable" rather than a failure
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RadioError::Unresolvable { .. })
    }
}

/// Result type alias for Radiofinder
pub type Result<T> = std::result::Result<T, RadioError>;

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    format!("Network error: {e}")
}
