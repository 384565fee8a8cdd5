//! Configuration for radiofinder app services
//!
//! Defaults live in the const modules. [`DirectoryConfig`] is the value
//! handed to the directory client at construction.

use std::time::Duration;

use radiofinder::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "radiofinder";
}

/// Directory-related configuration
pub mod directory {
    /// Default Radio Browser API server
    pub const DEFAULT_BASE_URL: &str = "https://de1.api.radio-browser.info/";

    /// User agent the directory sees
    pub const USER_AGENT: &str = "getRadiolist/1.0";

    /// API version segment for the playable-URL endpoint
    pub const PLAYABLE_API_VERSION: &str = "v2";
}

/// Persistence-related configuration
pub mod files {
    /// Settings file name
    pub const SETTINGS_FILE: &str = "settings.json";

    /// Saved channel list file name
    pub const CHANNELS_FILE: &str = "channels.ini";
}

/// Response body format requested from the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Path segment and content-type subtype
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
        }
    }

    /// Value of the `Content-Type` request header
    pub fn content_type(self) -> String {
        format!("application/{}", self.as_str())
    }
}

impl std::str::FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "xml" => Ok(ResponseFormat::Xml),
            other => Err(format!("unsupported response format '{other}'")),
        }
    }
}

/// Runtime configuration for [`crate::directory::DirectoryClient`]
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub format: ResponseFormat,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: directory::DEFAULT_BASE_URL.to_string(),
            format: ResponseFormat::default(),
            user_agent: directory::USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(READ_TIMEOUT_SECS),
        }
    }
}

impl DirectoryConfig {
    /// Point at a different server (mirror or test double)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
