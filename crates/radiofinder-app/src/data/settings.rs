//! Application settings management
//!
//! User preferences, and the explicit configuration values built from them.

use std::path::{Path, PathBuf};

use radiofinder::config::{ResolverConfig, ScanStrategy};
use serde::{Deserialize, Serialize};

use crate::config::directory::DEFAULT_BASE_URL;
use crate::config::files::{CHANNELS_FILE, SETTINGS_FILE};
use crate::config::DirectoryConfig;
use crate::data::storage;
use crate::error::Result;

/// Settings file format version for migrations
const SETTINGS_VERSION: u32 = 1;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    // === Directory ===
    /// Directory API server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    // === Search ===
    /// Country code applied when a search gives none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_country: Option<String>,

    /// Ask the directory for exact name matches by default
    #[serde(default)]
    pub exact_match: bool,

    // === Playback ===
    /// How playlist bodies are scanned
    #[serde(default)]
    pub playlist_scan: PlaylistScan,

    // === Files ===
    /// Saved channel list location (defaults to the config directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels_file: Option<PathBuf>,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            base_url: default_base_url(),
            default_country: None,
            exact_match: false,
            playlist_scan: PlaylistScan::default(),
            channels_file: None,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from default storage location
    pub fn load() -> Result<Self> {
        let path = storage::data_path(SETTINGS_FILE)?;
        Self::load_from(&path)
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(storage::load_from::<Settings>(path)?.unwrap_or_default())
    }

    /// Save settings to default storage location
    pub fn save(&self) -> Result<()> {
        let path = storage::data_path(SETTINGS_FILE)?;
        self.save_to(&path)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// Directory client configuration
    pub fn directory_config(&self) -> DirectoryConfig {
        DirectoryConfig::default().with_base_url(&self.base_url)
    }

    /// Playlist resolver configuration
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::default().with_strategy(self.playlist_scan.into())
    }

    /// Where the saved channel list lives
    pub fn channels_path(&self) -> Result<PathBuf> {
        match &self.channels_file {
            Some(path) => Ok(path.clone()),
            None => storage::data_path(CHANNELS_FILE),
        }
    }
}

/// Serializable form of [`ScanStrategy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaylistScan {
    #[default]
    FirstHttpLine,
    Structured,
}

impl From<PlaylistScan> for ScanStrategy {
    fn from(scan: PlaylistScan) -> Self {
        match scan {
            PlaylistScan::FirstHttpLine => ScanStrategy::FirstHttpLine,
            PlaylistScan::Structured => ScanStrategy::Structured,
        }
    }
}
