//! Configuration for the radiofinder engine
//!
//! Compile-time defaults live in the const modules; the values actually used
//! at runtime are carried by [`ResolverConfig`].

use std::time::Duration;

/// Network-related configuration
pub mod network {
    /// Browser-like user agent for playlist fetches.
    /// Some stream hosts reject library default agents.
    pub const PLAYLIST_USER_AGENT: &str =
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.12; rv:55.0) Gecko/20100101 Firefox/55.0";

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// How a fetched playlist body is scanned for a stream URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStrategy {
    /// First line containing `http`, cut to start at that substring
    #[default]
    FirstHttpLine,
    /// `FileN=` entries for PLS, non-comment entries for M3U
    Structured,
}

impl std::str::FromStr for ScanStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-http-line" | "heuristic" => Ok(ScanStrategy::FirstHttpLine),
            "structured" => Ok(ScanStrategy::Structured),
            other => Err(format!("unknown scan strategy '{other}'")),
        }
    }
}

/// Runtime configuration for [`crate::stream::PlaylistResolver`]
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub strategy: ScanStrategy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            user_agent: network::PLAYLIST_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(network::CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(network::READ_TIMEOUT_SECS),
            strategy: ScanStrategy::default(),
        }
    }
}

impl ResolverConfig {
    /// Use a different scan strategy
    pub fn with_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
