//! Stream URL handling
//!
//! Classifies station URLs, fetches PLS/M3U playlist containers and extracts
//! the first embedded stream URL.

pub mod playlist;
pub mod resolver;
pub mod types;

pub use playlist::{check_playlist_type, strip_query_suffix, PlaylistCheck};
pub use resolver::PlaylistResolver;
pub use types::{Resolution, ResolvedStreamUrl, StreamSource};
