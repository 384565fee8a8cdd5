//! Data persistence
//!
//! Station records, saved channels, M3U export, and settings.

pub mod channels;
pub mod export;
pub mod settings;
pub mod storage;
pub mod types;

// Re-export common types
pub use channels::ChannelList;
pub use export::{save_m3u, to_m3u};
pub use settings::Settings;
pub use types::{sanitize_name, ChannelListEntry, Station};
