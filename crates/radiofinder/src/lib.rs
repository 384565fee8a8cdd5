//! Radiofinder: internet radio stream resolution
//!
//! Turns station URLs into directly playable stream URLs, following one
//! level of PLS/M3U playlist indirection.
//!
//! ## Quick start
//!
//! ```no_run
//! use radiofinder::stream::{PlaylistResolver, Resolution};
//!
//! let resolver = PlaylistResolver::new()?;
//! match resolver.resolve("http://example.com/listen.pls")? {
//!     Resolution::Playable(stream) => println!("{stream}"),
//!     Resolution::Unavailable { .. } => println!("station unavailable"),
//! }
//! # Ok::<(), radiofinder::error::RadioError>(())
//! ```

pub mod config;
pub mod error;
pub mod stream;
