//! Search and resolve session
//!
//! The surface a front-end drives: station search, stream resolution, and
//! per-kind generation counters for dropping stale responses.

pub mod finder;
pub mod generation;

pub use finder::{Finder, Tracked};
pub use generation::{RequestGeneration, RequestKind, Ticket};
