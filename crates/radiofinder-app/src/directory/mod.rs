//! Station directory
//!
//! Endpoint templates, query parameters, wire types, and the blocking
//! directory client.

pub mod client;
pub mod endpoint;
pub mod query;
pub mod traits;
pub mod types;

pub use client::DirectoryClient;
pub use endpoint::{build_endpoint, EndpointBuilder, EndpointTemplate, ENDPOINTS};
pub use query::{Category, DirectoryQuery, StationLookup};
pub use traits::StationDirectory;
pub use types::{DirectoryEntry, Payload};
