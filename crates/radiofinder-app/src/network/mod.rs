//! Network operations
//!
//! HTTP client shared by the directory client.

pub mod client;

pub use client::HttpClient;
