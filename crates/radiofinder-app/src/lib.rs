//! Radiofinder App Services
//!
//! Station directory client, saved channel list, and the search/resolve
//! session a front-end talks to. Depends on the `radiofinder` engine crate.

pub mod app;
pub mod config;
pub mod data;
pub mod directory;
pub mod error;
pub mod network;
