//! The reqwest-backed `UserApi` and the settings it is built from.

pub mod api_client;
pub mod config;

pub use api_client::*;
pub use config::*;
