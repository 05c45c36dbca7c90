//! srlatest library
//!
//! Core modules for the latest-episode API, a thin aggregation layer in
//! front of the Sveriges Radio open API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod server;
pub mod services;
pub mod state;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
