//! Application state for the Axum web framework.

use std::sync::Arc;

use crate::cache::ProgramDirectory;
use crate::config::Settings;
use crate::error::AppResult;
use crate::external::sr::SrClient;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Designed for Axum's State extractor; cloning is cheap since the SR
/// client and the program directory are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
}

impl AppState {
    /// Creates the application state from loaded settings.
    ///
    /// The SR client (with its concurrency limiter) and the program
    /// directory cache are constructed exactly once here and injected
    /// into the service layer.
    pub fn new(settings: &Settings) -> AppResult<Self> {
        let client = Arc::new(SrClient::new(&settings.upstream)?);
        let directory = Arc::new(ProgramDirectory::new());

        Ok(Self {
            services: Services::new(client, directory),
        })
    }
}
