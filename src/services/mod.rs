//! Service layer for business logic operations.

mod episode_service;

pub use episode_service::{EpisodeService, LatestEpisode};

use std::sync::Arc;

use crate::cache::ProgramDirectory;
use crate::external::sr::SrClient;

/// Aggregates all services for convenient access.
///
/// Used as part of the Axum application state; cloning is cheap since
/// the shared resources are behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub episodes: EpisodeService,
}

impl Services {
    pub fn new(client: Arc<SrClient>, directory: Arc<ProgramDirectory>) -> Self {
        Self {
            episodes: EpisodeService::new(client, directory),
        }
    }
}
