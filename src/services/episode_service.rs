//! Latest-episode resolution service.

use std::sync::Arc;

use crate::cache::ProgramDirectory;
use crate::error::AppResult;
use crate::external::sr::{SrClient, publish_date};

/// Simplified latest-episode result assembled by the resolver.
///
/// Built fresh per request and never cached. The program name is the
/// one embedded in the upstream episode, which may differ in casing
/// from the caller's query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestEpisode {
    pub title: String,
    pub description: String,
    pub program_name: String,
    pub publication_time_epoch_millis_utc: i64,
}

/// Resolves a program name to that program's latest published episode.
#[derive(Clone)]
pub struct EpisodeService {
    client: Arc<SrClient>,
    directory: Arc<ProgramDirectory>,
}

impl EpisodeService {
    pub fn new(client: Arc<SrClient>, directory: Arc<ProgramDirectory>) -> Self {
        Self { client, directory }
    }

    /// Returns the latest episode of the named program, or `None` when
    /// the upstream catalog has no program by that name.
    ///
    /// Transport failures and undecodable publish dates propagate as
    /// errors; an unknown program does not.
    pub async fn get_latest_episode(
        &self,
        program_name: &str,
    ) -> AppResult<Option<LatestEpisode>> {
        let Some(program_id) = self.resolve_program_id(program_name).await? else {
            return Ok(None);
        };

        let episode = self.client.fetch_latest_episode(program_id).await?;
        let publication_time = publish_date::parse_epoch_millis(&episode.publishdateutc)?;

        Ok(Some(LatestEpisode {
            title: episode.title,
            description: episode.description,
            program_name: episode.program.name,
            publication_time_epoch_millis_utc: publication_time,
        }))
    }

    /// Resolves a program name to SR's numeric program id.
    ///
    /// A cache hit answers without touching the network. A miss fetches
    /// the full catalog, ingests every entry into the directory, and
    /// then searches the fresh snapshot for the requested name.
    /// Concurrent misses may each pay for a catalog fetch; there is no
    /// single-flight coordination, and ids are stable so the duplicate
    /// ingest does not matter.
    async fn resolve_program_id(&self, name: &str) -> AppResult<Option<u64>> {
        if let Some(id) = self.directory.get(name) {
            tracing::debug!(program = %name, id = %id, "Program directory hit");
            return Ok(Some(id));
        }

        tracing::debug!(program = %name, "Program directory miss, fetching catalog");
        let programs = self.client.fetch_programs().await?;
        self.directory.ingest(&programs);
        tracing::debug!(
            catalog_size = programs.len(),
            cached = self.directory.len(),
            "Catalog ingested"
        );

        let needle = name.to_lowercase();
        Ok(programs
            .iter()
            .find(|program| program.name.to_lowercase() == needle)
            .map(|program| program.id))
    }
}
