//! Name-to-id cache for the SR program catalog.

use dashmap::DashMap;

use crate::external::sr::Program;

/// Concurrent mapping from lower-cased program name to program id.
///
/// Constructed once at startup and shared through the application
/// state. Entries are never expired or invalidated: ids for a given
/// name are stable upstream, so the map only grows. Lookups and inserts
/// are individually safe under concurrency, but there is no per-key
/// coordination; two simultaneous misses for the same name may each
/// trigger a catalog fetch, and the duplicate ingest is harmless.
#[derive(Debug, Default)]
pub struct ProgramDirectory {
    ids: DashMap<String, u64>,
}

impl ProgramDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive lookup of a cached program id.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.ids.get(&name.to_lowercase()).map(|entry| *entry)
    }

    /// Ingests a full catalog snapshot, one entry at a time.
    pub fn ingest(&self, programs: &[Program]) {
        for program in programs {
            self.ids.insert(program.name.to_lowercase(), program.id);
        }
    }

    /// Number of cached name-to-id mappings.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
