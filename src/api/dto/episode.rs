//! Latest-episode response DTO.

use serde::Serialize;

use crate::services::LatestEpisode;

/// Wire shape of a successful latest-episode lookup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestEpisodeResponse {
    pub title: String,
    pub description: String,
    pub program_name: String,
    pub publication_time_epoch_millis_utc: i64,
}

impl From<LatestEpisode> for LatestEpisodeResponse {
    fn from(episode: LatestEpisode) -> Self {
        Self {
            title: episode.title,
            description: episode.description,
            program_name: episode.program_name,
            publication_time_epoch_millis_utc: episode.publication_time_epoch_millis_utc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let response = LatestEpisodeResponse {
            title: "A test title".to_string(),
            description: "A test description".to_string(),
            program_name: "program1".to_string(),
            publication_time_epoch_millis_utc: 1591958562162,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["title"], "A test title");
        assert_eq!(json["programName"], "program1");
        assert_eq!(json["publicationTimeEpochMillisUtc"], 1591958562162_i64);
        assert!(json.get("program_name").is_none());
    }
}
