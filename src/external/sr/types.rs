//! Wire types of the Sveriges Radio open API.
//!
//! Field names follow the upstream JSON exactly; every field here is
//! required, so a response missing one fails deserialization and is
//! surfaced as an upstream error.

use serde::Deserialize;

/// One entry of the program catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Program {
    pub id: u64,
    pub name: String,
}

/// Envelope of `GET /programs/index`.
#[derive(Debug, Deserialize)]
pub struct ProgramsResponse {
    pub programs: Vec<Program>,
}

/// Latest episode of a program, as returned by `GET /episodes/getlatest`.
///
/// `publishdateutc` holds the vendor date encoding, e.g.
/// `\Date(1591958562162+0200)`; see [`super::publish_date`].
#[derive(Debug, Deserialize)]
pub struct Episode {
    pub title: String,
    pub description: String,
    pub program: Program,
    pub publishdateutc: String,
}

/// Envelope of `GET /episodes/getlatest`.
#[derive(Debug, Deserialize)]
pub struct EpisodeResponse {
    pub episode: Episode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programs_response_deserialization() {
        let json = r#"{"programs": [{"id": 4923, "name": "Ekot"}, {"id": 2071, "name": "Sommar & Vinter i P1"}]}"#;
        let response: ProgramsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.programs.len(), 2);
        assert_eq!(response.programs[0].id, 4923);
        assert_eq!(response.programs[1].name, "Sommar & Vinter i P1");
    }

    #[test]
    fn test_episode_response_deserialization() {
        let json = r#"{
            "episode": {
                "title": "A test title",
                "description": "A test description",
                "program": {"id": 1, "name": "program1"},
                "publishdateutc": "\\Date(1591958562162)"
            }
        }"#;
        let response: EpisodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.episode.title, "A test title");
        assert_eq!(response.episode.program.id, 1);
        assert_eq!(response.episode.publishdateutc, "\\Date(1591958562162)");
    }

    #[test]
    fn test_episode_missing_field_is_rejected() {
        let json = r#"{"episode": {"title": "t", "description": "d", "program": {"id": 1, "name": "p"}}}"#;
        assert!(serde_json::from_str::<EpisodeResponse>(json).is_err());
    }
}
