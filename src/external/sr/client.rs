//! Concurrency-bounded HTTP client for the SR open API.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;

use super::types::{Episode, EpisodeResponse, Program, ProgramsResponse};
use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};

/// Default number of simultaneous outbound requests against the SR API.
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 3;

/// Client for the Sveriges Radio open API.
///
/// A counting semaphore caps the number of in-flight upstream requests
/// at `max_concurrent_requests`; callers beyond the cap suspend until a
/// slot frees rather than failing. Each call is a single attempt, with
/// no retries and, unless configured, no request timeout.
pub struct SrClient {
    http: reqwest::Client,
    base_url: String,
    permits: Arc<Semaphore>,
}

impl SrClient {
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| AppError::Configuration {
            key: "upstream".to_string(),
            source: e.into(),
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            permits: Arc::new(Semaphore::new(config.max_concurrent_requests)),
        })
    }

    /// Fetches the complete program catalog in one call.
    pub async fn fetch_programs(&self) -> AppResult<Vec<Program>> {
        let response: ProgramsResponse = self
            .get_json("/programs/index", &[("pagination", "false"), ("format", "json")])
            .await?;
        Ok(response.programs)
    }

    /// Fetches the most recently published episode of a program.
    pub async fn fetch_latest_episode(&self, program_id: u64) -> AppResult<Episode> {
        let id = program_id.to_string();
        let response: EpisodeResponse = self
            .get_json("/episodes/getlatest", &[("programId", id.as_str()), ("format", "json")])
            .await?;
        Ok(response.episode)
    }

    /// Number of currently free upstream-request slots.
    pub fn available_slots(&self) -> usize {
        self.permits.available_permits()
    }

    fn make_error(message: impl Into<String>, source: Option<anyhow::Error>) -> AppError {
        AppError::UpstreamApi {
            message: message.into(),
            source,
        }
    }

    /// Issues a GET request, holding one concurrency slot from before
    /// the request is sent until the body has been fully read.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| AppError::Internal { source: e.into() })?;

        tracing::debug!(path = %path, "Sending upstream request");

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .map_err(|e| {
                Self::make_error(format!("GET {} request failed: {}", path, e), Some(e.into()))
            })?
            .error_for_status()
            .map_err(|e| {
                Self::make_error(format!("GET {} HTTP error: {}", path, e), Some(e.into()))
            })?;

        response.json::<T>().await.map_err(|e| {
            Self::make_error(format!("GET {} invalid JSON: {}", path, e), Some(e.into()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> UpstreamConfig {
        UpstreamConfig {
            base_url: base_url.to_string(),
            ..UpstreamConfig::default()
        }
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = SrClient::new(&test_config("https://api.sr.se/api/v2/")).unwrap();
        assert_eq!(client.base_url, "https://api.sr.se/api/v2");
    }

    #[test]
    fn test_default_slot_count() {
        let client = SrClient::new(&test_config("https://api.sr.se/api/v2")).unwrap();
        assert_eq!(client.available_slots(), DEFAULT_MAX_CONCURRENT_REQUESTS);
    }

    #[test]
    fn test_configured_slot_count() {
        let config = UpstreamConfig {
            max_concurrent_requests: 5,
            ..test_config("http://localhost:1234")
        };
        let client = SrClient::new(&config).unwrap();
        assert_eq!(client.available_slots(), 5);
    }

    #[test]
    fn test_make_error_without_source() {
        let err = SrClient::make_error("test error", None);
        match err {
            AppError::UpstreamApi { message, source } => {
                assert_eq!(message, "test error");
                assert!(source.is_none());
            }
            _ => panic!("Expected UpstreamApi error"),
        }
    }
}
