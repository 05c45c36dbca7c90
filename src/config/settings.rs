//! Configuration settings structures for srlatest
//!
//! Defines all configuration that can be loaded from TOML files and
//! environment variables.

use serde::{Deserialize, Serialize};

use crate::external::sr::client::DEFAULT_MAX_CONCURRENT_REQUESTS;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "srlatest".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "https://api.sr.se/api/v2".to_string()
}

fn default_max_concurrent_requests() -> usize {
    DEFAULT_MAX_CONCURRENT_REQUESTS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Upstream (Sveriges Radio API) Configuration
// ============================================================================

/// Sveriges Radio API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the SR open API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Hard cap on simultaneous outbound requests. Callers beyond the
    /// cap wait for a free slot instead of failing.
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Optional per-request timeout in seconds. Unset by default: a
    /// stalled upstream call then holds its slot until the connection
    /// dies, which is the reference backpressure behavior.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_concurrent_requests: default_max_concurrent_requests(),
            request_timeout_secs: None,
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration for the application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream SR API configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9090,
        };
        assert_eq!(config.address(), "0.0.0.0:9090");
    }

    #[test]
    fn test_upstream_defaults() {
        let config = UpstreamConfig::default();
        assert_eq!(config.base_url, "https://api.sr.se/api/v2");
        assert_eq!(config.max_concurrent_requests, 3);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_settings_deserialize_empty() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.logger.level, "info");
        assert!(settings.logger.console.enabled);
    }

    #[test]
    fn test_settings_deserialize_partial_upstream() {
        let settings: Settings = serde_json::from_str(
            r#"{"upstream": {"max_concurrent_requests": 5}}"#,
        )
        .unwrap();
        assert_eq!(settings.upstream.max_concurrent_requests, 5);
        assert_eq!(settings.upstream.base_url, "https://api.sr.se/api/v2");
    }
}
