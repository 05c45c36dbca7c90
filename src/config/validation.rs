//! Configuration validation logic
//!
//! Validation methods for all configuration structures, ensuring values
//! are within acceptable ranges before the server starts.

use crate::config::error::ConfigError;
use crate::config::settings::{LoggerSettings, ServerConfig, Settings, UpstreamConfig};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl ServerConfig {
    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Server host must not be empty.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        Ok(())
    }
}

impl UpstreamConfig {
    /// Validate upstream API configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::validation(
                "upstream.base_url",
                "Upstream base URL is required.",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::validation(
                "upstream.base_url",
                "Upstream base URL must start with http:// or https://.",
            ));
        }

        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::validation(
                "upstream.max_concurrent_requests",
                "Max concurrent requests must be greater than 0.",
            ));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::validation(
                "upstream.request_timeout_secs",
                "Request timeout must be greater than 0 seconds when set.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl Settings {
    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.upstream.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
