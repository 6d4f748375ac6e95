//! Client configuration.
//!
//! Consolidates all environment variable reads and provides validated
//! configuration for the gateway and the durable session record.

use std::path::PathBuf;
use thiserror::Error;

/// Default gateway root when `RIDESHARE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default location of the durable session record.
pub const DEFAULT_SESSION_FILE: &str = ".rideshare/session.json";

/// Complete client configuration loaded from environment variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
    /// Gateway root URL, without a trailing slash.
    pub api_url: String,
    /// Where the `{user, token}` record is kept.
    pub session_file: PathBuf,
}

/// Configuration errors.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: String, reason: String },
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// * `RIDESHARE_API_URL` - gateway root (default [`DEFAULT_API_URL`])
    /// * `RIDESHARE_SESSION_FILE` - session record path (default
    ///   [`DEFAULT_SESSION_FILE`])
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(
            std::env::var("RIDESHARE_API_URL").ok(),
            std::env::var("RIDESHARE_SESSION_FILE").ok(),
        )
    }

    fn build(
        api_url: Option<String>,
        session_file: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let api_url = api_url.trim_end_matches('/').to_owned();
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                var: "RIDESHARE_API_URL".to_owned(),
                reason: "must be an http(s) URL".to_owned(),
            });
        }

        let session_file = session_file.unwrap_or_else(|| DEFAULT_SESSION_FILE.to_owned());
        if session_file.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "RIDESHARE_SESSION_FILE".to_owned(),
                reason: "must not be empty".to_owned(),
            });
        }

        Ok(Self {
            api_url,
            session_file: PathBuf::from(session_file),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = ClientConfig::build(None, None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config =
            ClientConfig::build(Some("https://api.example.com/v1/".to_owned()), None).unwrap();
        assert_eq!(config.api_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        let result = ClientConfig::build(Some("ftp://api.example.com".to_owned()), None);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_blank_session_file_is_rejected() {
        let result = ClientConfig::build(None, Some("  ".to_owned()));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_custom_session_file() {
        let config =
            ClientConfig::build(None, Some("/tmp/session.json".to_owned())).unwrap();
        assert_eq!(config.session_file, PathBuf::from("/tmp/session.json"));
    }
}
