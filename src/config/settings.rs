//! Environment-driven settings for the speech API client.

use std::fmt;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;
use tracing::debug;

/// Base URL of the Google Cloud Text-to-Speech REST API.
pub const DEFAULT_ENDPOINT: &str = "https://texttospeech.googleapis.com";

/// Request timeout used when `TTS_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_ACCESS_TOKEN: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";
pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_QUOTA_PROJECT: &str = "GOOGLE_CLOUD_QUOTA_PROJECT";
pub const ENV_ENDPOINT: &str = "TTS_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "TTS_TIMEOUT_SECS";

/// Errors that can occur when loading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid timeout: {0}. Expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Credentials passed through to the speech API.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// OAuth 2.0 access token, sent as a bearer token.
    AccessToken(String),
    /// API key, sent in the `x-goog-api-key` header.
    ApiKey(String),
    /// Application Default Credentials, resolved when the request is sent.
    ApplicationDefault,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Credentials::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            Credentials::ApplicationDefault => f.write_str("ApplicationDefault"),
        }
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub credentials: Credentials,
    pub quota_project: Option<String>,
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// Variables set to an empty (or whitespace-only) value are treated
    /// as unset. An access token wins over an API key; with neither, the
    /// request falls back to Application Default Credentials.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let credentials = match (get(ENV_ACCESS_TOKEN), get(ENV_API_KEY)) {
            (Some(token), _) => Credentials::AccessToken(token),
            (None, Some(key)) => Credentials::ApiKey(key),
            (None, None) => Credentials::ApplicationDefault,
        };

        let endpoint = match get(ENV_ENDPOINT) {
            Some(endpoint) => parse_endpoint(&endpoint)?,
            None => DEFAULT_ENDPOINT.to_string(),
        };

        let timeout = match get(ENV_TIMEOUT_SECS) {
            Some(secs) => parse_timeout(&secs)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let config = Self {
            endpoint,
            credentials,
            quota_project: get(ENV_QUOTA_PROJECT),
            timeout,
        };
        debug!(?config, "resolved configuration");

        Ok(config)
    }

    /// Full URL of the synthesize method.
    pub fn synthesize_url(&self) -> String {
        format!("{}/v1/text:synthesize", self.endpoint)
    }
}

/// Validate an endpoint and strip any trailing slash.
fn parse_endpoint(input: &str) -> Result<String, ConfigError> {
    let url =
        Url::parse(input).map_err(|e| ConfigError::InvalidEndpoint(format!("{input}: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEndpoint(format!(
            "{input}: scheme must be http or https"
        )));
    }

    Ok(input.trim_end_matches('/').to_string())
}

fn parse_timeout(input: &str) -> Result<Duration, ConfigError> {
    match input.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(input.to_string())),
    }
}
