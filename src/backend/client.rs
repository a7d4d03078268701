//! HTTP client for the speech API.

use tracing::{debug, info, warn};

use crate::config::{Config, Credentials};

use super::Backend;
use super::auth::application_default_token;
use super::types::{BackendError, ErrorResponse, SynthesizeRequest, SynthesizeResponse};

/// HTTP-based speech API client.
pub struct HttpBackend {
    synthesize_url: String,
    credentials: Credentials,
    quota_project: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new HTTP client from resolved configuration.
    pub fn new(config: &Config) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            synthesize_url: config.synthesize_url(),
            credentials: config.credentials.clone(),
            quota_project: config.quota_project.clone(),
            client,
        })
    }

    /// Get the URL synthesis requests are sent to.
    pub fn synthesize_url(&self) -> &str {
        &self.synthesize_url
    }

    /// Attach credentials and the quota project header.
    fn authorize(
        &self,
        builder: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::RequestBuilder, BackendError> {
        let builder = match &self.credentials {
            Credentials::AccessToken(token) => builder.bearer_auth(token),
            Credentials::ApiKey(key) => builder.header("x-goog-api-key", key),
            Credentials::ApplicationDefault => builder.bearer_auth(application_default_token()?),
        };

        Ok(match &self.quota_project {
            Some(project) => builder.header("x-goog-user-project", project),
            None => builder,
        })
    }
}

impl Backend for HttpBackend {
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, BackendError> {
        debug!(
            url = %self.synthesize_url,
            chars = request.text().chars().count(),
            "sending synthesis request"
        );

        let response = self
            .authorize(self.client.post(&self.synthesize_url))?
            .json(request)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(%status, "speech API returned an error");

            return Err(ErrorResponse::parse(&body)
                .unwrap_or_else(|| BackendError::RequestFailed(format!("Status: {status}"))));
        }

        let body = response
            .bytes()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        let audio = SynthesizeResponse::from_json(&body)?.into_audio()?;
        info!(bytes = audio.len(), "speech synthesized");

        Ok(audio)
    }
}
