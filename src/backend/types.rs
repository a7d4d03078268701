//! Speech API request/response types.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language used for every synthesis request.
pub const LANGUAGE_CODE: &str = "en-US";

/// Voice used for every synthesis request.
pub const VOICE_NAME: &str = "en-US-Standard-C";

/// Errors that can occur when communicating with the speech API.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Encoding of the returned audio.
///
/// LINEAR16 is 16-bit signed little-endian PCM, playable with `aplay`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AudioEncoding {
    #[default]
    #[serde(rename = "LINEAR16")]
    Linear16,
}

/// Text to synthesize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisInput {
    pub text: String,
}

/// Voice selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelectionParams {
    pub language_code: String,
    pub name: String,
}

impl Default for VoiceSelectionParams {
    fn default() -> Self {
        Self {
            language_code: LANGUAGE_CODE.to_string(),
            name: VOICE_NAME.to_string(),
        }
    }
}

/// Output audio configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: AudioEncoding,
}

/// Request for speech synthesis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeRequest {
    pub input: SynthesisInput,
    pub voice: VoiceSelectionParams,
    pub audio_config: AudioConfig,
}

impl SynthesizeRequest {
    /// Create a request for `text` with the fixed voice
    /// (`en-US-Standard-C`) and LINEAR16 output.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            input: SynthesisInput { text: text.into() },
            voice: VoiceSelectionParams::default(),
            audio_config: AudioConfig::default(),
        }
    }

    /// The text being synthesized.
    pub fn text(&self) -> &str {
        &self.input.text
    }
}

/// Response from the synthesize endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    /// Base64-encoded audio.
    pub audio_content: String,
}

impl SynthesizeResponse {
    /// Parse a response body.
    ///
    /// The body must be a JSON object carrying a string `audioContent`.
    pub fn from_json(body: &[u8]) -> Result<Self, BackendError> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        if !value.is_object() {
            return Err(BackendError::InvalidResponse(
                "Expected a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    /// Decode the audio bytes.
    pub fn into_audio(self) -> Result<Vec<u8>, BackendError> {
        let audio = STANDARD
            .decode(self.audio_content.as_bytes())
            .map_err(|e| BackendError::InvalidResponse(format!("audioContent: {e}")))?;

        if audio.is_empty() {
            return Err(BackendError::InvalidResponse(
                "Empty audio content".to_string(),
            ));
        }

        Ok(audio)
    }
}

/// Error envelope returned by Google APIs on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorStatus {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl ErrorResponse {
    /// Convert into a [`BackendError`], if the body is an error envelope.
    pub fn parse(body: &str) -> Option<BackendError> {
        let response: ErrorResponse = serde_json::from_str(body).ok()?;
        let message = match response.error.status {
            Some(status) => format!("{status}: {}", response.error.message),
            None => response.error.message,
        };

        Some(BackendError::ApiError {
            status: response.error.code,
            message,
        })
    }
}
