//! Backend communication with the remote text-to-speech provider.
//!
//! Provides the trait and the HTTP implementation for the Google Cloud
//! Text-to-Speech `text:synthesize` method, plus Application Default
//! Credentials lookup for callers without an explicit token or key.

mod auth;
mod client;
mod types;

pub use auth::{CLOUD_PLATFORM_SCOPE, application_default_token};
pub use client::HttpBackend;
pub use types::{
    AudioConfig, AudioEncoding, BackendError, ErrorResponse, ErrorStatus, LANGUAGE_CODE,
    SynthesisInput, SynthesizeRequest, SynthesizeResponse, VOICE_NAME, VoiceSelectionParams,
};

use crate::config::Config;

/// Trait for speech provider communication.
///
/// This trait abstracts the HTTP communication with the provider,
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Synthesize speech from text.
    ///
    /// # Arguments
    /// * `request` - Synthesis request parameters
    ///
    /// # Returns
    /// Raw audio data in the requested encoding
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, BackendError>;
}

/// Create a backend for the given configuration.
pub fn create_backend(config: &Config) -> Result<HttpBackend, BackendError> {
    HttpBackend::new(config)
}
