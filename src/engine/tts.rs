//! TTS Engine implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::backend::{Backend, BackendError, SynthesizeRequest};

/// Errors that can occur during TTS operations.
#[derive(Error, Debug)]
pub enum TTSError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Backend error: {0}")]
    BackendError(#[from] BackendError),

    #[error("Failed to write audio to {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The main TTS engine: validates input, calls the backend, writes audio.
pub struct TTSEngine<B: Backend> {
    backend: B,
}

impl<B: Backend> TTSEngine<B> {
    /// Create a new TTS engine.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Synthesize speech from text.
    ///
    /// Empty text is rejected before the backend is called.
    pub fn synthesize(&self, text: &str) -> Result<Vec<u8>, TTSError> {
        if text.is_empty() {
            return Err(TTSError::EmptyText);
        }

        let request = SynthesizeRequest::new(text);
        debug!(
            voice = ?request.voice,
            audio_config = ?request.audio_config,
            "built synthesis request"
        );

        Ok(self.backend.synthesize(&request)?)
    }

    /// Synthesize speech and write the audio verbatim to `output`.
    ///
    /// An existing file is overwritten. The file is only touched once the
    /// backend has returned audio. Returns the number of bytes written.
    pub fn synthesize_to_file(&self, text: &str, output: &Path) -> Result<usize, TTSError> {
        let audio_data = self.synthesize(text)?;

        let write_failed = |source| TTSError::WriteFailed {
            path: output.to_path_buf(),
            source,
        };

        let mut file = fs::File::create(output).map_err(write_failed)?;
        file.write_all(&audio_data).map_err(write_failed)?;
        file.flush().map_err(write_failed)?;

        info!(path = %output.display(), bytes = audio_data.len(), "audio written");

        Ok(audio_data.len())
    }
}
