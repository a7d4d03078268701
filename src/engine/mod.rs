//! TTS Engine orchestrator.
//!
//! This module provides the engine that turns validated text into a
//! synthesis request, calls the backend, and persists the returned audio.

mod tts;

pub use tts::{TTSEngine, TTSError};
