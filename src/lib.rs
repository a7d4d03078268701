//! cloud-tts-rs: text-to-speech CLI backed by a cloud speech API.
//!
//! This crate sends text to the Google Cloud Text-to-Speech REST API and
//! writes the synthesized audio (LINEAR16, voice `en-US-Standard-C`) to a
//! local file.

pub mod backend;
pub mod cli;
pub mod config;
pub mod engine;
