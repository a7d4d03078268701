//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Output file used when `--output-file` is not given.
///
/// The audio is raw LINEAR16 PCM, written under a `.raw` name for `aplay`.
pub const DEFAULT_OUTPUT_FILE: &str = "output.raw";

/// Synthesize speech from text with a cloud text-to-speech API.
#[derive(Parser, Debug)]
#[command(name = "cloud-tts-rs")]
#[command(about = "Synthesize speech from text with a cloud text-to-speech API")]
#[command(version)]
pub struct Args {
    /// Text to synthesize
    #[arg(long, value_parser = parse_text)]
    pub text: String,

    /// Output audio file
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,
}

/// Errors that can occur when validating the input text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TextError {
    #[error("Text cannot be empty")]
    Empty,
}

/// Validate text given on the command line.
///
/// Only the empty string is rejected; any other text, whitespace
/// included, is kept exactly as given.
///
/// # Examples
/// ```
/// use cloud_tts_rs::cli::parse_text;
/// assert!(parse_text("Hello, World!").is_ok());
/// assert!(parse_text("").is_err());
/// ```
pub fn parse_text(input: &str) -> Result<String, TextError> {
    if input.is_empty() {
        return Err(TextError::Empty);
    }

    Ok(input.to_string())
}
