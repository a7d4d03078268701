//! cloud-tts-rs CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cloud_tts_rs::backend::create_backend;
use cloud_tts_rs::cli::Args;
use cloud_tts_rs::config::Config;
use cloud_tts_rs::engine::TTSEngine;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    // Usage errors exit here, before any configuration or network access
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    let backend = create_backend(&config).context("Failed to create speech API client")?;
    let engine = TTSEngine::new(backend);

    engine
        .synthesize_to_file(&args.text, &args.output_file)
        .context("Failed to synthesize speech")?;

    println!("Audio content written to file: {}", args.output_file.display());

    Ok(())
}
