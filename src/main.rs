mod cli;
mod config;
mod core;
mod error;

use crate::cli::Cli;
use crate::config::{API_KEY_ENV, Config};
use crate::core::{CacheStore, OpenAiCompletion, Outcome, Pipeline, YouTubeTranscripts};
use crate::error::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::from_cli(Cli::parse())?;
    if config.api_key.is_none() {
        warn!("{API_KEY_ENV} is not set; only cached videos can be shown");
    }

    let outcome = run(&config).await?;
    match &outcome {
        Outcome::Cached(_) => info!(
            video_id = %config.video_id,
            title = %outcome.entry().title,
            "served from cache"
        ),
        Outcome::Processed(entry) => info!(
            video_id = %config.video_id,
            transcript_length = entry.transcript_length,
            tags = entry.tags.len(),
            "processed new video"
        ),
    }

    Ok(())
}

async fn run(config: &Config) -> Result<Outcome> {
    let store = CacheStore::new(&config.cache_path);
    let transcripts = YouTubeTranscripts::new(config.languages.clone())?;
    let completion = OpenAiCompletion::new(config.api_key.as_deref(), &config.model);

    Pipeline::new(store, transcripts, completion)
        .run(&config.video_id)
        .await
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
