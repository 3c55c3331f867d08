mod args;
mod audio;
mod config;
mod error;
mod session;
mod tts;
mod utils;
mod voice;

use anyhow::Context;
use clap::Parser;
use std::io::Read;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use args::Args;
use config::Config;
use session::Session;
use tts::GeminiTts;
use voice::Voice;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_voices {
        for voice in Voice::ALL {
            println!("{:<8} {}", voice.id(), voice);
        }
        return Ok(());
    }

    let text = read_text(&args)?;
    if text.trim().is_empty() {
        anyhow::bail!("No text to speak; pass --text, --input or pipe text on stdin");
    }

    let mut config = Config::from_env();
    if let Some(model) = &args.model {
        config = config.with_model(model);
    }
    info!("Using model {} with voice {}", config.model, args.voice);

    let tts = GeminiTts::new(config)?;
    let mut session = Session::new(text, args.voice).with_max_chars(args.max_chars);

    session.generate(&tts).await;
    if let Some(msg) = session.error() {
        error!("Generation failed");
        eprintln!("{}", msg);
        std::process::exit(1);
    }

    let wav = session
        .audio()
        .context("Generation finished without producing audio")?;
    wav.write_to(&args.out)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;
    info!(
        "Wrote {} ({} bytes, {}, {:.2} seconds)",
        args.out.display(),
        wav.as_bytes().len(),
        wav.media_type(),
        wav.duration_seconds()
    );
    Ok(())
}

fn read_text(args: &Args) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        info!("Reading text from {}", path.display());
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    info!("Reading text from stdin");
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
