use clap::Parser;
use std::path::PathBuf;

use crate::utils::MAX_CHUNK_CHARS;
use crate::voice::Voice;

/// Convert text to speech with Gemini and save it as a WAV file.
///
/// Text is taken from --text, else --input, else standard input.
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Args {
    /// Text to speak
    #[clap(long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from this file
    #[clap(long)]
    pub input: Option<PathBuf>,

    #[clap(long, value_enum, default_value_t = Voice::Kore)]
    pub voice: Voice,

    #[clap(long, default_value = "gemini-speech.wav")]
    pub out: PathBuf,

    /// Maximum characters per request
    #[clap(long, default_value_t = MAX_CHUNK_CHARS, value_parser = parse_max_chars)]
    pub max_chars: usize,

    /// Override the speech model (also GEMINI_TTS_MODEL)
    #[clap(long)]
    pub model: Option<String>,

    /// Print the available voices and exit
    #[clap(long)]
    pub list_voices: bool,
}

fn parse_max_chars(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
