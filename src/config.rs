//! Speech service settings taken from the environment.

use std::env;

/// Configuration for the Gemini speech client.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key; absence only becomes an error when speech is requested.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Config {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash-preview-tts";

    /// Reads `GEMINI_API_KEY` (or `API_KEY`), `GEMINI_BASE_URL` and `GEMINI_TTS_MODEL`.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        let base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        let model =
            env::var("GEMINI_TTS_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_string());

        Self {
            api_key,
            base_url,
            model,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }
}
