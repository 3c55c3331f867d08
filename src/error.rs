/// Result type for speech generation.
pub type Result<T> = std::result::Result<T, SpeechError>;

/// Everything that can abort a generation job.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// No service credential is configured.
    #[error("API key not set (expected GEMINI_API_KEY or API_KEY)")]
    Configuration,

    /// The service answered without a usable audio payload.
    #[error("no audio data received from API: {0}")]
    Response(String),

    /// The payload was not valid base64.
    #[error("invalid audio payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl SpeechError {
    pub fn response(msg: impl Into<String>) -> Self {
        Self::Response(msg.into())
    }
}
