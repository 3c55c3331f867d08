use tracing::{debug, error, info};

use crate::audio::{WavContainer, assemble};
use crate::error::Result;
use crate::tts::{SpeechService, decode_payload};
use crate::utils::{MAX_CHUNK_CHARS, chunk_text};
use crate::voice::Voice;

/// The only failure message ever shown to the user.
pub const GENERIC_FAILURE: &str = "An error occurred while generating speech. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Generating {
        current: usize,
        total: usize,
    },
    Ready(WavContainer),
    Failed(String),
}

/// State of one user session: the input, the chosen voice and the last outcome.
#[derive(Debug, Clone)]
pub struct Session {
    pub text: String,
    pub voice: Voice,
    max_chars: usize,
    status: Status,
}

impl Session {
    pub fn new(text: impl Into<String>, voice: Voice) -> Self {
        Self {
            text: text.into(),
            voice,
            max_chars: MAX_CHUNK_CHARS,
            status: Status::Idle,
        }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.status, Status::Generating { .. })
    }

    pub fn can_generate(&self) -> bool {
        !self.text.trim().is_empty() && !self.is_generating()
    }

    pub fn audio(&self) -> Option<&WavContainer> {
        match &self.status {
            Status::Ready(wav) => Some(wav),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Runs one generation request to completion or first failure.
    ///
    /// Does nothing for blank text or while a request is already running.
    /// Any previous result is discarded up front.
    pub async fn generate<S>(&mut self, service: &S) -> &Status
    where
        S: SpeechService + ?Sized,
    {
        if !self.can_generate() {
            debug!("Ignoring generate request (blank text or already generating)");
            return &self.status;
        }

        self.status = match self.run(service).await {
            Ok(wav) => Status::Ready(wav),
            Err(e) => {
                if let Status::Generating { current, total } = self.status {
                    error!("Segment {} of {} failed", current, total);
                }
                error!("Error generating speech: {}", e);
                Status::Failed(GENERIC_FAILURE.to_string())
            }
        };
        &self.status
    }

    async fn run<S>(&mut self, service: &S) -> Result<WavContainer>
    where
        S: SpeechService + ?Sized,
    {
        let chunks = chunk_text(&self.text, self.max_chars);
        let total = chunks.len();
        self.status = Status::Generating { current: 0, total };
        info!(
            "Split text into {} segments (max {} chars), voice {}",
            total,
            self.max_chars,
            self.voice.id()
        );

        let mut buffers = Vec::with_capacity(total);
        for (i, chunk) in chunks.iter().enumerate() {
            self.status = Status::Generating {
                current: i + 1,
                total,
            };
            info!(
                "Generating segment {} of {} ({} chars)",
                i + 1,
                total,
                chunk.chars().count()
            );
            debug!("Segment text: {}", chunk);

            let payload = service.generate_speech(chunk, self.voice.id()).await?;
            let pcm = decode_payload(&payload)?;
            debug!("Segment {} decoded to {} bytes", i + 1, pcm.len());
            buffers.push(pcm);
        }

        Ok(assemble(buffers))
    }
}
