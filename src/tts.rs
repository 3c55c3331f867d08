use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::Config;
use crate::error::{Result, SpeechError};

/// A remote text-to-speech backend returning base64-encoded raw PCM.
#[async_trait]
pub trait SpeechService: Send + Sync {
    async fn generate_speech(&self, text: &str, voice_id: &str) -> Result<String>;
}

/// Decodes a base64 payload into raw audio bytes.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(payload)?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
    speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: Option<String>,
}

impl GenerateContentRequest {
    fn new(text: &str, voice_id: &str) -> Self {
        Self {
            // The "Say:" prefix keeps the model reading the text verbatim.
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: format!("Say: {}", text),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice_id.to_string(),
                        },
                    },
                },
            },
        }
    }
}

impl GenerateContentResponse {
    fn into_audio_payload(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .inline_data?
            .data
            .filter(|data| !data.is_empty())
    }
}

/// Gemini `generateContent` client configured for audio output.
pub struct GeminiTts {
    config: Config,
    client: reqwest::Client,
}

impl GeminiTts {
    /// Requests run until the service answers; there is no client timeout.
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl SpeechService for GeminiTts {
    async fn generate_speech(&self, text: &str, voice_id: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(SpeechError::Configuration)?;

        let url = self.generate_url();
        debug!("POST {} (voice {}, {} chars)", url, voice_id, text.chars().count());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::new(text, voice_id))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Speech service returned {}: {}", status, body);
            return Err(SpeechError::response(format!("HTTP status {}", status)));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed
            .into_audio_payload()
            .ok_or_else(|| SpeechError::response("response contained no inline audio"))
    }
}
