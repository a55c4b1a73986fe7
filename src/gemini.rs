use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Fixed instruction sent alongside every audio clip. The frontend has no
/// way to override the persona.
pub const SCOUT_PROMPT: &str = "You are Scout, a kind, upbeat guide for ages 5-9. \
Transcribe what I said and reply in 1–2 short sentences, simple language.";

const AUDIO_MIME_TYPE: &str = "audio/wav";

#[derive(Debug, Error)]
pub enum GeminiError {
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Upstream { message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentRequest {
    /// One user turn: the audio clip first, then the persona instruction.
    pub fn for_audio(wav_base64: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: AUDIO_MIME_TYPE.to_string(),
                            data: wav_base64.to_string(),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(SCOUT_PROMPT.to_string()),
                    },
                ],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            model,
        }
    }

    /// Single generateContent call; the key goes in the query string, the
    /// way the API expects it.
    pub async fn generate_reply(
        &self,
        api_key: &str,
        wav_base64: &str,
    ) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = GenerateContentRequest::for_audio(wav_base64);

        debug!(
            "Sending generateContent request: model={}, audio={} base64 chars",
            self.model,
            wav_base64.len()
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Upstream error".to_string());
            debug!("generateContent failed: status={}, message={}", status, message);
            return Err(GeminiError::Upstream { message });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(joined_text(&parsed))
    }
}

/// First candidate's part texts joined by single spaces; no candidates is
/// a valid empty reply, not an error.
fn joined_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|part| part.text.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}
