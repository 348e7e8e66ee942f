/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the provider API directly.
/// All LLM interactions MUST go through this module.
///
/// Model and temperature are hardcoded so every estimate is produced under
/// the same settings.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// The model used for all LLM calls.
pub const MODEL: &str = "mistral-large-latest";
pub const TEMPERATURE: f32 = 0.4;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatRequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
    #[allow(dead_code)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    #[allow(dead_code)]
    pub role: Option<String>,
    pub content: Option<MessageContent>,
}

/// Message content is either a plain string or a list of typed chunks.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Chunks(Vec<ContentChunk>),
}

#[derive(Debug, Deserialize)]
pub struct ContentChunk {
    #[serde(rename = "type")]
    pub chunk_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text of the first choice, if the provider returned any.
    pub fn text(&self) -> Option<String> {
        let content = self.choices.first()?.message.content.as_ref()?;
        match content {
            MessageContent::Text(text) => Some(text.clone()),
            MessageContent::Chunks(chunks) => {
                let text: String = chunks
                    .iter()
                    .filter(|c| c.chunk_type == "text")
                    .filter_map(|c| c.text.as_deref())
                    .collect();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
        }
    }

    /// Text of the first choice, or a printable dump of the raw result when
    /// the provider answered without text. Always trimmed.
    pub fn text_or_raw(&self) -> String {
        match self.text() {
            Some(text) => text.trim().to_string(),
            None => {
                warn!("LLM response carried no text content; returning raw result");
                let raw = match self.choices.first() {
                    Some(choice) => format!("{:?}", choice.message),
                    None => format!("{self:?}"),
                };
                raw.trim().to_string()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

/// The single LLM client used by the service.
/// Wraps the chat-completions API. One attempt per call; failures propagate.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
        }
    }

    /// Makes a single-turn call, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            temperature: TEMPERATURE,
            messages: vec![ChatRequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("LLM call: model={MODEL}, prompt_chars={}", prompt.len());

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }

    /// Calls the LLM and returns the trimmed answer text (see `ChatResponse::text_or_raw`).
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        Ok(response.text_or_raw())
    }
}
