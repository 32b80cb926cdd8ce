//! Single-attempt HTTP client for a local LM Studio server.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use artgen_core::types::GenerationRequest;

use crate::config::LmStudioConfig;
use crate::error::GenerationError;

/// Wire shape of the configured endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    ChatCompletions,
    Completions,
}

/// One generation attempt against some backend. The retry orchestrator is
/// generic over this seam, which also lets tests substitute a scripted
/// backend for the HTTP client.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// HTTP client for an LM Studio style endpoint. Performs exactly one attempt
/// per call and has no side effects beyond the outbound request; retry
/// policy lives in [`crate::RetryingGenerator`].
pub struct LmStudioClient {
    config: LmStudioConfig,
    client: Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct CompletionPayload<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

/// Both endpoint styles answer with a `choices` array; chat endpoints nest
/// the text under `message.content`, plain completion endpoints use `text`.
#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
    text: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl LmStudioClient {
    pub fn new(config: LmStudioConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GenerationError::Network(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self, GenerationError> {
        Self::new(LmStudioConfig::from_env())
    }

    pub fn config(&self) -> &LmStudioConfig {
        &self.config
    }

    /// Cheap connectivity probe: a one-word prompt with a tiny token budget.
    pub async fn test_connection(&self) -> bool {
        let request = GenerationRequest {
            system_prompt: "Ты помощник.".to_string(),
            user_prompt: "Привет! Это проверка соединения.".to_string(),
            model_id: self.config.model.clone(),
            max_tokens: 10,
            temperature: 0.0,
        };
        self.generate(&request).await.is_ok()
    }

    async fn post_payload<T: Serialize>(&self, payload: &T) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(&self.config.url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        if !status.is_success() {
            return Err(GenerationError::Protocol(format!(
                "status {status}: {}",
                truncate(&body, 200)
            )));
        }

        parse_completion_body(&body)
    }

    fn classify_transport_error(&self, error: reqwest::Error) -> GenerationError {
        if error.is_timeout() {
            GenerationError::Timeout(self.config.timeout())
        } else if error.is_connect() {
            GenerationError::Network(error.to_string())
        } else {
            GenerationError::Protocol(error.to_string())
        }
    }
}

#[async_trait]
impl GenerationBackend for LmStudioClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        debug!(model = %request.model_id, endpoint = ?self.config.endpoint, "sending generation request");
        match self.config.endpoint {
            EndpointKind::ChatCompletions => {
                let payload = ChatPayload {
                    model: &request.model_id,
                    messages: vec![
                        ChatMessage {
                            role: "system",
                            content: &request.system_prompt,
                        },
                        ChatMessage {
                            role: "user",
                            content: &request.user_prompt,
                        },
                    ],
                    max_tokens: request.max_tokens,
                    temperature: request.temperature,
                };
                self.post_payload(&payload).await
            }
            EndpointKind::Completions => {
                let payload = CompletionPayload {
                    model: &request.model_id,
                    prompt: format!("{}\n\n{}", request.system_prompt, request.user_prompt),
                    max_tokens: request.max_tokens,
                    temperature: request.temperature,
                };
                self.post_payload(&payload).await
            }
        }
    }
}

/// Parse a 200 body from either endpoint style into non-empty text.
pub(crate) fn parse_completion_body(body: &str) -> Result<String, GenerationError> {
    let parsed: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::Protocol(format!("malformed response body: {e}")))?;

    let Some(choice) = parsed.choices.into_iter().next() else {
        return Err(GenerationError::EmptyResponse);
    };
    let content = choice
        .message
        .and_then(|message| message.content)
        .or(choice.text)
        .unwrap_or_default();
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(trimmed.to_string())
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}
