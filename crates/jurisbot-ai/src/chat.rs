//! Chat-completion client for an OpenAI-compatible endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Error, Debug)]
pub enum AiError {
    #[error("an API key is required (set OPENAI_API_KEY)")]
    MissingApiKey,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("completion had no choices")]
    EmptyCompletion,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Chat-completion client. Cheap to clone — the underlying connection pool
/// is shared.
#[derive(Clone, Debug)]
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    /// Create a client for the default endpoint and model.
    pub fn new(api_key: String) -> Result<Self, AiError> {
        Self::with_config(DEFAULT_API_URL.to_string(), api_key, DEFAULT_MODEL.to_string())
    }

    /// Create a client with explicit endpoint, key and model.
    ///
    /// `base_url` should be like `https://api.openai.com/v1` (no trailing
    /// slash). A key is required — refusing here beats a 401 later.
    pub fn with_config(base_url: String, api_key: String, model: String) -> Result<Self, AiError> {
        if api_key.is_empty() {
            return Err(AiError::MissingApiKey);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        })
    }

    /// Create from `OPENAI_API_KEY`, with `OPENAI_BASE_URL` and
    /// `JURISBOT_MODEL` as optional overrides.
    pub fn from_env() -> Result<Self, AiError> {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = std::env::var("JURISBOT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::with_config(base_url, api_key, model)
    }

    /// One completion turn: system prompt plus user message, text reply.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, AiError> {
        self.request(system, user, None).await
    }

    /// Completion constrained to a JSON object reply.
    pub async fn complete_json(&self, system: &str, user: &str) -> Result<String, AiError> {
        self.request(system, user, Some(ResponseFormat { kind: "json_object" }))
            .await
    }

    async fn request(
        &self,
        system: &str,
        user: &str,
        response_format: Option<ResponseFormat>,
    ) -> Result<String, AiError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            response_format,
        };

        debug!(model = %self.model, "requesting chat completion");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatResponse = resp.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AiError::EmptyCompletion)
    }
}
