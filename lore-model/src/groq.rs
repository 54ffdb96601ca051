//! Hosted completion backend using the Groq chat-completions API.
//!
//! Groq exposes an OpenAI-compatible REST surface, so the wire types here
//! are the familiar `messages`/`choices` shape. This is the Remote variant:
//! selected whenever a bearer credential is configured, and expected to
//! answer in single-digit seconds where the local variant takes tens.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use lore_core::{CompletionProvider, LoreError, ProviderVariant, Result};

/// The Groq chat-completions endpoint.
const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default hosted model, considerably larger than the local default.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

const PROVIDER_NAME: &str = "groq";

/// Grounding instruction sent as the system message with every request.
const SYSTEM_PROMPT: &str = "You answer questions using only the article excerpts supplied in \
     the user message. If the excerpts do not cover the question, say so plainly.";

// ── chat-completions wire types ────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// A [`CompletionProvider`] backed by the hosted Groq API.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GroqClient {
    /// Create a client with the given bearer credential and model.
    ///
    /// # Errors
    ///
    /// Returns [`LoreError::Config`] if the credential is empty.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LoreError::Config("groq API key must not be empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoreError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self { client, api_key, model: model.into(), timeout })
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, prompt_len = prompt.len(), "groq chat completion");

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: prompt },
            ],
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 300,
        };

        let response = self
            .client
            .post(GROQ_CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = PROVIDER_NAME, error = %e, "completion request failed");
                if e.is_timeout() {
                    LoreError::ProviderTimeout {
                        variant: PROVIDER_NAME.into(),
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    LoreError::ProviderUnavailable {
                        variant: PROVIDER_NAME.into(),
                        message: format!("request failed: {e}"),
                    }
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            error!(provider = PROVIDER_NAME, %status, "API error");
            return Err(LoreError::ProviderUnavailable {
                variant: PROVIDER_NAME.into(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            error!(provider = PROVIDER_NAME, error = %e, "failed to parse completion response");
            LoreError::ProviderUnavailable {
                variant: PROVIDER_NAME.into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        chat.choices.into_iter().next().map(|c| c.message.content).ok_or_else(|| {
            LoreError::ProviderUnavailable {
                variant: PROVIDER_NAME.into(),
                message: "API returned no choices".into(),
            }
        })
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn variant(&self) -> ProviderVariant {
        ProviderVariant::Remote
    }
}
