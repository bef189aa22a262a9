/// LLM Client: the single point of entry for all text-generation calls in Navigator.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All LLM interactions MUST go through this module.
///
/// The Messages endpoint keeps no memory between calls. `Conversation` emulates
/// a stateful chat session by re-sending every accumulated turn on each `send`.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all chat calls in Navigator.
pub const MODEL: &str = "claude-sonnet-4-5";
/// Counselor replies are capped at ~150 words by the prompt; this leaves headroom.
const MAX_TOKENS: u32 = 1024;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One message in the list sent to the Messages endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// A text-generation backend. Given the full ordered message list of a
/// conversation, returns the next assistant message.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, messages: &[Message]) -> Result<LlmResponse, LlmError>;
}

/// The text generator used in production.
/// Wraps the Anthropic Messages API with retry logic for rate limits and 5xx.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
        })
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    /// An empty reply is returned as-is; callers decide what empty means.
    async fn generate(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: turns={}, input_tokens={}, output_tokens={}",
                messages.len(),
                llm_response.usage.input_tokens,
                llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

/// A chat session on top of a stateless `TextGenerator`.
///
/// Every `send` appends the user message, replays the whole list, and on a
/// non-empty reply appends it as the assistant turn. A failed send leaves the
/// message list unchanged so user/assistant turns keep alternating.
pub struct Conversation<'a> {
    generator: &'a dyn TextGenerator,
    messages: Vec<Message>,
}

impl<'a> Conversation<'a> {
    pub fn start(generator: &'a dyn TextGenerator) -> Self {
        Self {
            generator,
            messages: Vec::new(),
        }
    }

    pub async fn send(&mut self, content: &str) -> Result<String, LlmError> {
        self.messages.push(Message::user(content));

        let reply = match self.generator.generate(&self.messages).await {
            Ok(response) => response
                .text()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
                .ok_or(LlmError::EmptyContent),
            Err(e) => Err(e),
        };

        match reply {
            Ok(text) => {
                self.messages.push(Message::assistant(text.clone()));
                Ok(text)
            }
            Err(e) => {
                self.messages.pop();
                Err(e)
            }
        }
    }

    #[cfg(test)]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Scripted generator: pops one canned reply per call and records the
    /// message list it was called with.
    #[derive(Default)]
    pub struct ScriptedGenerator {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        calls: Mutex<Vec<Vec<Message>>>,
        /// Reply used once the script runs out.
        pub fallback: Option<String>,
    }

    impl LlmResponse {
        /// A response holding a single text block.
        pub fn from_text(text: impl Into<String>) -> Self {
            Self {
                content: vec![ContentBlock {
                    block_type: "text".to_string(),
                    text: Some(text.into()),
                }],
                usage: Usage::default(),
            }
        }
    }

    impl ScriptedGenerator {
        pub fn with_replies<I, S>(replies: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
                ..Self::default()
            }
        }

        pub fn always(reply: &str) -> Self {
            Self {
                fallback: Some(reply.to_string()),
                ..Self::default()
            }
        }

        pub fn push_error(&self, error: LlmError) {
            self.replies.lock().unwrap().push_back(Err(error));
        }

        pub fn calls(&self) -> Vec<Vec<Message>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            let next = self.replies.lock().unwrap().pop_front();
            match next {
                Some(Ok(text)) => Ok(LlmResponse::from_text(text)),
                Some(Err(e)) => Err(e),
                None => Ok(LlmResponse::from_text(
                    self.fallback.clone().unwrap_or_default(),
                )),
            }
        }
    }
}
