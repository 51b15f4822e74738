//! Anthropic Messages API executor.
//!
//! Non-streaming completions with retry on transient failures. The API key
//! comes from `ANTHROPIC_API_KEY` and is never logged.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{debug, warn};

use super::executor::LlmExecutor;
use crate::config::AgentConfig;
use crate::error::{CrewError, ExecutorError, Result};

const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

pub struct AnthropicExecutor {
    client: Client,
    api_key: Secret<String>,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
    max_retries: u32,
}

impl AnthropicExecutor {
    /// Build an executor from agent config, reading the key from the
    /// `ANTHROPIC_API_KEY` environment variable.
    pub fn from_env(config: &AgentConfig) -> Result<Self> {
        let api_key =
            std::env::var("ANTHROPIC_API_KEY").map_err(|_| CrewError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(CrewError::MissingApiKey);
        }
        Self::new(config, api_key)
    }

    pub fn new(config: &AgentConfig, api_key: impl Into<String>) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout,
            max_retries: config.max_retries,
        })
    }

    /// Override the API base URL (local proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    async fn send_request(
        &self,
        system_prompt: &str,
        message: &str,
    ) -> std::result::Result<Response, ExecutorError> {
        let request = MessagesRequest {
            model: self.model.clone(),
            system: system_prompt.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: message.to_string(),
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        self.client
            .post(self.messages_url())
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExecutorError::Timeout {
                        duration_secs: self.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ExecutorError::Network(format!("connection failed: {}", e))
                } else {
                    ExecutorError::Network(e.to_string())
                }
            })
    }

    async fn parse_response(
        &self,
        response: Response,
    ) -> std::result::Result<String, ExecutorError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error_status(status.as_u16(), &body));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ExecutorError::Parse(format!("failed to parse response: {}", e)))?;

        let text = parsed
            .content
            .into_iter()
            .filter_map(|block| {
                if block.block_type == "text" {
                    block.text
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(ExecutorError::Parse("response contained no text".into()));
        }

        debug!(
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "completion received"
        );

        Ok(text)
    }

    async fn execute_with_retry(
        &self,
        system_prompt: &str,
        message: &str,
    ) -> std::result::Result<String, ExecutorError> {
        retry_transient(self.max_retries, || async move {
            let response = self.send_request(system_prompt, message).await?;
            self.parse_response(response).await
        })
        .await
    }
}

/// Drive `attempt_fn` until it succeeds, a permanent error occurs, or
/// `max_retries` retries are spent. Transient failures back off between
/// attempts.
async fn retry_transient<F, Fut>(
    max_retries: u32,
    mut attempt_fn: F,
) -> std::result::Result<String, ExecutorError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<String, ExecutorError>>,
{
    let mut attempt = 0;

    loop {
        match attempt_fn().await {
            Ok(text) => return Ok(text),
            Err(err) => {
                if err.is_permanent() || attempt >= max_retries {
                    return Err(err);
                }
                let delay = err.suggested_delay(attempt);
                warn!(
                    error = %err,
                    attempt = attempt + 1,
                    delay_secs = delay.as_secs(),
                    "transient executor failure, retrying"
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

impl LlmExecutor for AnthropicExecutor {
    fn execute<'a>(
        &'a self,
        system_prompt: &'a str,
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.execute_with_retry(system_prompt, message)
                .await
                .map_err(CrewError::from)
        })
    }
}

fn classify_error_status(status: u16, body: &str) -> ExecutorError {
    match status {
        401 | 403 => ExecutorError::AuthenticationFailed,
        429 => ExecutorError::RateLimited {
            retry_after_secs: parse_retry_after(body),
        },
        400 => {
            if body.contains("prompt is too long") || body.contains("context_length") {
                ExecutorError::ContextOverflow {
                    message: body.to_string(),
                }
            } else {
                ExecutorError::InvalidRequest(body.to_string())
            }
        }
        500..=599 => ExecutorError::Server(format!("{}: {}", status, body)),
        _ => ExecutorError::Network(format!("unexpected status {}: {}", status, body)),
    }
}

/// Extract a retry hint from an error body, e.g. "try again in 12s".
fn parse_retry_after(body: &str) -> Option<u64> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    let msg = parsed.get("error")?.get("message")?.as_str()?;
    let idx = msg.find("try again in ")?;
    let rest = &msg[idx + "try again in ".len()..];
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    system: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Usage {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}
