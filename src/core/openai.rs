//! OpenAI chat-completions client.
//!
//! Speaks `POST {base_url}/chat/completions` with a bearer key. One request per
//! call, no retries.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::completion::{Completion, CompletionClient, CompletionRequest};
use super::credentials::ApiKey;
use super::http::{build_client, classify_send_error};
use crate::error::{PolishError, Result};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// =============================================================================
// Client
// =============================================================================

/// [`CompletionClient`] backed by the OpenAI HTTP API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    api_key: ApiKey,
}

impl OpenAiClient {
    /// Create a client for `base_url` (e.g. `https://api.openai.com/v1`).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: ApiKey, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: build_client(timeout)?,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
        })
    }

    /// Full URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        let body = ChatRequest {
            model: &request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: request.system.as_str(),
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt.as_str(),
                },
            ],
        };

        tracing::info!(
            endpoint = %self.endpoint,
            model = %request.model,
            timeout_secs = request.timeout.as_secs(),
            prompt_chars = request.prompt.as_str().chars().count(),
            "Sending chat completion request"
        );
        let start = Instant::now();

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .timeout(request.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_send_error(&e, request.timeout))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| classify_send_error(&e, request.timeout))?;
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), duration_ms, "Chat completion failed");
            return Err(status_error(status, &text));
        }

        let completion = parse_completion(&text)?;
        tracing::info!(
            status = status.as_u16(),
            duration_ms,
            content_chars = completion.raw().chars().count(),
            "Chat completion received"
        );
        Ok(completion)
    }
}

/// Turn a non-success status and body into an upstream error.
fn status_error(status: StatusCode, body: &str) -> PolishError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                trimmed.chars().take(200).collect()
            }
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PolishError::AuthRejected {
            status: status.as_u16(),
            message,
        },
        StatusCode::TOO_MANY_REQUESTS => PolishError::RateLimited { message },
        _ => PolishError::ApiError {
            status: status.as_u16(),
            message,
        },
    }
}

/// Extract the first choice's content from a success body.
fn parse_completion(body: &str) -> Result<Completion> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| PolishError::MalformedResponse(format!("invalid JSON: {e}")))?;

    tracing::debug!(
        model = response.model.as_deref().unwrap_or("unknown"),
        choices = response.choices.len(),
        "Parsed chat completion"
    );

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| PolishError::MalformedResponse("response contained no choices".to_string()))?;

    let content = choice
        .message
        .and_then(|m| m.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| {
            PolishError::MalformedResponse("first choice has no message content".to_string())
        })?;

    Ok(Completion::new(content))
}
