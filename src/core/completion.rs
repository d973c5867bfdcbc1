//! Completion capability.
//!
//! A [`CompletionClient`] takes one [`CompletionRequest`] (system text, user
//! text, model, timeout) and returns the text of the first choice. The
//! production implementation lives in [`crate::core::openai`]; tests use
//! [`crate::test_utils::StubCompletionClient`].

use std::future::Future;
use std::time::Duration;

use super::prompt_input::RawPrompt;
use super::template::SystemPromptTemplate;
use crate::error::Result;

/// One chat-completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub timeout: Duration,
    pub system: SystemPromptTemplate,
    pub prompt: RawPrompt,
}

impl CompletionRequest {
    #[must_use]
    pub fn new(
        model: impl Into<String>,
        timeout: Duration,
        system: SystemPromptTemplate,
        prompt: RawPrompt,
    ) -> Self {
        Self {
            model: model.into(),
            timeout,
            system,
            prompt,
        }
    }
}

/// Text returned by the remote model for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    content: String,
}

impl Completion {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Content exactly as received.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.content
    }

    /// Content with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }
}

/// Something that can answer a chat-completion request.
pub trait CompletionClient {
    /// Send one request and return the first choice's content.
    ///
    /// # Errors
    ///
    /// Any upstream failure: transport, timeout, rejected key, non-success
    /// status, or a response without usable content.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<Completion>> + Send;
}
