//! Test utilities for prompt-polish.
//!
//! Provides a stub completion client, scripted stdin, and an in-memory
//! writer for use across unit and integration tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use prompt_polish::test_utils::*;
//!
//! let client = StubCompletionClient::replying("### Polished Prompt\n...");
//! let mut input = ScriptedInput::piped("sort a list");
//! ```

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::core::completion::{Completion, CompletionClient, CompletionRequest};
use crate::core::prompt_input::{PromptInput, PromptSource, RawPrompt};
use crate::core::template::SystemPromptTemplate;
use crate::error::{PolishError, Result};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// Stub completion client
// =============================================================================

type ErrorFactory = Box<dyn Fn() -> PolishError + Send + Sync>;

enum Reply {
    Content(String),
    Error(ErrorFactory),
    Hang,
}

/// [`CompletionClient`] that never touches the network.
///
/// Records every request it receives.
pub struct StubCompletionClient {
    reply: Reply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubCompletionClient {
    /// Answer every request with `content`.
    #[must_use]
    pub fn replying(content: impl Into<String>) -> Self {
        Self {
            reply: Reply::Content(content.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request with the error `make` builds.
    #[must_use]
    pub fn failing(make: impl Fn() -> PolishError + Send + Sync + 'static) -> Self {
        Self {
            reply: Reply::Error(Box::new(make)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Never answer; the request stays in flight until cancelled.
    #[must_use]
    pub fn hanging() -> Self {
        Self {
            reply: Reply::Hang,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        lock(&self.requests).clone()
    }
}

impl CompletionClient for StubCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        lock(&self.requests).push(request.clone());
        match &self.reply {
            Reply::Content(content) => Ok(Completion::new(content.clone())),
            Reply::Error(make) => Err(make()),
            Reply::Hang => std::future::pending().await,
        }
    }
}

// =============================================================================
// Scripted stdin
// =============================================================================

/// [`PromptInput`] with fixed terminal state and contents.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    terminal: bool,
    contents: String,
    reads: usize,
}

impl ScriptedInput {
    /// Redirected stdin holding `contents`.
    #[must_use]
    pub fn piped(contents: impl Into<String>) -> Self {
        Self {
            terminal: false,
            contents: contents.into(),
            reads: 0,
        }
    }

    /// An interactive terminal with nothing typed.
    #[must_use]
    pub const fn terminal() -> Self {
        Self {
            terminal: true,
            contents: String::new(),
            reads: 0,
        }
    }

    /// Whether `read_all` was called.
    #[must_use]
    pub const fn was_read(&self) -> bool {
        self.reads > 0
    }
}

impl PromptInput for ScriptedInput {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn read_all(&mut self) -> io::Result<String> {
        self.reads += 1;
        Ok(self.contents.clone())
    }
}

// =============================================================================
// Shared writer
// =============================================================================

/// Cloneable in-memory writer; all clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.0)).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.0).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Factories
// =============================================================================

/// A request with the embedded template and the given prompt.
///
/// # Panics
///
/// Panics if `prompt` is blank.
#[must_use]
pub fn sample_request(prompt: &str) -> CompletionRequest {
    CompletionRequest::new(
        "gpt-4o-mini",
        Duration::from_secs(30),
        SystemPromptTemplate::embedded(),
        RawPrompt::new(prompt, PromptSource::Positional).expect("non-blank prompt"),
    )
}
