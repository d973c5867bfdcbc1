//! Prompt acquisition.
//!
//! The raw prompt comes from exactly one source, checked in order:
//! 1. `--prompt <text>`
//! 2. the positional argument
//! 3. standard input, only when it is not an interactive terminal

use std::fmt;
use std::io::{self, IsTerminal, Read};

use crate::error::{PolishError, Result};

/// Where the raw prompt was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSource {
    Flag,
    Positional,
    Stdin,
}

impl PromptSource {
    /// Short name used in logs and messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flag => "--prompt",
            Self::Positional => "argument",
            Self::Stdin => "stdin",
        }
    }
}

impl fmt::Display for PromptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-authored prompt text, trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPrompt {
    text: String,
    source: PromptSource,
}

impl RawPrompt {
    /// Trim `text` and wrap it; `None` if nothing is left.
    #[must_use]
    pub fn new(text: &str, source: PromptSource) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                text: trimmed.to_string(),
                source,
            })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn source(&self) -> PromptSource {
        self.source
    }
}

/// Abstraction over standard input so acquisition can be tested without a terminal.
pub trait PromptInput {
    /// Whether the input is an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Read everything until EOF.
    fn read_all(&mut self) -> io::Result<String>;
}

/// The process's real standard input.
#[derive(Debug, Default)]
pub struct StdinInput;

impl PromptInput for StdinInput {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_all(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

/// Pick the raw prompt from flag, positional argument, or stdin.
///
/// # Errors
///
/// - [`PolishError::BlankPrompt`] if the chosen argument is whitespace-only
/// - [`PolishError::NoPromptProvided`] if nothing was passed and stdin is a terminal
/// - [`PolishError::EmptyInput`] if piped stdin is blank
pub fn acquire_prompt(
    flag: Option<&str>,
    positional: Option<&str>,
    input: &mut impl PromptInput,
) -> Result<RawPrompt> {
    let candidate = flag
        .map(|text| (text, PromptSource::Flag))
        .or_else(|| positional.map(|text| (text, PromptSource::Positional)));

    if let Some((text, source)) = candidate {
        tracing::debug!(%source, "Using prompt from command line");
        return RawPrompt::new(text, source).ok_or(PolishError::BlankPrompt {
            source_name: source.name(),
        });
    }

    if input.is_terminal() {
        return Err(PolishError::NoPromptProvided);
    }

    let data = input.read_all()?;
    tracing::debug!(bytes = data.len(), "Read prompt from stdin");
    RawPrompt::new(&data, PromptSource::Stdin).ok_or(PolishError::EmptyInput)
}
