//! prompt-polish - rewrite rough coding prompts into structured LLM prompts.
//!
//! Reads a raw prompt from `--prompt`, the positional argument, or stdin, sends
//! it with a system prompt to a chat-completion API, and prints the reply.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod rich;
pub mod storage;
pub mod util;

/// Test utilities module - included in test builds or when test-utils feature is enabled.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ExitCode, PolishError, Result};
