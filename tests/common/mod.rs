//! Common test utilities for integration tests.
//!
//! - `logger`: Structured test logging
//! - `cmd`: Preconfigured `prompt-polish` command with an isolated environment
//! - `upstream`: Canned chat-completion responses for wiremock

pub mod cmd;
pub mod logger;
pub mod upstream;
