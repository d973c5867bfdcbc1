//! `prompt-polish` command builder with a hermetic environment.
#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

/// Variables the binary reads; cleared so the developer's shell cannot leak in.
const CLEARED_VARS: &[&str] = &[
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "PROMPT_POLISH_MODEL",
    "PROMPT_POLISH_TIMEOUT",
    "PROMPT_POLISH_TEMPLATE_FILE",
    "PROMPT_POLISH_LOG",
    "PROMPT_POLISH_LOG_FORMAT",
    "PROMPT_POLISH_LOG_FILE",
    "RUST_LOG",
];

pub const TEST_API_KEY: &str = "sk-test-key";

/// A command with no credential, no base URL, and a config path inside `dir`
/// that does not exist.
#[allow(deprecated)]
pub fn bare(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prompt-polish").expect("binary built");
    for var in CLEARED_VARS {
        cmd.env_remove(var);
    }
    cmd.env("PROMPT_POLISH_CONFIG", dir.join("config.toml"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// [`bare`] plus an API key and the given API root.
pub fn against(dir: &Path, base_url: &str) -> Command {
    let mut cmd = bare(dir);
    cmd.env("OPENAI_API_KEY", TEST_API_KEY);
    cmd.env("OPENAI_BASE_URL", base_url);
    cmd
}
