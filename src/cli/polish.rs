//! The polish command.
//!
//! One linear pass: acquire prompt, check credential, resolve config and
//! template, call the completion API, print. Any error ends the run.

use std::io;

use super::args::Cli;
use crate::core::completion::CompletionRequest;
use crate::core::credentials;
use crate::core::openai::OpenAiClient;
use crate::core::pipeline;
use crate::core::prompt_input::{StdinInput, acquire_prompt};
use crate::error::Result;
use crate::render::write_completion;
use crate::storage::ResolvedConfig;
use crate::util::env::stderr_is_tty;

/// Whether the spinner should run for this invocation.
#[must_use]
pub fn spinner_enabled(silent: bool, stderr_tty: bool) -> bool {
    !silent && stderr_tty
}

/// Execute the command against the real process environment.
///
/// # Errors
///
/// Returns the first failure in the sequence; see [`crate::error::PolishError`].
pub async fn execute(cli: &Cli) -> Result<()> {
    let prompt = acquire_prompt(
        cli.prompt_flag.as_deref(),
        cli.prompt.as_deref(),
        &mut StdinInput,
    )?;
    tracing::debug!(source = %prompt.source(), chars = prompt.as_str().chars().count(), "Prompt acquired");

    let api_key = credentials::api_key_from_env()?;

    let config = ResolvedConfig::resolve()?;
    let template = config.template.load()?;
    tracing::debug!(template = %config.template, "System prompt resolved");

    let client = OpenAiClient::new(&config.base_url, api_key, config.timeout)?;
    let request = CompletionRequest::new(config.model.clone(), config.timeout, template, prompt);

    let indicator = spinner_enabled(cli.silent, stderr_is_tty()).then(io::stderr);
    let completion = pipeline::polish(&client, &request, indicator).await?;

    write_completion(&mut io::stdout().lock(), &completion)
}
