//! prompt-polish
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use prompt_polish::PolishError;
use prompt_polish::cli::Cli;
use prompt_polish::core::logging;
use prompt_polish::error::ExitCode as PolishExit;
use prompt_polish::render::render_error;
use prompt_polish::util::env::should_color_stderr;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_from_env();

    match prompt_polish::cli::polish::execute(&cli).await {
        Ok(()) => PolishExit::Success.into(),
        Err(e @ PolishError::NoPromptProvided) => {
            // Same shape as clap's own usage errors.
            let err = Cli::command().error(ErrorKind::MissingRequiredArgument, e.to_string());
            let _ = err.print();
            e.exit_code().into()
        }
        Err(e) => {
            tracing::debug!(
                code = e.error_code(),
                category = %e.category(),
                upstream = e.is_upstream(),
                "Command failed"
            );
            eprintln!("{}", render_error(&e, should_color_stderr()));
            e.exit_code().into()
        }
    }
}
