//! Completion pipeline.
//!
//! Runs the single completion call inside the progress indicator's scope.
//! Ctrl-C cancels the call, so the indicator is released on that path too.

use std::future::Future;
use std::io::Write;

use super::completion::{Completion, CompletionClient, CompletionRequest};
use crate::error::{PolishError, Result};
use crate::rich::spinner::{Spinner, SpinnerGuard};

/// Label shown next to the spinner.
pub const SPINNER_LABEL: &str = "Refining prompt...";

/// Send `request` through `client`, animating into `indicator` if given.
///
/// The spinner is stopped before this returns, on success, on error, and
/// when Ctrl-C arrives.
///
/// # Errors
///
/// Propagates whatever the client returns; [`PolishError::Interrupted`] on Ctrl-C.
pub async fn polish<C, W>(
    client: &C,
    request: &CompletionRequest,
    indicator: Option<W>,
) -> Result<Completion>
where
    C: CompletionClient,
    W: Write + Send + 'static,
{
    polish_until(client, request, indicator, ctrl_c()).await
}

/// [`polish`] with the cancellation signal supplied by the caller.
///
/// # Errors
///
/// Propagates whatever the client returns; [`PolishError::Interrupted`] if
/// `interrupt` completes first.
pub async fn polish_until<C, W, I>(
    client: &C,
    request: &CompletionRequest,
    indicator: Option<W>,
    interrupt: I,
) -> Result<Completion>
where
    C: CompletionClient,
    W: Write + Send + 'static,
    I: Future<Output = ()>,
{
    let spinner = indicator.map_or_else(SpinnerGuard::disabled, |writer| {
        SpinnerGuard::start(Spinner::new().with_label(SPINNER_LABEL), writer)
    });

    let result = tokio::select! {
        result = client.complete(request) => result,
        () = interrupt => {
            tracing::debug!("Interrupted while waiting for completion");
            Err(PolishError::Interrupted)
        }
    };
    spinner.stop();

    if let Err(e) = &result {
        tracing::debug!(code = e.error_code(), "Completion failed");
    }
    result
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
