//! HTTP client utilities.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::error::{PolishError, Result};

/// Default timeout for completion requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("prompt-polish/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| PolishError::Network(e.to_string()))
}

/// Map a transport error, recognising timeouts.
#[must_use]
pub fn classify_send_error(err: &reqwest::Error, timeout: Duration) -> PolishError {
    if err.is_timeout() {
        PolishError::Timeout {
            seconds: timeout.as_secs(),
        }
    } else {
        PolishError::Network(err.to_string())
    }
}
