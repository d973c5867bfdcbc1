//! API credential lookup.
//!
//! Checked before any template loading or network activity.

use std::fmt;

use crate::error::{PolishError, Result};

/// Environment variable holding the completion API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// API key with a redacting `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Read the API key from the process environment.
///
/// # Errors
///
/// Returns [`PolishError::MissingCredential`] if the variable is unset or blank.
pub fn api_key_from_env() -> Result<ApiKey> {
    api_key_from(|name| std::env::var(name).ok())
}

/// Read the API key through a lookup function.
///
/// # Errors
///
/// Returns [`PolishError::MissingCredential`] if the lookup yields nothing usable.
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Result<ApiKey> {
    lookup(API_KEY_ENV)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(ApiKey)
        .ok_or_else(|| PolishError::MissingCredential {
            name: API_KEY_ENV.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_key_is_returned_trimmed() {
        let key = api_key_from(|_| Some(" sk-test \n".to_string())).unwrap();
        assert_eq!(key.expose(), "sk-test");
    }

    #[test]
    fn unset_key_is_missing_credential() {
        let err = api_key_from(|_| None).unwrap_err();
        assert!(
            matches!(err, PolishError::MissingCredential { ref name } if name == API_KEY_ENV)
        );
    }

    #[test]
    fn blank_key_is_missing_credential() {
        assert!(api_key_from(|_| Some("   ".to_string())).is_err());
    }

    #[test]
    fn debug_redacts_key() {
        let key = ApiKey::new("sk-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}
