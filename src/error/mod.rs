//! Error types for prompt-polish.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! - **Input**: no prompt source, or blank piped input
//! - **Credential**: the API key environment variable is missing
//! - **Template**: the system prompt file is missing, unreadable, or blank
//! - **Upstream**: anything that goes wrong talking to the completion API
//! - **Configuration**: config file parsing or invalid values
//! - **Internal**: I/O, JSON, and unclassified failures
//!
//! Each error has a stable error code (e.g., `PP-U001`) for programmatic handling.
//! None of them are retried; every error ends the run.

pub mod suggestions;

use thiserror::Error;

pub use suggestions::FixSuggestion;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Prompt acquisition problems.
    Input,
    /// Missing API credential.
    Credential,
    /// System prompt template could not be loaded.
    Template,
    /// Remote completion service failures.
    Upstream,
    /// Configuration file or value problems.
    Configuration,
    /// Internal errors (bugs, unexpected state, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Input => "Input error",
            Self::Credential => "Credential error",
            Self::Template => "Template error",
            Self::Upstream => "Upstream error",
            Self::Configuration => "Configuration error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Input => "I",
            Self::Credential => "K",
            Self::Template => "T",
            Self::Upstream => "U",
            Self::Configuration => "C",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Any runtime failure
    GeneralError = 1,
    /// Command-line usage error (clap convention)
    Usage = 2,
    /// Cancelled with Ctrl-C (128 + SIGINT)
    Interrupted = 130,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Main error type for prompt-polish operations.
#[derive(Error, Debug)]
pub enum PolishError {
    // ==========================================================================
    // Input errors
    // ==========================================================================
    /// Neither a flag, a positional argument, nor piped stdin supplied a prompt.
    #[error("no prompt provided. Either pass it as an argument or pipe it to stdin")]
    NoPromptProvided,

    /// Piped stdin was empty or whitespace-only.
    #[error("no input detected. Pipe or redirect a prompt into stdin")]
    EmptyInput,

    /// A prompt given on the command line was blank after trimming.
    #[error("prompt from {source_name} is empty")]
    BlankPrompt { source_name: &'static str },

    /// The user pressed Ctrl-C while the request was in flight.
    #[error("interrupted")]
    Interrupted,

    // ==========================================================================
    // Credential errors
    // ==========================================================================
    /// Required API key variable is not set.
    #[error("{name} environment variable not set")]
    MissingCredential { name: String },

    // ==========================================================================
    // Template errors
    // ==========================================================================
    /// System prompt file does not exist.
    #[error("system prompt file not found: {path}")]
    TemplateNotFound { path: String },

    /// System prompt file exists but could not be read.
    #[error("failed to read system prompt file {path}: {message}")]
    TemplateRead { path: String, message: String },

    /// System prompt file holds nothing but its header.
    #[error("system prompt file is empty: {path}")]
    TemplateEmpty { path: String },

    // ==========================================================================
    // Upstream errors
    // ==========================================================================
    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout.
    #[error("request timeout after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// The service refused the API key.
    #[error("authentication rejected (HTTP {status}): {message}")]
    AuthRejected { status: u16, message: String },

    /// The service throttled the request.
    #[error("rate limited: {message}")]
    RateLimited { message: String },

    /// Any other non-success HTTP status.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// 2xx response that does not carry a usable completion.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    // ==========================================================================
    // Configuration errors
    // ==========================================================================
    /// Error parsing configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Invalid value in configuration.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    // ==========================================================================
    // Internal errors
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PolishError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::NoPromptProvided => ExitCode::Usage,
            Self::Interrupted => ExitCode::Interrupted,
            _ => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and routing.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::NoPromptProvided
            | Self::EmptyInput
            | Self::BlankPrompt { .. }
            | Self::Interrupted => ErrorCategory::Input,

            Self::MissingCredential { .. } => ErrorCategory::Credential,

            Self::TemplateNotFound { .. }
            | Self::TemplateRead { .. }
            | Self::TemplateEmpty { .. } => ErrorCategory::Template,

            Self::Network(_)
            | Self::Timeout { .. }
            | Self::AuthRejected { .. }
            | Self::RateLimited { .. }
            | Self::ApiError { .. }
            | Self::MalformedResponse(_) => ErrorCategory::Upstream,

            Self::ConfigParse { .. } | Self::ConfigInvalid { .. } => ErrorCategory::Configuration,

            Self::Io(_) | Self::Json(_) | Self::Other(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `PP-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoPromptProvided => "PP-I001",
            Self::EmptyInput => "PP-I002",
            Self::BlankPrompt { .. } => "PP-I003",
            Self::Interrupted => "PP-I004",

            Self::MissingCredential { .. } => "PP-K001",

            Self::TemplateNotFound { .. } => "PP-T001",
            Self::TemplateRead { .. } => "PP-T002",
            Self::TemplateEmpty { .. } => "PP-T003",

            Self::Network(_) => "PP-U001",
            Self::Timeout { .. } => "PP-U002",
            Self::AuthRejected { .. } => "PP-U003",
            Self::RateLimited { .. } => "PP-U004",
            Self::ApiError { .. } => "PP-U005",
            Self::MalformedResponse(_) => "PP-U006",

            Self::ConfigParse { .. } => "PP-C001",
            Self::ConfigInvalid { .. } => "PP-C002",

            Self::Io(_) => "PP-X001",
            Self::Json(_) => "PP-X002",
            Self::Other(_) => "PP-X099",
        }
    }

    /// Whether the error came from the remote completion call.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self.category(), ErrorCategory::Upstream)
    }

    /// Returns actionable fix suggestions for this error.
    #[must_use]
    pub fn fix_suggestions(&self) -> Vec<FixSuggestion> {
        match self {
            Self::NoPromptProvided | Self::EmptyInput | Self::BlankPrompt { .. } => {
                suggestions::no_input_suggestions()
            }
            Self::MissingCredential { name } => suggestions::missing_credential_suggestions(name),
            Self::TemplateNotFound { path } => suggestions::template_not_found_suggestions(path),
            Self::TemplateRead { path, .. } | Self::TemplateEmpty { path } => {
                suggestions::template_unreadable_suggestions(path)
            }
            Self::Timeout { seconds } => suggestions::timeout_suggestions(*seconds),
            Self::AuthRejected { .. } => suggestions::auth_rejected_suggestions(),
            Self::RateLimited { .. } => suggestions::rate_limited_suggestions(),
            Self::Network(_) | Self::ApiError { .. } | Self::MalformedResponse(_) => {
                suggestions::upstream_suggestions()
            }
            Self::ConfigParse { path, .. } => suggestions::config_parse_suggestions(path),
            Self::ConfigInvalid { key, .. } => suggestions::config_invalid_suggestions(key),
            Self::Interrupted | Self::Io(_) | Self::Json(_) | Self::Other(_) => Vec::new(),
        }
    }
}

/// Result type alias for prompt-polish operations.
pub type Result<T> = std::result::Result<T, PolishError>;

// =============================================================================
// Tests
// =============================================================================
