//! Fix suggestions for prompt-polish errors.
//!
//! Provides actionable hints mapped to specific error types,
//! shown under the error line on stderr.

// =============================================================================
// Fix Suggestion Types
// =============================================================================

/// A fix suggestion for an error.
#[derive(Debug, Clone)]
pub struct FixSuggestion {
    /// Commands to try, copy-paste ready for the terminal.
    pub commands: Vec<String>,

    /// Explanation of why this error occurred.
    pub context: String,
}

impl FixSuggestion {
    /// Creates a new fix suggestion with required fields.
    #[must_use]
    pub fn new(commands: Vec<String>, context: impl Into<String>) -> Self {
        Self {
            commands,
            context: context.into(),
        }
    }
}

// =============================================================================
// Suggestion Generators
// =============================================================================

/// Suggestions when no prompt text could be obtained.
#[must_use]
pub fn no_input_suggestions() -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![
            "prompt-polish \"Need help sorting a list faster in JS\"".to_string(),
            "echo \"Need help sorting a list faster in JS\" | prompt-polish".to_string(),
        ],
        "Pass the prompt as an argument, with --prompt, or pipe it on stdin.",
    )]
}

/// Suggestions for a missing API key variable.
#[must_use]
pub fn missing_credential_suggestions(name: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![format!("export {name}=<your-api-key>")],
        format!(
            "The completion API needs a key; it is read from {name} before any request is made. \
             Add the export to your shell profile to keep it set."
        ),
    )]
}

/// Suggestions for a missing system prompt file.
#[must_use]
pub fn template_not_found_suggestions(path: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![
            format!("ls -l {path}"),
            "unset PROMPT_POLISH_TEMPLATE_FILE".to_string(),
        ],
        format!(
            "The system prompt is loaded from {path}. Create the file, or clear the \
             template_file setting to use the built-in instructions."
        ),
    )]
}

/// Suggestions for a system prompt file that exists but is unusable.
#[must_use]
pub fn template_unreadable_suggestions(path: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![format!("ls -l {path}")],
        "Check the file permissions and that it holds UTF-8 text below the `# Instructions` header.",
    )]
}

/// Suggestions for request timeouts.
#[must_use]
pub fn timeout_suggestions(seconds: u64) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![format!("PROMPT_POLISH_TIMEOUT={} prompt-polish ...", seconds * 2)],
        format!("The completion service did not answer within {seconds}s."),
    )]
}

/// Suggestions when the service refuses the key.
#[must_use]
pub fn auth_rejected_suggestions() -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["echo $OPENAI_API_KEY | cut -c1-8".to_string()],
        "The API key was rejected. It may be revoked, mistyped, or scoped to another project.",
    )]
}

/// Suggestions when throttled.
#[must_use]
pub fn rate_limited_suggestions() -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        Vec::new(),
        "The completion service is rate limiting this key. Wait a moment and run the command again.",
    )]
}

/// Generic upstream failure suggestions.
#[must_use]
pub fn upstream_suggestions() -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["PROMPT_POLISH_LOG=debug prompt-polish ...".to_string()],
        "The completion request failed. Re-run with debug logging to see the request and response.",
    )]
}

/// Suggestions for an unparseable config file.
#[must_use]
pub fn config_parse_suggestions(path: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![format!("cat {path}")],
        format!("{path} is not valid TOML. Fix the syntax or remove the file to use defaults."),
    )]
}

/// Suggestions for an invalid config value.
#[must_use]
pub fn config_invalid_suggestions(key: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        Vec::new(),
        format!("Correct '{key}' in the config file or the matching environment variable."),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_suggestion_new() {
        let s = FixSuggestion::new(vec!["cmd".to_string()], "context");
        assert_eq!(s.commands, vec!["cmd".to_string()]);
        assert_eq!(s.context, "context");
    }

    #[test]
    fn timeout_suggestion_doubles_timeout() {
        let s = timeout_suggestions(30);
        assert!(s[0].commands[0].contains("PROMPT_POLISH_TIMEOUT=60"));
    }

    #[test]
    fn template_not_found_mentions_path() {
        let s = template_not_found_suggestions("/etc/pp/instructions.md");
        assert!(s[0].context.contains("/etc/pp/instructions.md"));
    }
}
