//! Error rendering for prompt-polish.
//!
//! Errors are written to stderr as a single `error:` line carrying the stable
//! error code, followed by an optional `hint:` line. Colour is only used when
//! stderr is a terminal and colour has not been disabled.

use colored::Colorize;

use crate::error::PolishError;

/// Render an error for the error stream.
#[must_use]
pub fn render_error(error: &PolishError, use_color: bool) -> String {
    let mut lines = Vec::with_capacity(2);

    let code = format!("[{}]", error.error_code());
    if use_color {
        lines.push(format!(
            "{} {} {}",
            "error:".red().bold(),
            error,
            code.dimmed()
        ));
    } else {
        lines.push(format!("error: {error} {code}"));
    }

    if let Some(hint) = first_hint(error) {
        if use_color {
            lines.push(format!("{} {}", "hint:".cyan().bold(), hint));
        } else {
            lines.push(format!("hint: {hint}"));
        }
    }

    lines.join("\n")
}

/// First runnable command, else the explanation, of the first suggestion.
fn first_hint(error: &PolishError) -> Option<String> {
    let suggestion = error.fix_suggestions().into_iter().next()?;
    suggestion
        .commands
        .into_iter()
        .find(|cmd| !cmd.starts_with('#'))
        .or_else(|| Some(suggestion.context).filter(|c| !c.is_empty()))
}
