//! Environment detection utilities.

use std::io::IsTerminal;

/// Check if stderr is a TTY.
#[must_use]
pub fn stderr_is_tty() -> bool {
    std::io::stderr().is_terminal()
}

/// Check if colour should be used on stderr.
#[must_use]
pub fn should_color_stderr() -> bool {
    color_allowed(|key| std::env::var(key).ok(), stderr_is_tty())
}

/// Colour is allowed unless `NO_COLOR` is set, `TERM=dumb`, or the stream is not a TTY.
#[must_use]
pub fn color_allowed(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if env("NO_COLOR").is_some() {
        return false;
    }

    if env("TERM").is_some_and(|t| t == "dumb") {
        return false;
    }

    is_tty
}
