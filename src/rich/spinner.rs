//! Spinner indicator for indeterminate progress.
//!
//! [`SpinnerGuard`] animates a [`Spinner`] on a background thread while the
//! main task waits on the network. Dropping the guard stops the thread, clears
//! the line and shows the cursor again, so every exit path restores the terminal.

use std::io::Write;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveToColumn, Show};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

/// Delay between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(80);

const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A single spinner state: frame set, position, and label.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    current: usize,
    label: Option<String>,
}

impl Spinner {
    /// Create a new spinner with default frames.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frames: DOTS,
            current: 0,
            label: None,
        }
    }

    /// Create a spinner with a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Advance to the next frame.
    #[must_use]
    pub const fn tick(mut self) -> Self {
        self.current = (self.current + 1) % self.frames.len();
        self
    }

    /// Get the current frame.
    #[must_use]
    pub fn frame(&self) -> &str {
        self.frames[self.current]
    }

    /// Frame followed by the label, if any.
    #[must_use]
    pub fn render(&self) -> String {
        self.label.as_ref().map_or_else(
            || self.frame().to_string(),
            |label| format!("{} {}", self.frame(), label),
        )
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

/// Running spinner; stops when dropped.
#[derive(Debug)]
pub struct SpinnerGuard {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl SpinnerGuard {
    /// Start animating `spinner` into `writer`.
    ///
    /// At least one frame is drawn, even if the guard is dropped at once.
    pub fn start<W>(spinner: Spinner, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || animate(spinner, writer, &rx));
        tracing::debug!("Spinner started");
        Self {
            stop: Some(tx),
            handle: Some(handle),
        }
    }

    /// A guard that draws nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            stop: None,
            handle: None,
        }
    }

    /// Whether an animation thread is attached.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop now instead of at end of scope.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the thread with `Disconnected`.
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("Spinner thread panicked");
            }
            tracing::debug!("Spinner stopped");
        }
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn animate<W: Write>(mut spinner: Spinner, mut writer: W, stop: &mpsc::Receiver<()>) {
    // Write failures are ignored.
    let _ = queue!(writer, Hide);
    loop {
        let _ = queue!(
            writer,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(spinner.render())
        );
        let _ = writer.flush();

        match stop.recv_timeout(FRAME_INTERVAL) {
            Err(RecvTimeoutError::Timeout) => spinner = spinner.tick(),
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    let _ = queue!(writer, MoveToColumn(0), Clear(ClearType::CurrentLine), Show);
    let _ = writer.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SharedBuffer;

    #[test]
    fn test_spinner_tick() {
        let spinner = Spinner::new();
        let frame1 = spinner.frame().to_string();
        let spinner = spinner.tick();
        assert_ne!(frame1, spinner.frame());
    }

    #[test]
    fn test_spinner_wraps_around() {
        let mut spinner = Spinner::new();
        for _ in 0..DOTS.len() {
            spinner = spinner.tick();
        }
        assert_eq!(spinner.frame(), DOTS[0]);
    }

    #[test]
    fn test_spinner_with_label() {
        let spinner = Spinner::new().with_label("Loading");
        assert_eq!(spinner.render(), "⠋ Loading");
    }

    #[test]
    fn guard_draws_then_restores_cursor_on_drop() {
        let buffer = SharedBuffer::default();
        {
            let guard = SpinnerGuard::start(
                Spinner::new().with_label("Refining prompt..."),
                buffer.clone(),
            );
            assert!(guard.is_active());
        }
        let out = buffer.contents();
        assert!(out.contains("Refining prompt..."));
        assert!(out.starts_with("\x1b[?25l"), "cursor hidden first: {out:?}");
        assert!(out.ends_with("\x1b[?25h"), "cursor shown last: {out:?}");
    }

    #[test]
    fn explicit_stop_finishes_output() {
        let buffer = SharedBuffer::default();
        let guard = SpinnerGuard::start(Spinner::new(), buffer.clone());
        guard.stop();
        let len = buffer.contents().len();
        thread::sleep(FRAME_INTERVAL * 2);
        assert_eq!(buffer.contents().len(), len, "no writes after stop");
    }

    #[test]
    fn disabled_guard_is_inert() {
        let guard = SpinnerGuard::disabled();
        assert!(!guard.is_active());
        drop(guard);
    }
}
