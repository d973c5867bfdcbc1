//! CLI argument parsing and command execution.

pub mod args;
pub mod polish;

pub use args::Cli;
