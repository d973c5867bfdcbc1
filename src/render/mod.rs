//! Output rendering.
//!
//! The completion goes to stdout; everything diagnostic goes to stderr.

pub mod completion;
pub mod error;

pub use completion::write_completion;
pub use error::render_error;
