//! Terminal widgets drawn on stderr.

pub mod spinner;

pub use spinner::{Spinner, SpinnerGuard};
