//! Completion output.

use std::io::Write;

use crate::core::completion::Completion;
use crate::error::Result;

/// Write the trimmed completion followed by a newline, then flush.
///
/// The text is printed verbatim otherwise; no attempt is made to check
/// that the model honoured the requested section layout.
///
/// # Errors
///
/// Returns an I/O error if the writer fails.
pub fn write_completion<W: Write>(writer: &mut W, completion: &Completion) -> Result<()> {
    writeln!(writer, "{}", completion.trimmed())?;
    writer.flush()?;
    Ok(())
}
