//! System prompt resolution.
//!
//! The instructions sent as the `system` message either come from the text
//! compiled into the binary or from a file on disk. A file may open with an
//! `# Instructions` header line, which is dropped.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{PolishError, Result};

/// Instructions compiled into the binary.
pub const EMBEDDED_SYSTEM_PROMPT: &str = include_str!("system_prompt.md");

/// Header line stripped from the top of template files.
pub const TEMPLATE_HEADER: &str = "# Instructions";

/// Immutable instructional text for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPromptTemplate(String);

impl SystemPromptTemplate {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The built-in instructions.
    #[must_use]
    pub fn embedded() -> Self {
        Self(EMBEDDED_SYSTEM_PROMPT.trim().to_string())
    }

    /// Build a template from file contents, dropping the header line.
    ///
    /// Returns `None` when nothing but whitespace remains.
    #[must_use]
    pub fn from_file_contents(contents: &str) -> Option<Self> {
        let body = strip_header(contents).trim();
        if body.is_empty() {
            None
        } else {
            Some(Self(body.to_string()))
        }
    }
}

/// Remove a leading `# Instructions` line if the text starts with one.
fn strip_header(contents: &str) -> &str {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let (first, rest) = contents.split_once('\n').unwrap_or((contents, ""));
    if first.trim_end() == TEMPLATE_HEADER {
        rest
    } else {
        contents
    }
}

/// Where the system prompt comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Text compiled into the binary.
    #[default]
    Embedded,
    /// Text read from a file at startup.
    File(PathBuf),
}

impl TemplateSource {
    /// Resolve the template text.
    ///
    /// # Errors
    ///
    /// For [`TemplateSource::File`]: `TemplateNotFound` when the file is missing,
    /// `TemplateRead` for any other read failure, `TemplateEmpty` when the file
    /// has no body.
    pub fn load(&self) -> Result<SystemPromptTemplate> {
        match self {
            Self::Embedded => Ok(SystemPromptTemplate::embedded()),
            Self::File(path) => load_template_file(path),
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded"),
            Self::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

fn load_template_file(path: &Path) -> Result<SystemPromptTemplate> {
    let path_str = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PolishError::TemplateNotFound {
            path: path_str.clone(),
        },
        _ => PolishError::TemplateRead {
            path: path_str.clone(),
            message: e.to_string(),
        },
    })?;

    tracing::debug!(path = %path_str, bytes = contents.len(), "Loaded system prompt file");

    SystemPromptTemplate::from_file_contents(&contents)
        .ok_or(PolishError::TemplateEmpty { path: path_str })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn embedded_describes_both_sections() {
        let template = SystemPromptTemplate::embedded();
        assert!(template.as_str().contains("### Polished Prompt"));
        assert!(template.as_str().contains("### Technical Details"));
        assert!(template.as_str().contains("3 to 7 bullet points"));
        assert_eq!(template.as_str(), template.as_str().trim());
    }

    #[test]
    fn header_is_stripped_and_body_trimmed() {
        let template =
            SystemPromptTemplate::from_file_contents("# Instructions\n\n  Be terse.\nUse Rust.\n\n")
                .unwrap();
        assert_eq!(template.as_str(), "Be terse.\nUse Rust.");
    }

    #[test]
    fn header_with_crlf_is_stripped() {
        let template =
            SystemPromptTemplate::from_file_contents("# Instructions\r\nBody\r\n").unwrap();
        assert_eq!(template.as_str(), "Body");
    }

    #[test]
    fn file_without_header_is_used_whole() {
        let template =
            SystemPromptTemplate::from_file_contents("## Rules\nBe terse.\n# Instructions\n")
                .unwrap();
        assert_eq!(template.as_str(), "## Rules\nBe terse.\n# Instructions");
    }

    #[test]
    fn header_only_file_is_empty() {
        assert!(SystemPromptTemplate::from_file_contents("# Instructions\n   \n").is_none());
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "# Instructions\nPolish the prompt.\n").unwrap();

        let source = TemplateSource::File(file.path().to_path_buf());
        assert_eq!(source.load().unwrap().as_str(), "Polish the prompt.");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = TemplateSource::File(dir.path().join("nope.md"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, PolishError::TemplateNotFound { .. }));
    }

    #[test]
    fn directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TemplateSource::File(dir.path().to_path_buf())
            .load()
            .unwrap_err();
        assert!(matches!(err, PolishError::TemplateRead { .. }));
    }

    #[test]
    fn embedded_source_display() {
        assert_eq!(TemplateSource::Embedded.to_string(), "embedded");
    }
}
