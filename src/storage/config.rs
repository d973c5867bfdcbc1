//! Configuration file loading and resolution.
//!
//! Loads configuration from `config.toml` in the platform config directory
//! (e.g. `~/.config/prompt-polish/config.toml` on Linux).
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. Environment variables
//! 2. Config file
//! 3. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `PROMPT_POLISH_MODEL`: Model identifier
//! - `PROMPT_POLISH_TIMEOUT`: Request timeout in seconds
//! - `OPENAI_BASE_URL`: API root, e.g. `https://api.openai.com/v1`
//! - `PROMPT_POLISH_TEMPLATE_FILE`: Load the system prompt from this file
//! - `PROMPT_POLISH_CONFIG`: Override config file path

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::core::http::DEFAULT_TIMEOUT;
use crate::core::openai::DEFAULT_BASE_URL;
use crate::core::template::TemplateSource;
use crate::error::{PolishError, Result};

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable for the model identifier.
pub const ENV_MODEL: &str = "PROMPT_POLISH_MODEL";
/// Environment variable for timeout in seconds.
pub const ENV_TIMEOUT: &str = "PROMPT_POLISH_TIMEOUT";
/// Environment variable for the API root.
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
/// Environment variable selecting a template file.
pub const ENV_TEMPLATE_FILE: &str = "PROMPT_POLISH_TEMPLATE_FILE";
/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "PROMPT_POLISH_CONFIG";

/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Upper bound for the request timeout.
pub const MAX_TIMEOUT_SECS: u64 = 600;

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved configuration after merging env vars and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Model identifier sent with the request.
    pub model: String,
    /// Request timeout.
    pub timeout: Duration,
    /// API root URL.
    pub base_url: String,
    /// Where the system prompt comes from.
    pub template: TemplateSource,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub model: ConfigSource,
    pub timeout: ConfigSource,
    pub base_url: ConfigSource,
    pub template: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            base_url: DEFAULT_BASE_URL.to_string(),
            template: TemplateSource::Embedded,
            sources: ConfigSources::default(),
        }
    }
}

impl ResolvedConfig {
    /// Resolve configuration from the process environment and config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is invalid, or any
    /// resolved value is out of range.
    pub fn resolve() -> Result<Self> {
        let config = Self::load_config()?;
        let resolved = Self::resolve_from(&config, |key| std::env::var(key).ok())?;

        tracing::debug!(
            model = %resolved.model,
            model_source = %resolved.sources.model,
            timeout_secs = resolved.timeout.as_secs(),
            timeout_source = %resolved.sources.timeout,
            base_url = %resolved.base_url,
            base_url_source = %resolved.sources.base_url,
            template = %resolved.template,
            template_source = %resolved.sources.template,
            "Resolved configuration"
        );
        Ok(resolved)
    }

    /// Load config file, respecting `PROMPT_POLISH_CONFIG` override.
    fn load_config() -> Result<Config> {
        if let Ok(path) = std::env::var(ENV_CONFIG) {
            Config::load_from(Path::new(&path))
        } else {
            Config::load()
        }
    }

    /// Merge `config` with values from `env`, then validate.
    ///
    /// Blank environment values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`PolishError::ConfigInvalid`] for unparseable or out-of-range values.
    pub fn resolve_from(config: &Config, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = |key: &str| {
            env(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut sources = ConfigSources::default();

        let model = pick(
            env(ENV_MODEL),
            config.general.model.clone(),
            &mut sources.model,
        )
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs = match env(ENV_TIMEOUT) {
            Some(raw) => {
                sources.timeout = ConfigSource::Env;
                raw.parse::<u64>().map_err(|_| PolishError::ConfigInvalid {
                    key: ENV_TIMEOUT.to_string(),
                    value: raw.clone(),
                    message: "expected a whole number of seconds".to_string(),
                })?
            }
            None => pick(None, config.general.timeout_seconds, &mut sources.timeout)
                .unwrap_or_else(|| DEFAULT_TIMEOUT.as_secs()),
        };

        let base_url = pick(
            env(ENV_BASE_URL),
            config.general.base_url.clone(),
            &mut sources.base_url,
        )
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let template = pick(
            env(ENV_TEMPLATE_FILE).map(PathBuf::from),
            config.general.template_file.clone(),
            &mut sources.template,
        )
        .map_or(TemplateSource::Embedded, TemplateSource::File);

        let resolved = Self {
            model,
            timeout: Duration::from_secs(timeout_secs),
            base_url,
            template,
            sources,
        };
        resolved.validate()?;
        Ok(resolved)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`PolishError::ConfigInvalid`] naming the first bad key.
    pub fn validate(&self) -> Result<()> {
        let secs = self.timeout.as_secs();
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(PolishError::ConfigInvalid {
                key: "timeout_seconds".to_string(),
                value: secs.to_string(),
                message: format!("must be between 1 and {MAX_TIMEOUT_SECS} seconds"),
            });
        }

        if self.model.trim().is_empty() {
            return Err(PolishError::ConfigInvalid {
                key: "model".to_string(),
                value: self.model.clone(),
                message: "must not be empty".to_string(),
            });
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(PolishError::ConfigInvalid {
                key: "base_url".to_string(),
                value: self.base_url.clone(),
                message: "must start with http:// or https://".to_string(),
            });
        }

        Ok(())
    }
}

/// Env beats file; record which one won.
fn pick<T>(env: Option<T>, file: Option<T>, source: &mut ConfigSource) -> Option<T> {
    if env.is_some() {
        *source = ConfigSource::Env;
        env
    } else if file.is_some() {
        *source = ConfigSource::ConfigFile;
        file
    } else {
        *source = ConfigSource::Default;
        None
    }
}

// =============================================================================
// Config file
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Model identifier.
    pub model: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
    /// API root URL.
    pub base_url: Option<String>,
    /// Load the system prompt from this file instead of the built-in text.
    /// Relative paths are taken from the config file's directory.
    pub template_file: Option<PathBuf>,
}

impl GeneralConfig {
    /// Anchor relative paths at `base`.
    fn anchor_paths(&mut self, base: &Path) {
        if let Some(path) = self.template_file.as_mut().filter(|p| p.is_relative()) {
            *path = base.join(&*path);
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error only if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().config_file())
    }

    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error only if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| PolishError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(dir) = path.parent() {
            config.general.anchor_paths(dir);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let resolved = ResolvedConfig::resolve_from(&Config::default(), env_of(&[])).unwrap();
        assert_eq!(resolved.model, "gpt-4o-mini");
        assert_eq!(resolved.timeout, Duration::from_secs(30));
        assert_eq!(resolved.base_url, "https://api.openai.com/v1");
        assert_eq!(resolved.template, TemplateSource::Embedded);
        assert_eq!(resolved.sources.model, ConfigSource::Default);
        assert_eq!(resolved.sources.template, ConfigSource::Default);
    }

    #[test]
    fn load_missing_file_returns_default() {
        let config = Config::load_from(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert!(config.general.model.is_none());
    }

    #[test]
    fn load_valid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[general]
model = "gpt-4o"
timeout_seconds = 60
template_file = "/etc/prompt-polish/instructions.md"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        let resolved = ResolvedConfig::resolve_from(&config, env_of(&[])).unwrap();
        assert_eq!(resolved.model, "gpt-4o");
        assert_eq!(resolved.timeout, Duration::from_secs(60));
        assert_eq!(
            resolved.template,
            TemplateSource::File(PathBuf::from("/etc/prompt-polish/instructions.md"))
        );
        assert_eq!(resolved.sources.timeout, ConfigSource::ConfigFile);
    }

    #[test]
    fn relative_template_file_is_taken_from_config_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\ntemplate_file = \"prompts/instructions.md\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        let resolved = ResolvedConfig::resolve_from(&config, env_of(&[])).unwrap();

        assert_eq!(
            resolved.template,
            TemplateSource::File(dir.path().join("prompts/instructions.md"))
        );
        assert_eq!(resolved.sources.template, ConfigSource::ConfigFile);
    }

    #[test]
    fn relative_template_file_from_env_is_left_alone() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\ntemplate_file = \"from-file.md\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        let resolved =
            ResolvedConfig::resolve_from(&config, env_of(&[(ENV_TEMPLATE_FILE, "from-env.md")]))
                .unwrap();

        assert_eq!(
            resolved.template,
            TemplateSource::File(PathBuf::from("from-env.md"))
        );
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, PolishError::ConfigParse { .. }));
    }

    #[test]
    fn env_overrides_file() {
        let config = Config {
            general: GeneralConfig {
                model: Some("from-file".to_string()),
                timeout_seconds: Some(45),
                base_url: Some("https://file.example/v1".to_string()),
                template_file: None,
            },
        };
        let resolved = ResolvedConfig::resolve_from(
            &config,
            env_of(&[
                (ENV_MODEL, "from-env"),
                (ENV_TIMEOUT, "5"),
                (ENV_BASE_URL, "http://127.0.0.1:9999/v1"),
                (ENV_TEMPLATE_FILE, "instructions.md"),
            ]),
        )
        .unwrap();

        assert_eq!(resolved.model, "from-env");
        assert_eq!(resolved.timeout, Duration::from_secs(5));
        assert_eq!(resolved.base_url, "http://127.0.0.1:9999/v1");
        assert_eq!(
            resolved.template,
            TemplateSource::File(PathBuf::from("instructions.md"))
        );
        assert_eq!(resolved.sources.model, ConfigSource::Env);
        assert_eq!(resolved.sources.template, ConfigSource::Env);
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let resolved =
            ResolvedConfig::resolve_from(&Config::default(), env_of(&[(ENV_MODEL, "  ")])).unwrap();
        assert_eq!(resolved.model, DEFAULT_MODEL);
    }

    #[test]
    fn unparseable_timeout_is_invalid() {
        let err =
            ResolvedConfig::resolve_from(&Config::default(), env_of(&[(ENV_TIMEOUT, "soon")]))
                .unwrap_err();
        assert!(matches!(err, PolishError::ConfigInvalid { ref key, .. } if key == ENV_TIMEOUT));
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let err = ResolvedConfig::resolve_from(&Config::default(), env_of(&[(ENV_TIMEOUT, "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn non_http_base_url_is_invalid() {
        let err = ResolvedConfig::resolve_from(
            &Config::default(),
            env_of(&[(ENV_BASE_URL, "api.openai.com")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }
}
