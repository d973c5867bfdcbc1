//! Configuration storage.

pub mod config;
pub mod paths;

pub use config::{
    Config, ConfigSource, ConfigSources, ENV_BASE_URL, ENV_CONFIG, ENV_MODEL, ENV_TEMPLATE_FILE,
    ENV_TIMEOUT, ResolvedConfig,
};
pub use paths::AppPaths;
