use crate::config::types::{ApiConfig, ConfigFile, TIMEOUT_ENV_VAR, USE_PROXY_ENV_VAR};
use crate::error::{InvestigateError, Result};
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ApiConfig>;
    fn load_from_env() -> Result<ApiConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from an investigate.toml file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ApiConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(InvestigateError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| {
            InvestigateError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        file.resolve()
    }

    /// Load defaults with overrides from the process environment
    fn load_from_env() -> Result<ApiConfig> {
        load_with_env(|name| std::env::var(name).ok())
    }
}

/// Build a config from defaults plus whatever `lookup` returns for the
/// proxy toggle and timeout variables
pub fn load_with_env<F>(lookup: F) -> Result<ApiConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut file = ConfigFile::default();

    if let Some(flag) = lookup(USE_PROXY_ENV_VAR) {
        file.api.use_proxy = flag.trim() == "true";
    }

    if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
        file.api.timeout_ms = raw.trim().parse().map_err(|_| {
            InvestigateError::invalid_config(format!(
                "{} must be a whole number of milliseconds, got '{}'",
                TIMEOUT_ENV_VAR, raw
            ))
        })?;
    }

    file.resolve()
}

// Convenience functions maintaining the API
impl ApiConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::ApiConfigBuilder {
        crate::config::builder::ApiConfigBuilder::new()
    }

    /// Load configuration from an investigate.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        DefaultConfigLoader::load_from_env()
    }
}
