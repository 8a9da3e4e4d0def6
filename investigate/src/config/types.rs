use crate::error::{InvestigateError, Result};
use crate::traits::ConfigValidator;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Production API root
pub const PRODUCTION_BASE_URL: &str = "https://platform.ke-la.com/api/investigate/v1";
/// Local development proxy root
pub const PROXY_BASE_URL: &str = "http://localhost:3001/api/investigate/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Token variables, checked in order; the first non-empty one wins
pub const DEFAULT_TOKEN_ENV_VARS: [&str; 2] =
    ["EXPO_PUBLIC_INVESTIGATE_API_TOKEN", "INVESTIGATE_API_TOKEN"];
/// `"true"` selects the proxy base URL
pub const USE_PROXY_ENV_VAR: &str = "EXPO_PUBLIC_USE_PROXY";
pub const TIMEOUT_ENV_VAR: &str = "INVESTIGATE_API_TIMEOUT_MS";

/// Resolved client configuration, fixed for the lifetime of a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root; `/search` and `/counters` are appended to it
    pub base_url: Url,
    /// Upper bound for one call, connection included
    pub timeout: Duration,
    /// Environment variables holding the API token, in priority order
    pub token_env_vars: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(PRODUCTION_BASE_URL).expect("production base URL is valid"),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            token_env_vars: DEFAULT_TOKEN_ENV_VARS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// On-disk configuration (`investigate.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub credentials: CredentialsSection,
}

/// `[api]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSection {
    /// Route calls through the local development proxy
    #[serde(default)]
    pub use_proxy: bool,
    #[serde(default = "default_production_url")]
    pub production_url: String,
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            use_proxy: false,
            production_url: default_production_url(),
            proxy_url: default_proxy_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// `[credentials]` section. Only names of variables live here, never the token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CredentialsSection {
    #[serde(default = "default_token_env_vars")]
    pub env_vars: Vec<String>,
}

impl Default for CredentialsSection {
    fn default() -> Self {
        Self {
            env_vars: default_token_env_vars(),
        }
    }
}

fn default_production_url() -> String {
    PRODUCTION_BASE_URL.to_string()
}

fn default_proxy_url() -> String {
    PROXY_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_token_env_vars() -> Vec<String> {
    DEFAULT_TOKEN_ENV_VARS.iter().map(|s| s.to_string()).collect()
}

impl ConfigFile {
    /// The base URL selected by the proxy toggle
    pub fn selected_base_url(&self) -> &str {
        if self.api.use_proxy {
            &self.api.proxy_url
        } else {
            &self.api.production_url
        }
    }

    /// Turn file settings into a validated [`ApiConfig`]
    pub fn resolve(&self) -> Result<ApiConfig> {
        let base_url = Url::parse(self.selected_base_url()).map_err(|e| {
            InvestigateError::invalid_config(format!(
                "Invalid base URL '{}': {}",
                self.selected_base_url(),
                e
            ))
        })?;

        let config = ApiConfig {
            base_url,
            timeout: Duration::from_millis(self.api.timeout_ms),
            token_env_vars: self.credentials.env_vars.clone(),
        };

        super::validator::ConfigValidatorImpl::new().validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_production() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url.as_str(), PRODUCTION_BASE_URL);
        assert_eq!(config.timeout, Duration::from_millis(10_000));
        assert_eq!(
            config.token_env_vars,
            vec!["EXPO_PUBLIC_INVESTIGATE_API_TOKEN", "INVESTIGATE_API_TOKEN"]
        );
    }

    #[test]
    fn test_proxy_toggle_selects_proxy_url() {
        let mut file = ConfigFile::default();
        assert_eq!(file.resolve().unwrap().base_url.as_str(), PRODUCTION_BASE_URL);

        file.api.use_proxy = true;
        assert_eq!(file.resolve().unwrap().base_url.as_str(), PROXY_BASE_URL);
    }

    #[test]
    fn test_resolve_rejects_bad_url() {
        let mut file = ConfigFile::default();
        file.api.production_url = "not a url".to_string();

        let err = file.resolve().unwrap_err();
        assert!(err.to_string().contains("Invalid base URL 'not a url'"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let file: ConfigFile = toml::from_str("[api]\ntimeout_ms = 2500\n").unwrap();
        assert!(!file.api.use_proxy);
        assert_eq!(file.api.production_url, PRODUCTION_BASE_URL);
        assert_eq!(file.credentials.env_vars.len(), 2);
        assert_eq!(file.resolve().unwrap().timeout, Duration::from_millis(2500));
    }
}
