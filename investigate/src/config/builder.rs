use crate::config::types::ApiConfig;
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{InvestigateError, Result};
use crate::traits::ConfigValidator;
use std::time::Duration;
use url::Url;

/// Builder for ApiConfig to improve API ergonomics
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    token_env_vars: Option<Vec<String>>,
}

impl ApiConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            token_env_vars: None,
        }
    }

    /// Set the API root
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-call timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub fn timeout_ms(self, millis: u64) -> Self {
        self.timeout(Duration::from_millis(millis))
    }

    /// Replace the list of token environment variables
    #[must_use]
    pub fn token_env_vars<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.token_env_vars = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ApiConfig> {
        let defaults = ApiConfig::default();

        let base_url = match self.base_url {
            Some(raw) => Url::parse(&raw).map_err(|e| {
                InvestigateError::invalid_config(format!("Invalid base URL '{}': {}", raw, e))
            })?,
            None => defaults.base_url,
        };

        let config = ApiConfig {
            base_url,
            timeout: self.timeout.unwrap_or(defaults.timeout),
            token_env_vars: self.token_env_vars.unwrap_or(defaults.token_env_vars),
        };

        ConfigValidatorImpl::new().validate(&config)?;
        Ok(config)
    }
}

impl Default for ApiConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ApiConfig::builder().build().unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ApiConfig::builder()
            .base_url("http://127.0.0.1:9000/api/investigate/v1")
            .timeout_ms(250)
            .token_env_vars(["TEST_TOKEN"])
            .build()
            .unwrap();

        assert_eq!(config.base_url.port(), Some(9000));
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.token_env_vars, vec!["TEST_TOKEN".to_string()]);
    }

    #[test]
    fn test_builder_validates() {
        assert!(ApiConfig::builder().base_url("::nope::").build().is_err());
        assert!(ApiConfig::builder().timeout(Duration::ZERO).build().is_err());
    }
}
