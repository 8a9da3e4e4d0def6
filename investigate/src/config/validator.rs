use crate::config::types::ApiConfig;
use crate::error::{InvestigateError, Result};
use crate::traits::ConfigValidator;

/// Configuration validator implementation
#[derive(Debug, Default)]
pub struct ConfigValidatorImpl;

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }
}

impl ConfigValidator for ConfigValidatorImpl {
    type Config = ApiConfig;

    fn validate(&self, config: &ApiConfig) -> Result<()> {
        match config.base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(InvestigateError::invalid_config(format!(
                    "Unsupported URL scheme '{}' in base URL {}. Use http or https.",
                    other, config.base_url
                )))
            }
        }

        if config.base_url.host_str().is_none() {
            return Err(InvestigateError::invalid_config(format!(
                "Base URL {} has no host",
                config.base_url
            )));
        }

        if config.base_url.query().is_some() {
            return Err(InvestigateError::invalid_config(format!(
                "Base URL {} must not carry a query string",
                config.base_url
            )));
        }

        if config.timeout.is_zero() {
            return Err(InvestigateError::invalid_config(
                "Timeout must be greater than zero",
            ));
        }

        if config.token_env_vars.is_empty() {
            return Err(InvestigateError::invalid_config(
                "At least one token environment variable must be configured",
            ));
        }

        if let Some(blank) = config.token_env_vars.iter().find(|name| name.trim().is_empty()) {
            return Err(InvestigateError::invalid_config(format!(
                "Token environment variable names cannot be blank (got '{}')",
                blank
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use url::Url;

    fn valid() -> ApiConfig {
        ApiConfig::default()
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ConfigValidatorImpl::new().validate(&valid()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = valid();
        config.base_url = Url::parse("ftp://files.example.com/api").unwrap();
        let err = ConfigValidatorImpl::new().validate(&config).unwrap_err();
        assert!(err.to_string().contains("Unsupported URL scheme 'ftp'"));
    }

    #[test]
    fn test_rejects_query_in_base_url() {
        let mut config = valid();
        config.base_url = Url::parse("https://api.example.com/v1?apiToken=x").unwrap();
        assert!(ConfigValidatorImpl::new().validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = valid();
        config.timeout = Duration::ZERO;
        assert!(ConfigValidatorImpl::new().validate(&config).is_err());
    }

    #[test]
    fn test_rejects_missing_token_sources() {
        let mut config = valid();
        config.token_env_vars.clear();
        assert!(ConfigValidatorImpl::new().validate(&config).is_err());

        config.token_env_vars = vec!["TOKEN".to_string(), "  ".to_string()];
        assert!(ConfigValidatorImpl::new().validate(&config).is_err());
    }
}
