use crate::credentials::ApiToken;
use crate::error::Result;
use crate::http::{RawResponse, TransportError};
use std::future::Future;
use url::Url;

/// Trait for the wire layer underneath the search client
pub trait Transport: Send + Sync {
    /// POST with an empty body to `url` and collect the whole response
    fn post(
        &self,
        url: Url,
    ) -> impl Future<Output = std::result::Result<RawResponse, TransportError>> + Send;
}

/// Trait for looking up the API token at call time
pub trait TokenProvider: Send + Sync {
    /// The token to use for the next call, if one is configured
    fn api_token(&self) -> Option<ApiToken>;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
