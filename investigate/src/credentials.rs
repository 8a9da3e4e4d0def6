//! API token handling.
//!
//! The Investigate API takes its credential as the `apiToken` query
//! parameter. [`attach_token`] is the only place that knows this.

use crate::traits::TokenProvider;
use std::fmt;
use url::Url;

/// Query parameter carrying the credential
pub const TOKEN_QUERY_PARAM: &str = "apiToken";

/// An API token. `Debug` and `Display` never reveal the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a token, treating blank input as no token
    pub fn new<S: Into<String>>(value: S) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Put the credential on an outgoing request URL
pub(crate) fn attach_token(url: &mut Url, token: &ApiToken) {
    url.query_pairs_mut()
        .append_pair(TOKEN_QUERY_PARAM, token.expose());
}

/// Reads the token from environment variables on every call; the first
/// non-empty variable wins
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    names: Vec<String>,
}

impl EnvTokenProvider {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl TokenProvider for EnvTokenProvider {
    fn api_token(&self) -> Option<ApiToken> {
        self.names
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find_map(ApiToken::new)
    }
}

/// Fixed token, resolved once by the caller
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: Option<ApiToken>,
}

impl StaticTokenProvider {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self {
            token: ApiToken::new(token),
        }
    }

    pub fn none() -> Self {
        Self { token: None }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn api_token(&self) -> Option<ApiToken> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_redacted() {
        let token = ApiToken::new("s3cr3t-value").unwrap();
        assert!(!format!("{:?}", token).contains("s3cr3t"));
        assert!(!token.to_string().contains("s3cr3t"));
        assert_eq!(token.expose(), "s3cr3t-value");
    }

    #[test]
    fn test_blank_token_is_absent() {
        assert!(ApiToken::new("").is_none());
        assert!(ApiToken::new("   ").is_none());
        assert!(StaticTokenProvider::new("").api_token().is_none());
        assert!(StaticTokenProvider::none().api_token().is_none());
    }

    #[test]
    fn test_attach_token_adds_query_param() {
        let mut url = Url::parse("https://api.example.com/v1/search").unwrap();
        attach_token(&mut url, &ApiToken::new("a b&c").unwrap());
        assert_eq!(url.query(), Some("apiToken=a+b%26c"));
    }

    #[test]
    fn test_env_provider_first_non_empty_wins() {
        // Variable names unique to this test keep it independent of the real environment
        let primary = "INVESTIGATE_TEST_PRIMARY_TOKEN_7F3A";
        let secondary = "INVESTIGATE_TEST_SECONDARY_TOKEN_7F3A";
        let provider = EnvTokenProvider::new([primary, secondary]);

        std::env::remove_var(primary);
        std::env::remove_var(secondary);
        assert!(provider.api_token().is_none());

        std::env::set_var(primary, "");
        std::env::set_var(secondary, "second");
        assert_eq!(provider.api_token().unwrap().expose(), "second");

        std::env::set_var(primary, "first");
        assert_eq!(provider.api_token().unwrap().expose(), "first");

        std::env::remove_var(primary);
        std::env::remove_var(secondary);
    }
}
