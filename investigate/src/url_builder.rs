use crate::credentials::{attach_token, ApiToken};
use crate::error::{InvestigateError, Result};
use crate::types::{CountersRequest, SearchRequest};
use url::Url;

pub const SEARCH_PATH: &str = "/search";
pub const COUNTERS_PATH: &str = "/counters";

/// Builder for Investigate endpoint URLs with their query strings
pub struct UrlBuilder<'a> {
    base_url: &'a Url,
    token: &'a ApiToken,
}

impl<'a> UrlBuilder<'a> {
    /// Create a new URL builder
    pub fn new(base_url: &'a Url, token: &'a ApiToken) -> Self {
        Self { base_url, token }
    }

    /// `{base}/search?apiToken&query&entity&index[&filter]`
    pub fn search(&self, request: &SearchRequest) -> Result<Url> {
        let mut url = self.endpoint(SEARCH_PATH)?;
        attach_token(&mut url, self.token);
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("query", &request.query)
                .append_pair("entity", request.entity.as_str())
                .append_pair("index", request.index.as_str());
            if let Some(filter) = &request.filter {
                pairs.append_pair("filter", &filter.to_string());
            }
        }
        Ok(url)
    }

    /// `{base}/counters?apiToken&query&entity`
    pub fn counters(&self, request: &CountersRequest) -> Result<Url> {
        let mut url = self.endpoint(COUNTERS_PATH)?;
        attach_token(&mut url, self.token);
        url.query_pairs_mut()
            .append_pair("query", &request.query)
            .append_pair("entity", request.entity.as_str());
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let full_url = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&full_url).map_err(|e| {
            InvestigateError::invalid_config(format!("Cannot build URL for {}: {}", path, e))
        })
    }
}

/// Utility functions for URL handling
pub mod utils {
    use url::Url;

    /// Path of a URL without its query string, safe to log
    pub fn loggable(url: &Url) -> String {
        let mut stripped = url.clone();
        stripped.set_query(None);
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Entity, SearchIndex};

    fn base() -> Url {
        Url::parse("https://platform.ke-la.com/api/investigate/v1").unwrap()
    }

    fn token() -> ApiToken {
        ApiToken::new("tok123").unwrap()
    }

    #[test]
    fn test_search_url_shape() {
        let base = base();
        let token = token();
        let request = SearchRequest::leaked_email("user@example.com");

        let url = UrlBuilder::new(&base, &token).search(&request).unwrap();

        assert_eq!(url.path(), "/api/investigate/v1/search");
        assert_eq!(
            url.query(),
            Some("apiToken=tok123&query=user%40example.com&entity=emails&index=leaked_credentials")
        );
    }

    #[test]
    fn test_search_url_with_filter() {
        let base = base();
        let token = token();
        let request = SearchRequest::new("acme.io", Entity::Domains, SearchIndex::InstantMessaging)
            .with_filter(30_i64);

        let url = UrlBuilder::new(&base, &token).search(&request).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(pairs.last(), Some(&("filter".to_string(), "30".to_string())));
        assert!(pairs.contains(&("index".to_string(), "instant_messaging".to_string())));
    }

    #[test]
    fn test_search_url_without_filter_has_no_filter_param() {
        let base = base();
        let token = token();
        let url = UrlBuilder::new(&base, &token)
            .search(&SearchRequest::leaked_email("a@b.co"))
            .unwrap();
        assert!(url.query_pairs().all(|(k, _)| k != "filter"));
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let base = Url::parse("http://localhost:3001/api/investigate/v1/").unwrap();
        let token = token();
        let url = UrlBuilder::new(&base, &token)
            .counters(&CountersRequest::new("5551234", Entity::Phones))
            .unwrap();

        assert_eq!(url.path(), "/api/investigate/v1/counters");
        assert_eq!(url.query(), Some("apiToken=tok123&query=5551234&entity=phones"));
    }

    #[test]
    fn test_loggable_drops_query() {
        let base = base();
        let token = token();
        let url = UrlBuilder::new(&base, &token)
            .search(&SearchRequest::leaked_email("x@y.z"))
            .unwrap();

        let logged = utils::loggable(&url);
        assert_eq!(logged, "https://platform.ke-la.com/api/investigate/v1/search");
        assert!(!logged.contains("tok123"));
    }
}
