use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Request};
use url::Url;

const JSON: &str = "application/json";

/// Builds the bodiless POST every Investigate endpoint expects
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
}

impl RequestBuilderImpl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn build_request(&self, url: Url) -> reqwest::Result<Request> {
        self.client
            .post(url)
            .header(ACCEPT, HeaderValue::from_static(JSON))
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON))
            .build()
    }
}
