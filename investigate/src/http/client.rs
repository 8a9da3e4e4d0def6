use crate::error::Result;
use crate::http::{RawResponse, RequestBuilderImpl, ResponseConverterImpl, TransportError};
use crate::traits::Transport;
use reqwest::Client;
use url::Url;

/// reqwest-backed [`Transport`].
///
/// No per-request timeout is set here; the search client bounds each call.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            request_builder: RequestBuilderImpl::new(client.clone()),
            response_converter: ResponseConverterImpl::new(),
            client,
        }
    }
}

impl Transport for ReqwestTransport {
    async fn post(&self, url: Url) -> std::result::Result<RawResponse, TransportError> {
        let request = self.request_builder.build_request(url)?;
        let response = self.client.execute(request).await?;
        self.response_converter.convert_response(response).await
    }
}
