use crate::analysis::{ExchangeSignals, ProblemClassifier, ProblemClassifierImpl};
use crate::cancel::CancelToken;
use crate::config::ApiConfig;
use crate::credentials::{ApiToken, EnvTokenProvider};
use crate::error::Result;
use crate::http::{ReqwestTransport, TransportErrorKind};
use crate::outcome::{ApiOutcome, ApiProblem};
use crate::traits::{TokenProvider, Transport};
use crate::types::{CountersRequest, IndicesCountersResponse, SearchRequest, SearchResponse};
use crate::url_builder::{utils, UrlBuilder, COUNTERS_PATH, SEARCH_PATH};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Instant;
use tracing::{debug, error, warn};
use url::Url;

/// Client for the Investigate search API.
///
/// Every call resolves to an [`ApiOutcome`]; nothing past construction
/// returns an error. The client holds no mutable state and can be shared
/// across tasks by reference or `Arc`.
pub struct SearchClient<T = ReqwestTransport, P = EnvTokenProvider> {
    config: ApiConfig,
    transport: T,
    tokens: P,
    classifier: ProblemClassifierImpl,
}

impl SearchClient {
    /// Client over reqwest that reads the token from `config.token_env_vars`
    pub fn new(config: ApiConfig) -> Result<Self> {
        let tokens = EnvTokenProvider::new(config.token_env_vars.clone());
        Ok(Self::with_parts(config, ReqwestTransport::new()?, tokens))
    }

    /// Client configured from the process environment
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }
}

impl<T: Transport, P: TokenProvider> SearchClient<T, P> {
    pub fn with_parts(config: ApiConfig, transport: T, tokens: P) -> Self {
        let classifier = ProblemClassifierImpl::new(config.timeout);
        Self {
            config,
            transport,
            tokens,
            classifier,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Search one index for an entity value
    pub async fn search(&self, request: &SearchRequest) -> ApiOutcome<SearchResponse> {
        let Some(token) = self.token(SEARCH_PATH) else {
            return ApiOutcome::Unauthorized;
        };
        let url = match UrlBuilder::new(&self.config.base_url, &token).search(request) {
            Ok(url) => url,
            Err(e) => return build_failure(SEARCH_PATH, e),
        };

        debug!(
            path = SEARCH_PATH,
            query = %request.query,
            entity = %request.entity,
            index = %request.index,
            filter = ?request.filter,
            "dispatching search"
        );
        self.dispatch(url).await
    }

    /// Per-index hit counts for an entity value
    pub async fn indices_counters(
        &self,
        request: &CountersRequest,
    ) -> ApiOutcome<IndicesCountersResponse> {
        let Some(token) = self.token(COUNTERS_PATH) else {
            return ApiOutcome::Unauthorized;
        };
        let url = match UrlBuilder::new(&self.config.base_url, &token).counters(request) {
            Ok(url) => url,
            Err(e) => return build_failure(COUNTERS_PATH, e),
        };

        debug!(
            path = COUNTERS_PATH,
            query = %request.query,
            entity = %request.entity,
            "dispatching counters"
        );
        self.dispatch(url).await
    }

    /// [`search`](Self::search) that gives up with `None` once `cancel` fires
    pub async fn search_until(
        &self,
        request: &SearchRequest,
        cancel: &CancelToken,
    ) -> Option<ApiOutcome<SearchResponse>> {
        until(self.search(request), cancel).await
    }

    /// [`indices_counters`](Self::indices_counters) that gives up with `None` once `cancel` fires
    pub async fn indices_counters_until(
        &self,
        request: &CountersRequest,
        cancel: &CancelToken,
    ) -> Option<ApiOutcome<IndicesCountersResponse>> {
        until(self.indices_counters(request), cancel).await
    }

    fn token(&self, path: &str) -> Option<ApiToken> {
        let token = self.tokens.api_token();
        if token.is_none() {
            warn!(path, "no API token configured, skipping request");
        }
        token
    }

    async fn dispatch<R: DeserializeOwned>(&self, url: Url) -> ApiOutcome<R> {
        let target = utils::loggable(&url);
        let started = Instant::now();
        let exchange = tokio::time::timeout(self.config.timeout, self.transport.post(url)).await;
        let elapsed = started.elapsed();

        let response = match exchange {
            Err(_) => {
                let waited = elapsed.max(self.config.timeout);
                return self.problem(&target, ExchangeSignals::no_response(waited));
            }
            Ok(Err(e)) => {
                debug!(url = %target, error = %e, "transport failure");
                let signals = match e.kind {
                    TransportErrorKind::Connect => ExchangeSignals::unreachable(elapsed),
                    TransportErrorKind::Timeout => {
                        ExchangeSignals::no_response(elapsed.max(self.config.timeout))
                    }
                    TransportErrorKind::Other => ExchangeSignals::no_response(elapsed),
                };
                return self.problem(&target, signals);
            }
            Ok(Ok(response)) => response,
        };

        if !response.is_success() {
            return self.problem(&target, ExchangeSignals::status(response.status, elapsed));
        }

        match serde_json::from_slice::<R>(&response.body) {
            Ok(data) => {
                debug!(
                    url = %target,
                    status = response.status,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "request succeeded"
                );
                ApiOutcome::Ok(data)
            }
            Err(e) => {
                error!(
                    url = %target,
                    status = response.status,
                    error = %e,
                    "could not decode response body"
                );
                ApiOutcome::BadData
            }
        }
    }

    fn problem<R>(&self, target: &str, signals: ExchangeSignals) -> ApiOutcome<R> {
        let problem = self.classifier.classify(&signals);
        debug!(
            url = %target,
            status = ?signals.status,
            elapsed_ms = signals.elapsed.as_millis() as u64,
            problem = problem.kind(),
            "request failed"
        );
        problem.into()
    }
}

fn build_failure<R>(path: &str, e: crate::error::InvestigateError) -> ApiOutcome<R> {
    error!(path, error = %e, "could not build request URL");
    ApiProblem::Unknown.into()
}

async fn until<F, R>(call: F, cancel: &CancelToken) -> Option<R>
where
    F: Future<Output = R>,
{
    if cancel.is_cancelled() {
        return None;
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        outcome = call => Some(outcome),
    }
}
