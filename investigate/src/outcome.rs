use serde::Serialize;
use thiserror::Error;

/// Closed set of ways an API call can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiProblem {
    /// Missing or rejected credential
    #[error("unauthorized")]
    Unauthorized,
    #[error("timeout")]
    Timeout,
    #[error("cannot-connect")]
    CannotConnect,
    /// 5xx
    #[error("server-error")]
    ServerError,
    /// 4xx other than 401/403
    #[error("rejected")]
    Rejected,
    /// Response arrived but could not be decoded
    #[error("bad-data")]
    BadData,
    #[error("unknown")]
    Unknown,
}

impl ApiProblem {
    pub const ALL: [ApiProblem; 7] = [
        ApiProblem::Unauthorized,
        ApiProblem::Timeout,
        ApiProblem::CannotConnect,
        ApiProblem::ServerError,
        ApiProblem::Rejected,
        ApiProblem::BadData,
        ApiProblem::Unknown,
    ];

    /// Tag as it appears in serialized outcomes
    pub fn kind(&self) -> &'static str {
        match self {
            ApiProblem::Unauthorized => "unauthorized",
            ApiProblem::Timeout => "timeout",
            ApiProblem::CannotConnect => "cannot-connect",
            ApiProblem::ServerError => "server-error",
            ApiProblem::Rejected => "rejected",
            ApiProblem::BadData => "bad-data",
            ApiProblem::Unknown => "unknown",
        }
    }

    /// Short hint for end users about where to look
    pub fn hint(&self) -> &'static str {
        match self {
            ApiProblem::Unauthorized => "Check the API token configuration",
            ApiProblem::Timeout => "The service took too long to answer",
            ApiProblem::CannotConnect => "Check the network connection",
            ApiProblem::ServerError => "The search service is having trouble",
            ApiProblem::Rejected => "The service refused the request",
            ApiProblem::BadData => "The service sent a response that could not be read",
            ApiProblem::Unknown => "Something unexpected went wrong",
        }
    }
}

/// Result of one API call: either the payload or exactly one problem tag.
///
/// Serializes as `{"kind": "ok", "data": ...}` or `{"kind": "<problem>"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum ApiOutcome<T> {
    Ok(T),
    Unauthorized,
    Timeout,
    CannotConnect,
    ServerError,
    Rejected,
    BadData,
    Unknown,
}

impl<T> ApiOutcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ApiOutcome::Ok(_))
    }

    pub fn kind(&self) -> &'static str {
        match self.problem() {
            Some(problem) => problem.kind(),
            None => "ok",
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiOutcome::Ok(data) => Some(data),
            _ => None,
        }
    }

    /// The problem tag, or `None` for `Ok`
    pub fn problem(&self) -> Option<ApiProblem> {
        match self {
            ApiOutcome::Ok(_) => None,
            ApiOutcome::Unauthorized => Some(ApiProblem::Unauthorized),
            ApiOutcome::Timeout => Some(ApiProblem::Timeout),
            ApiOutcome::CannotConnect => Some(ApiProblem::CannotConnect),
            ApiOutcome::ServerError => Some(ApiProblem::ServerError),
            ApiOutcome::Rejected => Some(ApiProblem::Rejected),
            ApiOutcome::BadData => Some(ApiProblem::BadData),
            ApiOutcome::Unknown => Some(ApiProblem::Unknown),
        }
    }

    pub fn into_result(self) -> Result<T, ApiProblem> {
        match self {
            ApiOutcome::Ok(data) => Ok(data),
            other => Err(other.problem().unwrap_or(ApiProblem::Unknown)),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiOutcome<U> {
        match self.into_result() {
            Ok(data) => ApiOutcome::Ok(f(data)),
            Err(problem) => problem.into(),
        }
    }
}

impl<T> From<ApiProblem> for ApiOutcome<T> {
    fn from(problem: ApiProblem) -> Self {
        match problem {
            ApiProblem::Unauthorized => ApiOutcome::Unauthorized,
            ApiProblem::Timeout => ApiOutcome::Timeout,
            ApiProblem::CannotConnect => ApiOutcome::CannotConnect,
            ApiProblem::ServerError => ApiOutcome::ServerError,
            ApiProblem::Rejected => ApiOutcome::Rejected,
            ApiProblem::BadData => ApiOutcome::BadData,
            ApiProblem::Unknown => ApiOutcome::Unknown,
        }
    }
}
