use reqwest::Response;
use thiserror::Error;

/// Status and body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The server could not be reached at all
    Connect,
    /// The transport gave up waiting
    Timeout,
    Other,
}

/// An exchange that produced no HTTP status
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Connect, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Other, message)
    }

    pub fn is_connect(&self) -> bool {
        self.kind == TransportErrorKind::Connect
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        // Strip the URL so the query string (and its token) never reaches a message
        let kind = if error.is_connect() {
            TransportErrorKind::Connect
        } else if error.is_timeout() {
            TransportErrorKind::Timeout
        } else {
            TransportErrorKind::Other
        };
        Self::new(kind, error.without_url().to_string())
    }
}

/// Collects a reqwest response into a [`RawResponse`]
#[derive(Clone, Default)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    pub fn new() -> Self {
        Self
    }

    pub async fn convert_response(&self, response: Response) -> Result<RawResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(TransportError::from);
        assemble(status, body)
    }
}

/// A failed body read only matters when the body is the payload; error
/// statuses keep their status with an empty body
fn assemble(
    status: u16,
    body: Result<Vec<u8>, TransportError>,
) -> Result<RawResponse, TransportError> {
    match body {
        Ok(body) => Ok(RawResponse::new(status, body)),
        Err(_) if !(200..300).contains(&status) => Ok(RawResponse::new(status, Vec::new())),
        Err(e) => Err(e),
    }
}
