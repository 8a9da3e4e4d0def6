//! Maps the observable signals of a failed HTTP exchange to one problem kind.
//! Pure logic, no I/O.

use crate::outcome::ApiProblem;
use std::time::Duration;

/// What the caller could observe about an exchange that did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeSignals {
    /// Status code, if any response arrived
    pub status: Option<u16>,
    /// The transport could not reach the host (refused, DNS, reset before any response)
    pub connection_refused: bool,
    /// Time spent waiting before giving up or receiving the status
    pub elapsed: Duration,
}

impl ExchangeSignals {
    pub fn status(status: u16, elapsed: Duration) -> Self {
        Self {
            status: Some(status),
            connection_refused: false,
            elapsed,
        }
    }

    pub fn unreachable(elapsed: Duration) -> Self {
        Self {
            status: None,
            connection_refused: true,
            elapsed,
        }
    }

    pub fn no_response(elapsed: Duration) -> Self {
        Self {
            status: None,
            connection_refused: false,
            elapsed,
        }
    }
}

/// Trait for problem classification
pub trait ProblemClassifier: Send + Sync {
    /// Classify a failed exchange; always yields exactly one problem
    fn classify(&self, signals: &ExchangeSignals) -> ApiProblem;
}

/// Default classifier, first matching rule wins:
/// unreachable, timed out, 401/403, other 4xx, 5xx, anything else.
#[derive(Debug, Clone, Copy)]
pub struct ProblemClassifierImpl {
    timeout: Duration,
}

impl ProblemClassifierImpl {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl ProblemClassifier for ProblemClassifierImpl {
    fn classify(&self, signals: &ExchangeSignals) -> ApiProblem {
        match signals.status {
            None if signals.connection_refused => ApiProblem::CannotConnect,
            None if signals.elapsed >= self.timeout => ApiProblem::Timeout,
            Some(401 | 403) => ApiProblem::Unauthorized,
            Some(400..=499) => ApiProblem::Rejected,
            Some(500..=599) => ApiProblem::ServerError,
            _ => ApiProblem::Unknown,
        }
    }
}
