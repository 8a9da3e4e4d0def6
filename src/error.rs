use investigate::{ApiProblem, InvestigateError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Investigate error: {0}")]
    Investigate(#[from] InvestigateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request failed: {0}")]
    Outcome(ApiProblem),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Investigate(err) => format!("{err}"),
            Self::Json(err) => format!("Failed to render JSON: {err}"),
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::InvalidInput(msg) => msg.clone(),
            Self::Outcome(problem) => format!("{} ({})", problem.hint(), problem.kind()),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_message_carries_hint_and_kind() {
        let message = CliError::Outcome(ApiProblem::Unauthorized).user_message();
        assert!(message.contains("API token"));
        assert!(message.contains("unauthorized"));
    }

    #[test]
    fn test_context_wraps_message() {
        let result: std::result::Result<(), InvestigateError> =
            Err(InvestigateError::invalid_config("timeout must be positive"));
        let err = result.with_context(|| "Loading investigate.toml").unwrap_err();
        assert_eq!(
            err.user_message(),
            "Loading investigate.toml: Invalid configuration: timeout must be positive"
        );
    }
}
