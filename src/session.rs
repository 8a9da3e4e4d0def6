use crate::error::{CliError, Result, ResultExt};
use crate::progress::RequestSpinner;
use investigate::{ApiConfig, CancelToken, Entity, SearchClient};
use std::future::Future;
use tokio::runtime::Runtime;

/// Resolve the client configuration: an explicit file, otherwise the environment
pub fn load_config(path: Option<&str>) -> Result<ApiConfig> {
    match path {
        Some(path) => {
            ApiConfig::load_from_file(path).with_context(|| format!("Failed to load {}", path))
        }
        None => ApiConfig::from_env()
            .with_context(|| "Failed to read configuration from environment"),
    }
}

pub fn build_client(config_path: Option<&str>) -> Result<SearchClient> {
    let config = load_config(config_path)?;
    tracing::debug!(
        base_url = %config.base_url,
        timeout_ms = config.timeout.as_millis() as u64,
        "client configured"
    );
    SearchClient::new(config).with_context(|| "Failed to create HTTP client")
}

/// Trim the query and reject input the service would only bounce
pub fn prepare_query(raw: &str, entity: Entity) -> Result<String> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(CliError::InvalidInput("Please enter a value to search for".to_string()));
    }
    if entity == Entity::Emails && !investigate::is_valid_email(query) {
        return Err(CliError::InvalidInput(format!(
            "'{}' does not look like an email address",
            query
        )));
    }
    Ok(query.to_string())
}

/// Run one call on a fresh runtime with a spinner; Ctrl-C cancels it.
///
/// `call` receives the cancel token and yields `None` once cancelled.
pub fn run_cancellable<F, Fut, T>(spinner_message: &str, quiet: bool, call: F) -> Result<T>
where
    F: FnOnce(CancelToken) -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(async {
        let cancel = CancelToken::new();
        let trigger = cancel.clone();
        let interrupt = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                trigger.cancel();
            }
        });

        let spinner = if quiet {
            RequestSpinner::hidden()
        } else {
            RequestSpinner::start(spinner_message)
        };
        let outcome = call(cancel).await;
        spinner.finish();
        interrupt.abort();

        outcome.ok_or_else(|| CliError::Other("Cancelled".to_string()))
    })
}
