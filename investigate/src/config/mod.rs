pub mod types;
pub mod loader;
pub mod builder;
pub mod validator;
pub mod templates;

pub use types::{
    ApiConfig, ApiSection, ConfigFile, CredentialsSection, DEFAULT_TIMEOUT_MS,
    DEFAULT_TOKEN_ENV_VARS, PRODUCTION_BASE_URL, PROXY_BASE_URL, TIMEOUT_ENV_VAR,
    USE_PROXY_ENV_VAR,
};
pub use loader::{load_with_env, ConfigLoader, DefaultConfigLoader};
pub use builder::ApiConfigBuilder;
pub use validator::ConfigValidatorImpl;
pub use templates::{ensure_config_file_exists, generate_default_config_template};
