use crate::error::Result;
use std::path::Path;

/// Generate the default investigate.toml template
pub fn generate_default_config_template() -> String {
    r#"# Investigate API client configuration

[api]
# Route requests through the local development proxy instead of production
use_proxy = false
production_url = "https://platform.ke-la.com/api/investigate/v1"
proxy_url = "http://localhost:3001/api/investigate/v1"
# Upper bound for a single call, in milliseconds
timeout_ms = 10000

[credentials]
# Environment variables that may hold the API token, checked in order.
# The token itself never goes in this file.
env_vars = ["EXPO_PUBLIC_INVESTIGATE_API_TOKEN", "INVESTIGATE_API_TOKEN"]
"#
    .to_string()
}

/// Write the default template to `config_path` unless it already exists.
///
/// Returns `true` if a file was written.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, overwrite: bool) -> Result<bool> {
    let path = config_path.as_ref();

    if path.exists() && !overwrite {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, generate_default_config_template())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{ApiConfig, ConfigFile};
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let file: ConfigFile = toml::from_str(&generate_default_config_template()).unwrap();
        assert_eq!(file, ConfigFile::default());
        assert_eq!(file.resolve().unwrap(), ApiConfig::default());
    }

    #[test]
    fn test_ensure_config_file_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("investigate.toml");

        assert!(ensure_config_file_exists(&path, false).unwrap());
        assert!(path.exists());

        std::fs::write(&path, "# edited").unwrap();
        assert!(!ensure_config_file_exists(&path, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# edited");

        assert!(ensure_config_file_exists(&path, true).unwrap());
        assert!(std::fs::read_to_string(&path).unwrap().contains("[credentials]"));
    }
}
