//! Layered configuration loading

use anyhow::Context;
use config::{Config, Environment, File};
use playtts_core::ServiceConfig;
use tracing::info;

/// Config file looked up in the working directory (any supported extension)
const DEFAULT_CONFIG_FILE: &str = "playtts";
const CONFIG_PATH_VAR: &str = "PLAYTTS_CONFIG";
const ENV_PREFIX: &str = "PLAYTTS";
const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Load defaults, then the optional config file, then `PLAYTTS__*`
/// environment overrides, then the provider key from `GROQ_API_KEY`.
pub fn load() -> anyhow::Result<ServiceConfig> {
    let file = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let mut config = load_from(&file)?;

    if config.provider.api_key.is_empty() {
        if let Ok(key) = std::env::var(API_KEY_VAR) {
            config.provider.api_key = key;
        }
    }

    config.validate()?;
    info!(
        "Configuration loaded (provider: {}, streaming: {})",
        config.provider.base_url, config.provider.streaming
    );
    Ok(config)
}

fn load_from(file: &str) -> anyhow::Result<ServiceConfig> {
    Config::builder()
        .add_source(File::with_name(file).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(Config::try_deserialize)
        .with_context(|| format!("failed to load configuration from '{}'", file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load_from(tmp.path().join("absent").to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.provider.timeout_secs, 60);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("playtts.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9090
cors_enabled = false

[provider]
api_key = "gsk_file"
streaming = false
timeout_secs = 15

[scratch]
dir = "/var/tmp/playtts"
"#,
        )
        .unwrap();

        let config = load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert!(!config.server.cors_enabled);
        assert_eq!(config.provider.api_key, "gsk_file");
        assert!(!config.provider.streaming);
        assert_eq!(config.provider.timeout_secs, 15);
        assert_eq!(
            config.scratch.dir.as_deref(),
            Some(std::path::Path::new("/var/tmp/playtts"))
        );
    }
}
