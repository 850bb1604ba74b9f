use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Service configuration, layered from an optional config file and
/// `SITEWRIGHT_`-prefixed environment variables (environment wins).
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Model identifier sent with every chat completion request
    #[serde(default = "default_model")]
    pub model: String,
    /// Allowed CORS origins; "*" allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_bind() -> String {
    "localhost:8000".to_string()
}

fn default_model() -> String {
    "google/gemini-flash-1.5".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

impl ServiceConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_str = config_path.display().to_string();

        let config = Config::builder()
            .add_source(File::with_name(&config_str).required(false))
            .add_source(
                Environment::with_prefix("SITEWRIGHT")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_origins"),
            )
            .build()
            .with_context(|| format!("Failed to load config from: {}", config_str))?;

        config
            .try_deserialize()
            .with_context(|| format!("Failed to parse config from: {}", config_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = ServiceConfig::load(Path::new("no-such-config")).unwrap();
        assert_eq!(config.bind, "localhost:8000");
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert!(!config.model.is_empty());
    }
}
