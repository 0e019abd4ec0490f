//! # Application Configuration
//!
//! Configuration is layered: serde defaults, then an optional `config.yml`
//! (with `${ENV_VAR}` substitution), then environment variables. Top-level
//! keys map to `PORT`/`DB_URL`; nested keys use the `BRANDRAG_` prefix with
//! `__` separators (e.g. `BRANDRAG_GENERATION__MODEL`). Credentials also
//! load from their conventional variables (`OPENAI_API_KEY`,
//! `SEARCH_API_KEY`, `JWT_SECRET`).

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    General(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The path to the SQLite database file. Loaded from `DB_URL`.
    #[serde(default = "default_db_url")]
    pub db_url: String,
    /// Secret used to validate bearer tokens. Loaded from `JWT_SECRET`.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Generation backend configuration.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Web-search collaborator configuration.
    #[serde(default)]
    pub web_search: WebSearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            db_url: default_db_url(),
            jwt_secret: None,
            generation: GenerationConfig::default(),
            web_search: WebSearchConfig::default(),
        }
    }
}

fn default_port() -> u16 {
    9090
}

fn default_db_url() -> String {
    "db/brandrag.db".to_string()
}

/// Configuration for the generation backend. A missing `api_key` is not an
/// error: generation then uses the deterministic fallback path directly.
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    #[serde(default = "default_generation_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_generation_model")]
    pub model: String,
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_url: default_generation_api_url(),
            api_key: None,
            model: default_generation_model(),
            fallback_model: default_fallback_model(),
        }
    }
}

fn default_generation_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_generation_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_fallback_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Configuration for the web-search collaborator. A missing `api_key` means
/// web search returns empty results.
#[derive(Debug, Deserialize, Clone)]
pub struct WebSearchConfig {
    #[serde(default = "default_search_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            api_url: default_search_api_url(),
            api_key: None,
        }
    }
}

fn default_search_api_url() -> String {
    "https://google.serper.dev/search".to_string()
}

// Reads a file and substitutes ${VAR} references from the environment.
// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded = re.replace_all(&content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    });

    Ok(Some(expanded.to_string()))
}

/// Loads the application configuration from an optional `config.yml` and the
/// environment.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let config_path = config_path_override.unwrap_or("config.yml");
    if let Some(content) = read_and_substitute(config_path)? {
        info!("Loading configuration from '{config_path}'.");
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        // Top-level keys like PORT and DB_URL.
        .add_source(Environment::default())
        // Prefixed variables for nested overrides.
        .add_source(
            Environment::with_prefix("BRANDRAG")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // Conventional credential variables win over nothing, never over an
    // explicitly configured value.
    if config.generation.api_key.is_none() {
        if let Ok(key) = env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.generation.api_key = Some(key);
            }
        }
    }
    if config.web_search.api_key.is_none() {
        if let Ok(key) = env::var("SEARCH_API_KEY") {
            if !key.is_empty() {
                config.web_search.api_key = Some(key);
            }
        }
    }
    if config.jwt_secret.is_none() {
        if let Ok(secret) = env::var("JWT_SECRET") {
            if !secret.is_empty() {
                config.jwt_secret = Some(secret);
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hold_without_a_config_file() {
        let config = AppConfig::default();
        assert_eq!(config.port, 9090);
        assert_eq!(config.generation.model, "gpt-4.1-mini");
        assert!(config.generation.api_key.is_none());
        assert!(config.web_search.api_key.is_none());
    }
}
