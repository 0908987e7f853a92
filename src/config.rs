use crate::error::{Result, TranslateError};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SERVICE_URL: &str = "http://api.apertium.org/json/translate";

/// Keys shorter than this are rejected before any request is made.
pub const MIN_API_KEY_LEN: usize = 27;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(default = "default_service_url")]
    pub service_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_from: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_to: Option<Language>,
}

fn default_api_key_env() -> String {
    "APERTIUM_API_KEY".to_string()
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_api_key_env(),
            referrer: None,
            service_url: default_service_url(),
            timeout_secs: None,
            default_from: None,
            default_to: None,
        }
    }
}

impl TranslatorConfig {
    /// Config with an API key and an optional HTTP referrer. Nothing is
    /// validated until a request is attempted.
    pub fn configure(api_key: impl Into<String>, referrer: Option<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            referrer,
            ..Self::default()
        }
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TranslateError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load an explicit path, or the first config found in the standard
    /// locations. Falls back to defaults when none exists.
    pub fn find_and_load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::load(path);
        }

        for candidate in config_search_paths() {
            if candidate.exists() {
                tracing::info!(path = %candidate.display(), "Loading config");
                return Self::load(&candidate);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// The inline key if set, otherwise the one in `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.is_empty())
    }

    /// Returns the key if one is set and plausibly long enough.
    pub fn validate_configured(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if key.chars().count() >= MIN_API_KEY_LEN => Ok(key),
            _ => Err(TranslateError::config(
                "INVALID_API_KEY - Please set the API Key with your Apertium API Key",
            )),
        }
    }
}

/// Priority: CWD > XDG config > home dir
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("apertium-translator.toml")];

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        paths.push(
            PathBuf::from(xdg)
                .join("apertium-translator")
                .join("config.toml"),
        );
    }
    if let Some(home) = home_dir() {
        paths.push(
            home.join(".config")
                .join("apertium-translator")
                .join("config.toml"),
        );
        paths.push(home.join(".apertium-translator.toml"));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
