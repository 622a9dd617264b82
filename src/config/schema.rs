//! Configuration schema for config.toml.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Base URL of the travel-data API.
    pub api_base_url: String,

    /// Value sent in the `x-rapidapi-host` header.
    pub api_host: String,

    /// API key. Prefer the environment variable named by `api_key_env`.
    pub api_key: String,

    /// Environment variable consulted for the API key.
    pub api_key_env: String,

    /// Language code used when the caller supplies none.
    pub default_language_code: String,

    /// Forward the caller's `languagecode` upstream. When false, the
    /// default language code is always sent.
    pub forward_language_code: bool,

    /// Timeout for a single upstream request, in seconds.
    pub request_timeout_secs: u64,

    /// Log level (debug, info, warn, error).
    pub log_level: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://booking-com15.p.rapidapi.com".into(),
            api_host: "booking-com15.p.rapidapi.com".into(),
            api_key: String::new(),
            api_key_env: "RAPIDAPI_KEY".into(),
            default_language_code: "en-us".into(),
            forward_language_code: true,
            request_timeout_secs: 30,
            log_level: "info".into(),
        }
    }
}

impl ToolsConfig {
    /// Resolve the API key: environment first, then the config file.
    pub fn resolved_api_key(&self) -> Result<String> {
        let from_env = if self.api_key_env.is_empty() {
            None
        } else {
            std::env::var(&self.api_key_env).ok()
        };
        self.pick_api_key(from_env)
    }

    fn pick_api_key(&self, from_env: Option<String>) -> Result<String> {
        if let Some(key) = from_env.filter(|k| !k.trim().is_empty()) {
            return Ok(key.trim().to_string());
        }
        if !self.api_key.trim().is_empty() {
            return Ok(self.api_key.trim().to_string());
        }
        bail!(
            "No API key configured: set ${} or `api_key` in the config file",
            self.api_key_env
        )
    }

    /// Upstream request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
