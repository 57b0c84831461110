//! Text generation provider (Gemini) configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// Default request timeout in seconds. Rebuttal copy can take a while.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Provider API key. Also read from `GOOGLE_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Model name, fixed for the lifetime of the process.
    #[serde(default = "default_model")]
    pub model: String,

    /// API root, overridable for proxies and local fakes.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GenerationConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
