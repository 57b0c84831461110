//! Record store (Supabase / PostgREST) configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Project URL (e.g., `https://abcd1234.supabase.co`).
    /// Also read from `SUPABASE_URL`.
    #[serde(default)]
    pub url: String,

    /// Service or anon API key. Also read from `SUPABASE_KEY`.
    #[serde(default)]
    pub key: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Check if the store has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.key.is_empty()
    }

    /// Base URL of the REST interface: `{url}/rest/v1`.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = StoreConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn rest_url_tolerates_trailing_slash() {
        let config = StoreConfig {
            url: "https://abcd.supabase.co/".into(),
            key: "k".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.rest_url(), "https://abcd.supabase.co/rest/v1");
    }
}
