//! # closer-config
//!
//! Layered configuration loading for Closer using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CLOSER_*` prefix, `__` as separator)
//! 2. Conventional provider variables: `SUPABASE_URL`, `SUPABASE_KEY`, `GOOGLE_API_KEY`
//! 3. Project-level `.closer/config.toml`
//! 4. User-level `~/.config/closer/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CLOSER_STORE__URL` -> `store.url`, `CLOSER_WORKER__INTERVAL_SECS`
//! -> `worker.interval_secs`, etc. The conventional names map to `store.url`,
//! `store.key` and `generation.api_key`.
//!
//! # Usage
//!
//! ```no_run
//! use closer_config::CloserConfig;
//!
//! let config = CloserConfig::load_with_dotenv()
//!     .and_then(CloserConfig::validated)
//!     .expect("config");
//! println!("store: {}", config.store.rest_url());
//! ```

mod error;
mod generation;
mod store;
mod worker;

pub use error::ConfigError;
pub use generation::GenerationConfig;
pub use store::StoreConfig;
pub use worker::WorkerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CloserConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub worker: WorkerConfig,
}

impl CloserConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading. Does not validate either; see
    /// [`validate`](Self::validate).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".closer/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Conventional provider variables
        figment = figment.merge(Self::conventional_env());

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("CLOSER_").split("__"))
    }

    /// Check that the worker can start with this configuration.
    ///
    /// Store URL, store key and generation API key are required; every missing
    /// one is reported at once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for absent connection parameters and
    /// [`ConfigError::InvalidValue`] for unusable worker tuning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut fields = Vec::new();
        if self.store.url.is_empty() {
            fields.push("store.url (SUPABASE_URL)");
        }
        if self.store.key.is_empty() {
            fields.push("store.key (SUPABASE_KEY)");
        }
        if self.generation.api_key.is_empty() {
            fields.push("generation.api_key (GOOGLE_API_KEY)");
        }
        if !fields.is_empty() {
            return Err(ConfigError::Missing { fields });
        }

        if self.worker.batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "worker.batch_size",
                reason: "must be at least 1".into(),
            });
        }
        if self.worker.objection_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "worker.objection_count",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// [`validate`](Self::validate), by value, for chaining after a load.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("closer").join("config.toml"))
    }

    /// The unprefixed names the provider SDKs and deployment scripts use.
    fn conventional_env() -> Env {
        Env::raw().filter_map(|key| {
            let mapped = match key.as_str().to_ascii_lowercase().as_str() {
                "supabase_url" => "store.url",
                "supabase_key" => "store.key",
                "google_api_key" => "generation.api_key",
                _ => return None,
            };
            Some(mapped.into())
        })
    }
}
