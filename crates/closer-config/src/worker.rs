//! Worker loop and pipeline tuning.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One hour between cycles.
const fn default_interval_secs() -> u64 {
    3600
}

/// Prospects qualified per cycle.
const fn default_batch_size() -> usize {
    10
}

/// Objections requested from the generator per sales bible.
const fn default_objection_count() -> usize {
    5
}

/// Pause between prospect updates, to stay gentle with the store.
const fn default_qualify_pause_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkerConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    #[serde(default = "default_objection_count")]
    pub objection_count: usize,

    /// `0` disables the pause.
    #[serde(default = "default_qualify_pause_ms")]
    pub qualify_pause_ms: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            batch_size: default_batch_size(),
            objection_count: default_objection_count(),
            qualify_pause_ms: default_qualify_pause_ms(),
        }
    }
}

impl WorkerConfig {
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub const fn qualify_pause(&self) -> Duration {
        Duration::from_millis(self.qualify_pause_ms)
    }
}
