use crate::log;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ---------------------------------------------------------------------------
// ProbeConfig
// ---------------------------------------------------------------------------

/// Runtime knobs for the demo: how long the transport waits before giving
/// up, and how many log lines are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_log_capacity() -> usize {
    log::DEFAULT_CAPACITY
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            log_capacity: default_log_capacity(),
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
