use serde::{Deserialize, Serialize};

use crate::viewmodel::SeedPolicy;

/// Longest fake API delay accepted by validation.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Settings for the in-memory user API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Simulated latency of every call in milliseconds (default: 1000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

/// Settings for the view model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// What a new load shows while in flight: "reset" or "keep_last".
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}
