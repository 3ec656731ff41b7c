//! Application configuration shape.
//!
//! Loaded by native tools through `confy`; the web build uses the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::QUEST_STORAGE_KEY;

/// Number of updates an animated counter performs over its duration.
pub const DEFAULT_COUNTER_STEPS: u32 = 60;

/// Counter duration used when a readout does not specify one.
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key the quest store reads and writes.
    pub storage_key: String,
    pub counter_steps: u32,
    pub default_counter_duration_ms: u32,
    /// Directory for file-backed storage. Platform data dir when unset.
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: QUEST_STORAGE_KEY.to_string(),
            counter_steps: DEFAULT_COUNTER_STEPS,
            default_counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            data_dir: None,
            log_level: "info".to_string(),
        }
    }
}
