//! # Player Configuration
//!
//! Settings for the command-line player, read from YAML. Every field is optional.
//!
//! ```yaml
//! channel: 3
//! title-max-len: 16
//! poll-interval-ms: 1
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::RtttlError;
use crate::sequencer::Channel;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlayerConfig {
    /// Output channel to play on
    pub channel: u8,
    /// Longest title printed before playback
    pub title_max_len: usize,
    /// Sleep between polls of the sequencer
    pub poll_interval_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            channel: 0,
            title_max_len: 16,
            poll_interval_ms: 1,
        }
    }
}

impl PlayerConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, RtttlError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| RtttlError::ConfigError(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RtttlError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn channel(&self) -> Channel {
        Channel(self.channel)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
