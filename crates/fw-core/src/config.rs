use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::playback::PlaybackTiming;

/// Top-level configuration loaded from `~/.fraudwatch/config.toml`.
///
/// Every knob here is presentation tuning; the defaults are what the console
/// ships with and a missing file is not an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Milliseconds between consecutive message reveals.
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: u64,
    /// Milliseconds between the final reveal and the results hand-off.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Terminal event poll interval in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// How long a toast notification stays on screen, in seconds.
    #[serde(default = "default_toast_duration_secs")]
    pub toast_duration_secs: u64,
}

fn default_reveal_interval_ms() -> u64 {
    1200
}

fn default_settle_delay_ms() -> u64 {
    1500
}

fn default_poll_interval_ms() -> u64 {
    250
}

fn default_toast_duration_secs() -> u64 {
    4
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: default_reveal_interval_ms(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            toast_duration_secs: default_toast_duration_secs(),
        }
    }
}

impl PlaybackConfig {
    pub fn timing(&self) -> PlaybackTiming {
        PlaybackTiming::new(
            Duration::from_millis(self.reveal_interval_ms),
            Duration::from_millis(self.settle_delay_ms),
        )
    }
}

impl Config {
    /// Load from the default path, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Semantic checks beyond what the types express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playback.reveal_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "playback.reveal_interval_ms must be positive".into(),
            ));
        }
        if self.playback.settle_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "playback.settle_delay_ms must be positive".into(),
            ));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fraudwatch")
            .join("config.toml")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
