//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_SUBMISSION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1000;
const DEFAULT_SWIPE_THRESHOLD: u16 = 6;

/// Where submitted interview requests go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Log the request after a simulated round trip
    #[default]
    Log,
    /// Write the request into the outbox directory
    Outbox,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Submission sink
    pub sink: Option<SinkKind>,
    /// Outbox directory for the outbox sink
    pub outbox_dir: Option<PathBuf>,
    /// Upper bound for one submission, in seconds
    pub submission_timeout_secs: Option<u64>,
    /// Artificial delay of the log sink, in milliseconds
    pub simulated_latency_ms: Option<u64>,
    /// Drag distance in columns that counts as a swipe
    pub swipe_threshold: Option<u16>,
    /// Start on the hero screen instead of the intro
    pub skip_intro: Option<bool>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("ru", "gendalf", "careers-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Platform data directory, home of the log file and the default outbox
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Write a config file on first run so the user has something to edit
    pub fn save_if_missing(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) if !path.exists() => self.save_to(&path),
            _ => Ok(()),
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn sink(&self) -> SinkKind {
        self.sink.unwrap_or_default()
    }

    /// Configured outbox, else `outbox/` in the data directory, else `./outbox`
    pub fn outbox_dir(&self) -> PathBuf {
        self.outbox_dir
            .clone()
            .or_else(|| Self::data_dir().map(|dir| dir.join("outbox")))
            .unwrap_or_else(|| PathBuf::from("outbox"))
    }

    pub fn submission_timeout(&self) -> Duration {
        Duration::from_secs(
            self.submission_timeout_secs
                .unwrap_or(DEFAULT_SUBMISSION_TIMEOUT_SECS),
        )
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms.unwrap_or(DEFAULT_SIMULATED_LATENCY_MS))
    }

    pub fn swipe_threshold(&self) -> u16 {
        self.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD)
    }

    pub fn skip_intro(&self) -> bool {
        self.skip_intro.unwrap_or(false)
    }
}
