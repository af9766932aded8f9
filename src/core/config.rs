//! User configuration, read from `config.json` in the platform config dir.
//!
//! Every field is optional in the file; missing fields take their defaults.

use crate::core::constants::{FRAME_MS, OBSTACLE_TICK_MS};
use crate::game::ScoringRule;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// How passed obstacles are counted.
    pub scoring: ScoringRule,
    /// Obstacle tick period in milliseconds.
    pub tick_ms: u64,
    /// Frame period in milliseconds.
    pub frame_ms: u64,
    /// `tracing` filter directive used when `FLAPPYCAT_LOG` is unset.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            scoring: ScoringRule::default(),
            tick_ms: OBSTACLE_TICK_MS,
            frame_ms: FRAME_MS,
            log_filter: "info".to_string(),
        }
    }
}

/// Project directories for config and log files, if a home directory exists.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "flappycat")
}

impl GameConfig {
    /// Path of the config file, e.g. `~/.config/flappycat/config.json`.
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> io::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> io::Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Periods are at least 1ms; a zero period would spin the event loop.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}
