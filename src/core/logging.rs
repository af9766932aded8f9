//! Log file setup.
//!
//! The terminal UI owns stdout and stderr, so `tracing` output goes to
//! `flappycat.log` in the platform data dir instead.

use crate::core::config::project_dirs;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "FLAPPYCAT_LOG";

pub fn log_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("flappycat.log"))
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// no home directory could be determined (logging is then disabled).
pub fn init(default_filter: &str) -> io::Result<Option<PathBuf>> {
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(Some(path))
}
