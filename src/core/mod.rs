//! Constants, configuration and logging shared by the engine and the host.

pub mod config;
pub mod constants;
pub mod logging;

pub use config::GameConfig;
pub use constants::*;
