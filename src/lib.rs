//! flappycat - the $SHOOKCAT "Flappy Cat" minigame in the terminal.
//!
//! This library exposes the engine, the game logic and the landing page so
//! the binary and the integration tests share them.

pub mod core;
pub mod engine;
pub mod game;
pub mod host;
pub mod input;

// UI module is not exposed as it's tightly coupled to the terminal

pub use crate::core::config::GameConfig;
pub use crate::engine::Engine;
pub use crate::game::{CatGame, GameStatus, Obstacle, ScoringRule, TerminalCause};
