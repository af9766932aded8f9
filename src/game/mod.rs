//! Flappy Cat minigame.
//!
//! The cat falls under constant gravity and jumps on input while pipe pairs
//! scroll in from the right. Touching the ceiling, the floor or a pipe ends
//! the game; every pipe pair the cat gets through is worth one point.

pub mod collision;
pub mod physics;
pub mod spawner;
pub mod types;

pub use collision::evaluate_collisions;
pub use physics::{jump, process_frame, FrameOutcome};
pub use spawner::process_obstacle_tick;
pub use types::*;
