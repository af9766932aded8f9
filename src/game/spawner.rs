//! Obstacle movement and spawning, run on the fixed tick.

use super::types::CatGame;
use crate::core::constants::{OBSTACLE_REMOVAL_X, OBSTACLE_SPAWN_CHANCE, OBSTACLE_STEP};
use rand::Rng;

/// Process one obstacle tick: scroll every obstacle left, drop the ones past
/// the left edge, then roll for a new one.
///
/// Returns true if an obstacle spawned. Does nothing once the game is over.
pub fn process_obstacle_tick<R: Rng>(game: &mut CatGame, rng: &mut R) -> bool {
    if game.is_terminal() {
        return false;
    }

    game.tick_count += 1;

    // Scroll obstacles left
    for obstacle in &mut game.obstacles {
        obstacle.x -= OBSTACLE_STEP;
    }

    // Remove obstacles that have scrolled off screen
    game.obstacles.retain(|o| o.x > OBSTACLE_REMOVAL_X);

    // Maybe spawn a new one at the right edge
    if rng.gen_bool(OBSTACLE_SPAWN_CHANCE) {
        game.spawn_obstacle(rng);
        true
    } else {
        false
    }
}
