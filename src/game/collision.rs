//! Collision and scoring, evaluated right after the physics update.

use super::types::{CatGame, TerminalCause};

/// Check the cat against every obstacle in the collision band.
///
/// Each obstacle is judged on its own. One the cat overlaps ends the game;
/// one the cat is inside the gap of awards a point when the game's scoring
/// rule says so, at most once per obstacle. A collision does not cancel a
/// point earned by a different obstacle in the same frame.
///
/// Returns the number of points awarded.
pub fn evaluate_collisions(game: &mut CatGame) -> u32 {
    if game.is_terminal() {
        return 0;
    }

    let y = game.player.y;
    let rule = game.scoring;
    let mut collided = false;
    let mut points = 0;
    for obstacle in game
        .obstacles
        .iter_mut()
        .filter(|o| o.in_collision_band())
    {
        if obstacle.blocks(y) {
            collided = true;
        } else if rule.awards(obstacle) {
            obstacle.scored = true;
            points += 1;
        }
    }

    game.score += points;
    if collided {
        game.end(TerminalCause::Obstacle);
    }
    points
}
