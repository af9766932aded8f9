//! Gravity, jump impulse and the per-frame step.

use super::collision::evaluate_collisions;
use super::types::{CatGame, TerminalCause};
use crate::core::constants::{CEILING_Y, FLOOR_Y, JUMP_IMPULSE};

/// Result of one frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Points awarded this frame.
    pub points: u32,
    /// The game ended this frame.
    pub ended: bool,
}

/// Run one animation frame: apply gravity, check the field bounds, then
/// evaluate obstacles against the updated position.
///
/// Everything is read from `game` as it is now, so collision always sees
/// the obstacle positions left by the latest tick.
pub fn process_frame(game: &mut CatGame) -> FrameOutcome {
    if game.is_terminal() {
        return FrameOutcome::default();
    }

    game.frame_count += 1;

    // Apply gravity
    let prev = game.player.y;
    game.player.y += game.player.gravity;

    // Ceiling and floor
    if check_bounds(game, prev) {
        return FrameOutcome {
            points: 0,
            ended: true,
        };
    }

    // Pipes, judged against the new position
    let points = evaluate_collisions(game);
    FrameOutcome {
        points,
        ended: game.is_terminal(),
    }
}

/// Instant upward impulse. Ignored once the game is over.
///
/// Returns true if the jump was applied.
pub fn jump(game: &mut CatGame) -> bool {
    if game.is_terminal() {
        return false;
    }
    let prev = game.player.y;
    game.player.y -= JUMP_IMPULSE;
    check_bounds(game, prev);
    true
}

/// End the game if the cat touched the ceiling or the floor. The cat is put
/// back at `prev` so its last drawn position stays inside the field.
fn check_bounds(game: &mut CatGame, prev: f64) -> bool {
    let y = game.player.y;
    let cause = if y <= CEILING_Y {
        TerminalCause::Ceiling
    } else if y >= FLOOR_Y {
        TerminalCause::Floor
    } else {
        return false;
    };
    game.player.y = prev;
    game.end(cause);
    true
}
