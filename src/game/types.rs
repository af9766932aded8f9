//! Flappy Cat data structures.

use crate::core::constants::*;
use rand::Rng;
use serde::Deserialize;

/// How an obstacle that the cat made it through earns its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// Point awarded once the obstacle reaches or passes the scoring line.
    #[default]
    Crossing,
    /// Point awarded only on a frame where the obstacle sits exactly on the
    /// scoring line. Kept for parity with the web version.
    ExactPosition,
}

impl ScoringRule {
    /// Whether `obstacle` earns its point this frame. The caller has already
    /// established that the cat is inside the gap.
    #[allow(clippy::float_cmp)]
    pub fn awards(self, obstacle: &Obstacle) -> bool {
        if obstacle.scored {
            return false;
        }
        match self {
            Self::Crossing => obstacle.x <= SCORING_LINE_X,
            Self::ExactPosition => obstacle.x == SCORING_LINE_X,
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCause {
    Ceiling,
    Floor,
    Obstacle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Terminal(TerminalCause),
}

/// The cat. Only the vertical axis moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Units from the top of the play field.
    pub y: f64,
    /// Added to `y` every frame.
    pub gravity: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: PLAYER_START_Y,
            gravity: GRAVITY,
        }
    }
}

/// A top/bottom pipe pair with a passable gap, scrolling right to left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    /// Where the gap begins; also the height of the top pipe.
    pub gap_top: f64,
    pub gap_height: f64,
    /// Set once the obstacle has awarded its point.
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_top: f64, gap_height: f64) -> Self {
        Self {
            x,
            gap_top,
            gap_height,
            scored: false,
        }
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.gap_height
    }

    pub fn top_height(&self) -> f64 {
        self.gap_top
    }

    pub fn bottom_height(&self) -> f64 {
        (FIELD_HEIGHT - self.gap_bottom()).max(0.0)
    }

    /// Exclusive on both sides.
    pub fn in_collision_band(&self) -> bool {
        self.x > COLLISION_BAND_LEFT && self.x < COLLISION_BAND_RIGHT
    }

    /// True when a cat at height `y` would hit one of the pipes.
    pub fn blocks(&self, y: f64) -> bool {
        y < self.gap_top || y > self.gap_bottom()
    }
}

/// Main game state, exclusively owned by the engine.
#[derive(Debug, Clone)]
pub struct CatGame {
    pub player: Player,
    /// Spawn order, which is also left-to-right order.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub status: GameStatus,
    pub scoring: ScoringRule,
    /// Physics frames processed.
    pub frame_count: u64,
    /// Obstacle ticks processed.
    pub tick_count: u64,
}

impl Default for CatGame {
    fn default() -> Self {
        Self::new(ScoringRule::default())
    }
}

impl CatGame {
    pub fn new(scoring: ScoringRule) -> Self {
        Self {
            player: Player::default(),
            obstacles: Vec::new(),
            score: 0,
            status: GameStatus::Active,
            scoring,
            frame_count: 0,
            tick_count: 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, GameStatus::Terminal(_))
    }

    pub fn terminal_cause(&self) -> Option<TerminalCause> {
        match self.status {
            GameStatus::Active => None,
            GameStatus::Terminal(cause) => Some(cause),
        }
    }

    /// Move to the terminal state. The first cause sticks.
    pub fn end(&mut self, cause: TerminalCause) {
        if self.status == GameStatus::Active {
            self.status = GameStatus::Terminal(cause);
        }
    }

    /// Spawn an obstacle at the right edge with a random gap.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) -> Obstacle {
        let gap_height = rng.gen_range(GAP_HEIGHT_MIN..GAP_HEIGHT_MAX);
        let gap_top = rng.gen_range(GAP_TOP_MIN..GAP_TOP_MAX);
        let obstacle = Obstacle::new(OBSTACLE_SPAWN_X, gap_top, gap_height);
        self.obstacles.push(obstacle);
        obstacle
    }
}
