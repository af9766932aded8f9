//! The game engine: owns a `CatGame` and the two scheduled tasks that drive
//! it, a fixed-period obstacle tick and a display-rate physics frame.
//!
//! The host mounts an engine when the game opens, pumps it with the current
//! instant from its event loop, forwards jumps and closes it when the player
//! dismisses the game-over screen. Closing (or dropping) the engine cancels
//! all scheduled work, so a closed engine never mutates its game again.

pub mod schedule;

use crate::core::config::GameConfig;
use crate::game::{self, CatGame};
use rand::Rng;
use schedule::{FrameRequest, Interval};
use std::time::Instant;
use tracing::{debug, info};

/// Which scheduled task to run next.
enum Due {
    Tick,
    Frame,
}

pub struct Engine<R: Rng> {
    game: CatGame,
    rng: R,
    obstacle_timer: Interval,
    frame_request: FrameRequest,
    mounted: bool,
}

impl<R: Rng> Engine<R> {
    /// Mount a fresh game: Active, score 0, no obstacles. Starts the
    /// obstacle timer and requests the first frame.
    pub fn mount(config: &GameConfig, rng: R, now: Instant) -> Self {
        let mut frame_request = FrameRequest::new(config.frame_period());
        frame_request.request(now);
        debug!(
            tick_ms = config.tick_ms,
            frame_ms = config.frame_ms,
            scoring = ?config.scoring,
            "Engine mounted"
        );
        Self {
            game: CatGame::new(config.scoring),
            rng,
            obstacle_timer: Interval::start(config.tick_period(), now),
            frame_request,
            mounted: true,
        }
    }

    /// Run every tick and frame due at `now`, oldest first. On a tie the
    /// obstacle tick runs before the frame.
    ///
    /// Returns true if anything ran.
    pub fn pump(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }

        let mut ran = false;
        while let Some(due) = self.next_due(now) {
            match due {
                Due::Tick => self.run_tick(now),
                Due::Frame => self.run_frame(now),
            }
            ran = true;
        }
        ran
    }

    fn next_due(&self, now: Instant) -> Option<Due> {
        match (
            self.obstacle_timer.due_at(now),
            self.frame_request.due_at(now),
        ) {
            (None, None) => None,
            (Some(tick), Some(frame)) if frame < tick => Some(Due::Frame),
            (Some(_), _) => Some(Due::Tick),
            (None, Some(_)) => Some(Due::Frame),
        }
    }

    fn run_tick(&mut self, now: Instant) {
        self.obstacle_timer.fire(now);
        if game::process_obstacle_tick(&mut self.game, &mut self.rng) {
            debug!(obstacles = self.game.obstacles.len(), "Obstacle spawned");
        }
    }

    fn run_frame(&mut self, now: Instant) {
        if self.frame_request.take(now).is_none() {
            return;
        }
        let outcome = game::process_frame(&mut self.game);
        if outcome.points > 0 {
            debug!(score = self.game.score, "Obstacle passed");
        }
        if self.game.is_terminal() {
            self.on_terminal();
        } else {
            self.frame_request.request(now);
        }
    }

    /// Stop all scheduled work once the game is over.
    fn on_terminal(&mut self) {
        self.obstacle_timer.cancel();
        self.frame_request.cancel();
        info!(
            score = self.game.score,
            cause = ?self.game.terminal_cause(),
            frames = self.game.frame_count,
            "Game over"
        );
    }

    /// Player input. Ignored once the game is over or closed.
    pub fn jump(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        let applied = game::jump(&mut self.game);
        if applied && self.game.is_terminal() {
            self.on_terminal();
        }
        applied
    }

    /// Unmount: cancel the obstacle timer and any pending frame. Idempotent.
    pub fn close(&mut self) {
        if !self.mounted {
            return;
        }
        self.obstacle_timer.cancel();
        self.frame_request.cancel();
        self.mounted = false;
        debug!(score = self.game.score, "Engine closed");
    }

    pub fn score(&self) -> u32 {
        self.game.score
    }

    pub fn is_terminal(&self) -> bool {
        self.game.is_terminal()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Read-only view for rendering.
    pub fn game(&self) -> &CatGame {
        &self.game
    }

    /// True while a tick or a frame is still scheduled.
    pub fn has_pending_work(&self) -> bool {
        self.obstacle_timer.is_active() || self.frame_request.is_pending()
    }

    /// Earliest scheduled deadline, for sizing the host's input poll.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.obstacle_timer.next_due(), self.frame_request.due()) {
            (Some(tick), Some(frame)) => Some(tick.min(frame)),
            (tick, frame) => tick.or(frame),
        }
    }
}

impl<R: Rng> Drop for Engine<R> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::time::Duration;

    const STEP: Duration = Duration::from_millis(16);

    fn quiet_engine(now: Instant) -> Engine<StepRng> {
        // Never passes the spawn roll
        Engine::mount(&GameConfig::default(), StepRng::new(u64::MAX, 0), now)
    }

    #[test]
    fn test_mount_schedules_tick_and_frame() {
        let t0 = Instant::now();
        let engine = quiet_engine(t0);
        assert!(engine.is_mounted());
        assert!(!engine.is_terminal());
        assert_eq!(engine.score(), 0);
        assert!(engine.game().obstacles.is_empty());
        assert!(engine.has_pending_work());
        assert_eq!(engine.next_deadline(), Some(t0 + STEP));
    }

    #[test]
    fn test_nothing_runs_before_first_deadline() {
        let t0 = Instant::now();
        let mut engine = quiet_engine(t0);
        assert!(!engine.pump(t0 + Duration::from_millis(10)));
        assert_eq!(engine.game().frame_count, 0);
        assert_eq!(engine.game().tick_count, 0);
    }

    #[test]
    fn test_pump_runs_one_tick_and_one_frame_per_period() {
        let t0 = Instant::now();
        let mut engine = quiet_engine(t0);
        for n in 1..=10u32 {
            assert!(engine.pump(t0 + STEP * n));
        }
        assert_eq!(engine.game().frame_count, 10);
        assert_eq!(engine.game().tick_count, 10);
    }

    #[test]
    fn test_stalled_host_gets_no_burst() {
        let t0 = Instant::now();
        let mut engine = quiet_engine(t0);
        engine.pump(t0 + Duration::from_secs(1));
        assert_eq!(engine.game().frame_count, 1);
        assert_eq!(engine.game().tick_count, 1);
    }

    #[test]
    fn test_terminal_cancels_scheduled_work() {
        let t0 = Instant::now();
        let mut engine = quiet_engine(t0);
        let mut now = t0;
        while !engine.is_terminal() {
            now += STEP;
            engine.pump(now);
        }
        assert!(!engine.has_pending_work());
        assert_eq!(engine.next_deadline(), None);
        assert!(engine.is_mounted());
    }

    #[test]
    fn test_zero_periods_do_not_spin() {
        let t0 = Instant::now();
        let config = GameConfig {
            tick_ms: 0,
            frame_ms: 0,
            ..GameConfig::default()
        };
        let mut engine = Engine::mount(&config, StepRng::new(u64::MAX, 0), t0);
        assert!(engine.pump(t0 + Duration::from_millis(1)));
        assert_eq!(engine.game().frame_count, 1);
        assert_eq!(engine.game().tick_count, 1);
    }

    #[test]
    fn test_close_is_idempotent() {
        let t0 = Instant::now();
        let mut engine = quiet_engine(t0);
        engine.close();
        engine.close();
        assert!(!engine.is_mounted());
        assert!(!engine.has_pending_work());
        assert!(!engine.jump());
        assert!(!engine.pump(t0 + Duration::from_secs(5)));
    }
}
