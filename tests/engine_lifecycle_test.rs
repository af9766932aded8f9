//! Integration test: engine mount, scheduling, terminal state and unmount.

use flappycat::core::constants::{FLOOR_Y, GRAVITY, JUMP_IMPULSE, PLAYER_START_Y};
use flappycat::{Engine, GameConfig, TerminalCause};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

const STEP: Duration = Duration::from_millis(16);

fn mount(seed: u64, now: Instant) -> Engine<ChaCha8Rng> {
    Engine::mount(&GameConfig::default(), ChaCha8Rng::seed_from_u64(seed), now)
}

/// Pump the engine one period at a time for `frames` periods.
fn run_frames(engine: &mut Engine<ChaCha8Rng>, start: Instant, frames: u32) -> Instant {
    let mut now = start;
    for _ in 0..frames {
        now += STEP;
        engine.pump(now);
    }
    now
}

#[test]
fn test_mount_starts_active_and_empty() {
    let engine = mount(1, Instant::now());
    assert!(engine.is_mounted());
    assert!(!engine.is_terminal());
    assert_eq!(engine.score(), 0);
    assert!(engine.game().obstacles.is_empty());
    assert!((engine.game().player.y - PLAYER_START_Y).abs() < f64::EPSILON);
}

#[test]
fn test_free_fall_reaches_floor_on_exact_frame() {
    // 200 + 5 * 76 = 580. Obstacles need 140+ ticks to reach the collision
    // band, so nothing else can end the game first.
    let t0 = Instant::now();
    let mut engine = mount(9, t0);
    let now = run_frames(&mut engine, t0, 75);
    assert!(!engine.is_terminal());
    assert!((engine.game().player.y - (PLAYER_START_Y + GRAVITY * 75.0)).abs() < 1e-9);

    run_frames(&mut engine, now, 1);
    assert!(engine.is_terminal());
    assert_eq!(engine.game().terminal_cause(), Some(TerminalCause::Floor));
    // The losing step is rolled back, so the cat is drawn one step above the floor
    assert!((engine.game().player.y - (FLOOR_Y - GRAVITY)).abs() < 1e-9);
}

#[test]
fn test_jump_between_frames_is_instant() {
    let t0 = Instant::now();
    let mut engine = mount(2, t0);
    let now = run_frames(&mut engine, t0, 4);
    let before = engine.game().player.y;

    assert!(engine.jump());
    assert!((engine.game().player.y - (before - JUMP_IMPULSE)).abs() < f64::EPSILON);

    run_frames(&mut engine, now, 1);
    assert!((engine.game().player.y - (before - JUMP_IMPULSE + GRAVITY)).abs() < 1e-9);
}

#[test]
fn test_jumping_into_ceiling_ends_game() {
    let t0 = Instant::now();
    let mut engine = mount(3, t0);
    while !engine.is_terminal() {
        engine.jump();
    }
    assert_eq!(engine.game().terminal_cause(), Some(TerminalCause::Ceiling));
    assert!(!engine.has_pending_work());
}

#[test]
fn test_terminal_state_is_absorbing() {
    let t0 = Instant::now();
    let mut engine = mount(4, t0);
    // Run until the floor ends it, spawning obstacles along the way
    let mut now = t0;
    while !engine.is_terminal() {
        now += STEP;
        engine.pump(now);
    }

    let snapshot = engine.game().clone();
    assert!(!engine.jump());
    for _ in 0..500 {
        now += STEP;
        assert!(!engine.pump(now));
    }

    let game = engine.game();
    assert!(game.is_terminal());
    assert_eq!(game.score, snapshot.score);
    assert_eq!(game.frame_count, snapshot.frame_count);
    assert_eq!(game.tick_count, snapshot.tick_count);
    assert_eq!(game.obstacles, snapshot.obstacles);
    assert!((game.player.y - snapshot.player.y).abs() < f64::EPSILON);
}

#[test]
fn test_close_cancels_everything() {
    let t0 = Instant::now();
    let mut engine = mount(5, t0);
    let now = run_frames(&mut engine, t0, 20);
    assert!(engine.has_pending_work());

    engine.close();
    assert!(!engine.is_mounted());
    assert!(!engine.has_pending_work());
    assert_eq!(engine.next_deadline(), None);

    let snapshot = engine.game().clone();
    assert!(!engine.jump());
    assert!(!engine.pump(now + Duration::from_secs(60)));

    let game = engine.game();
    assert!(!game.is_terminal());
    assert_eq!(game.frame_count, snapshot.frame_count);
    assert_eq!(game.tick_count, snapshot.tick_count);
    assert!((game.player.y - snapshot.player.y).abs() < f64::EPSILON);
}

#[test]
fn test_close_after_game_over() {
    let t0 = Instant::now();
    let mut engine = mount(6, t0);
    run_frames(&mut engine, t0, 200);
    assert!(engine.is_terminal());
    engine.close();
    assert!(!engine.is_mounted());
    assert!(!engine.has_pending_work());
}

#[test]
fn test_same_seed_same_game() {
    let t0 = Instant::now();
    let mut a = mount(77, t0);
    let mut b = mount(77, t0);
    // Keep both alive long enough for several spawn rolls to pass
    let mut now = t0;
    for frame in 0..70 {
        now += STEP;
        if frame % 10 == 0 {
            a.jump();
            b.jump();
        }
        a.pump(now);
        b.pump(now);
    }
    assert_eq!(a.game().obstacles, b.game().obstacles);
    assert_eq!(a.game().tick_count, b.game().tick_count);
    assert!((a.game().player.y - b.game().player.y).abs() < f64::EPSILON);
}

#[test]
fn test_slow_frames_still_tick_obstacles_on_schedule() {
    let t0 = Instant::now();
    let config = GameConfig {
        frame_ms: 32,
        ..GameConfig::default()
    };
    let mut engine = Engine::mount(&config, ChaCha8Rng::seed_from_u64(8), t0);
    let mut now = t0;
    for _ in 0..20 {
        now += STEP;
        engine.pump(now);
    }
    assert_eq!(engine.game().tick_count, 20);
    assert_eq!(engine.game().frame_count, 10);
}
