//! Integration test: physics, collision and scoring through the public game API.

use flappycat::core::constants::{GRAVITY, OBSTACLE_STEP};
use flappycat::game::{
    evaluate_collisions, jump, process_frame, process_obstacle_tick, CatGame, GameStatus,
    Obstacle, ScoringRule, TerminalCause,
};
use rand::rngs::mock::StepRng;

/// Never passes the spawn roll, so only hand-placed obstacles exist.
fn no_spawns() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn game_at(y: f64, scoring: ScoringRule) -> CatGame {
    let mut game = CatGame::new(scoring);
    game.player.y = y;
    game
}

// =============================================================================
// Evaluator
// =============================================================================

#[test]
fn test_cat_above_gap_hits_pipe() {
    let mut game = game_at(100.0, ScoringRule::Crossing);
    game.obstacles.push(Obstacle::new(50.0, 200.0, 150.0));
    evaluate_collisions(&mut game);
    assert!(game.is_terminal());
    assert_eq!(game.terminal_cause(), Some(TerminalCause::Obstacle));
}

#[test]
fn test_cat_in_gap_on_line_scores_one() {
    for rule in [ScoringRule::Crossing, ScoringRule::ExactPosition] {
        let mut game = game_at(250.0, rule);
        game.obstacles.push(Obstacle::new(50.0, 200.0, 150.0));
        evaluate_collisions(&mut game);
        assert!(!game.is_terminal());
        assert_eq!(game.score, 1);
    }
}

// =============================================================================
// Full frame/tick interplay
// =============================================================================

/// Fly one obstacle past the cat, holding the cat inside the gap by
/// jumping whenever it sinks too low. Returns the final game.
fn fly_through(scoring: ScoringRule) -> CatGame {
    let mut game = game_at(260.0, scoring);
    game.obstacles.push(Obstacle::new(150.0, 200.0, 150.0));
    let mut rng = no_spawns();

    // 150 -> -50 takes 40 ticks
    for _ in 0..45 {
        process_obstacle_tick(&mut game, &mut rng);
        if game.player.y > 320.0 {
            jump(&mut game);
        }
        process_frame(&mut game);
        if game.is_terminal() {
            break;
        }
    }
    game
}

#[test]
fn test_passing_an_obstacle_scores_exactly_once() {
    for rule in [ScoringRule::Crossing, ScoringRule::ExactPosition] {
        let game = fly_through(rule);
        assert_eq!(game.status, GameStatus::Active, "{rule:?}");
        assert_eq!(game.score, 1, "{rule:?}");
        assert!(game.obstacles.is_empty());
    }
}

#[test]
fn test_exact_scoring_misses_when_frames_lag_ticks() {
    // Two ticks per frame: the obstacle goes 55 -> 45 without a frame at 50
    let mut exact = game_at(250.0, ScoringRule::ExactPosition);
    let mut crossing = game_at(250.0, ScoringRule::Crossing);
    for game in [&mut exact, &mut crossing] {
        game.obstacles.push(Obstacle::new(55.0, 200.0, 150.0));
        process_obstacle_tick(game, &mut no_spawns());
        process_obstacle_tick(game, &mut no_spawns());
        game.player.y -= GRAVITY; // keep the cat where it was
        process_frame(game);
    }
    assert!((exact.obstacles[0].x - (55.0 - 2.0 * OBSTACLE_STEP)).abs() < f64::EPSILON);
    assert_eq!(exact.score, 0);
    assert_eq!(crossing.score, 1);
}

#[test]
fn test_obstacle_entering_band_while_cat_outside_gap_ends_game() {
    let mut game = game_at(150.0, ScoringRule::Crossing);
    game.obstacles.push(Obstacle::new(105.0, 300.0, 150.0));
    let mut rng = no_spawns();

    process_obstacle_tick(&mut game, &mut rng); // 100: still outside the band
    game.player.y -= GRAVITY;
    process_frame(&mut game);
    assert!(!game.is_terminal());

    process_obstacle_tick(&mut game, &mut rng); // 95: inside
    game.player.y -= GRAVITY;
    process_frame(&mut game);
    assert_eq!(game.terminal_cause(), Some(TerminalCause::Obstacle));
}

#[test]
fn test_nothing_moves_after_collision() {
    let mut game = game_at(100.0, ScoringRule::Crossing);
    game.obstacles.push(Obstacle::new(50.0, 200.0, 150.0));
    process_frame(&mut game);
    assert!(game.is_terminal());

    let y = game.player.y;
    let x = game.obstacles[0].x;
    let mut rng = StepRng::new(0, 0); // would pass every spawn roll
    for _ in 0..20 {
        process_obstacle_tick(&mut game, &mut rng);
        process_frame(&mut game);
        jump(&mut game);
    }
    assert!((game.player.y - y).abs() < f64::EPSILON);
    assert!((game.obstacles[0].x - x).abs() < f64::EPSILON);
    assert_eq!(game.obstacles.len(), 1);
    assert_eq!(game.score, 0);
}
