pub mod cat_scene;
pub mod game_common;
pub mod landing_scene;

use flappycat::game::CatGame;
use flappycat::host::LandingPage;
use ratatui::Frame;
use std::time::Instant;

/// What the host is currently showing.
pub enum View<'a> {
    Landing(&'a LandingPage),
    Game(&'a CatGame),
}

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, view: View<'_>, now: Instant) {
    let area = frame.size();
    match view {
        View::Landing(page) => landing_scene::render_landing(frame, area, page, now),
        View::Game(game) => cat_scene::render_cat_game(frame, area, game),
    }
}
