//! Maps terminal events to landing-page and game actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Actions on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingInput {
    /// Click the cat (c, Space or a mouse click).
    PetCat,
    /// Click "Close Position" (x or Enter).
    ClosePosition,
    /// Leave the program (q, Esc or Ctrl-C).
    Quit,
    Other,
}

/// Actions while the game is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space, Up, Enter, k or a mouse click while the game is running.
    Jump,
    /// "Back to Copium" (Enter or Esc on the game-over screen).
    Close,
    /// Play again (r on the game-over screen).
    Restart,
    /// Leave the program (q or Ctrl-C).
    Quit,
    Other,
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_click(mouse: &MouseEvent) -> bool {
    matches!(mouse.kind, MouseEventKind::Down(_))
}

pub fn map_landing_event(event: &Event) -> LandingInput {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if is_ctrl_c(key) {
                return LandingInput::Quit;
            }
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char(' ') => {
                    LandingInput::PetCat
                }
                KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Enter => {
                    LandingInput::ClosePosition
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => LandingInput::Quit,
                _ => LandingInput::Other,
            }
        }
        Event::Mouse(mouse) if is_click(mouse) => LandingInput::PetCat,
        _ => LandingInput::Other,
    }
}

/// `game_over` selects between the running controls and the game-over ones.
pub fn map_game_event(event: &Event, game_over: bool) -> GameInput {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if is_ctrl_c(key) {
                return GameInput::Quit;
            }
            match (key.code, game_over) {
                (KeyCode::Char('q') | KeyCode::Char('Q'), _) => GameInput::Quit,
                (KeyCode::Enter | KeyCode::Esc, true) => GameInput::Close,
                (KeyCode::Char('r') | KeyCode::Char('R'), true) => GameInput::Restart,
                (
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('k'),
                    false,
                ) => GameInput::Jump,
                _ => GameInput::Other,
            }
        }
        Event::Mouse(mouse) if is_click(mouse) && !game_over => GameInput::Jump,
        _ => GameInput::Other,
    }
}
