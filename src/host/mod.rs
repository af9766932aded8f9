//! The landing page that hosts the game.
//!
//! Pure presentation: petting the cat bumps a loss counter, a "Close
//! Position" button dodges most clicks, and a rug-pull banner flashes on a
//! timer. Nothing here touches game state; the only link to the engine is
//! that a successful "Close Position" click opens the game.

use crate::core::constants::*;
use rand::Rng;
use std::time::{Duration, Instant};

/// What a click on "Close Position" did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosePositionOutcome {
    /// The button is not shown until money has been lost.
    Hidden,
    /// The button ran away.
    Dodged,
    /// The click landed: open the game.
    OpenGame,
}

#[derive(Debug, Clone)]
pub struct LandingPage {
    pub money_lost: u64,
    shook_until: Option<Instant>,
    opened_at: Instant,
    /// Where the button ran to, in page units relative to its home spot.
    pub close_button_offset: (f64, f64),
    pub dodges: u32,
}

impl LandingPage {
    pub fn new(now: Instant) -> Self {
        Self {
            money_lost: 0,
            shook_until: None,
            opened_at: now,
            close_button_offset: (0.0, 0.0),
            dodges: 0,
        }
    }

    pub fn pet_cat(&mut self, now: Instant) {
        self.money_lost += LOSS_PER_PET;
        self.shook_until = Some(now + Duration::from_millis(SHOOK_DURATION_MS));
    }

    /// The cat wobbles for a moment after each pet.
    pub fn is_shook(&self, now: Instant) -> bool {
        self.shook_until.is_some_and(|until| now < until)
    }

    pub fn close_button_visible(&self) -> bool {
        self.money_lost > 0
    }

    pub fn try_close_position<R: Rng>(&mut self, rng: &mut R) -> ClosePositionOutcome {
        if !self.close_button_visible() {
            return ClosePositionOutcome::Hidden;
        }
        if rng.gen_bool(CLOSE_BUTTON_STAY_CHANCE) {
            self.close_button_offset = (0.0, 0.0);
            return ClosePositionOutcome::OpenGame;
        }
        self.close_button_offset = (
            rng.gen_range(-CLOSE_BUTTON_DODGE_X..CLOSE_BUTTON_DODGE_X),
            rng.gen_range(-CLOSE_BUTTON_DODGE_Y..CLOSE_BUTTON_DODGE_Y),
        );
        self.dodges += 1;
        ClosePositionOutcome::Dodged
    }

    /// The banner drops in every period and stays up for a couple of seconds.
    pub fn rug_banner_visible(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.opened_at).as_millis();
        let period = u128::from(RUG_BANNER_PERIOD_SECS) * 1000;
        let visible = u128::from(RUG_BANNER_VISIBLE_SECS) * 1000;
        elapsed >= period && elapsed % period < visible
    }
}
