//! Owned, cancellable scheduled work for the engine.
//!
//! Nothing here spawns threads or registers with a global timer. The engine
//! holds the deadlines and fires them when pumped with the current instant.
//! A late deadline fires once and the next one is measured from `now`, so a
//! stalled host never gets a burst of catch-up callbacks.

use std::time::{Duration, Instant};

/// Next deadline after a firing that was due at `due`.
fn next_after(due: Instant, period: Duration, now: Instant) -> Instant {
    let next = due + period;
    if next <= now {
        now + period
    } else {
        next
    }
}

/// A repeating fixed-period timer.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
}

impl Interval {
    /// Start a timer whose first firing is one period after `now`.
    pub fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: Some(now + period),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// The pending deadline, if it has passed at `now`.
    pub fn due_at(&self, now: Instant) -> Option<Instant> {
        self.next_due.filter(|due| *due <= now)
    }

    /// Consume the firing due at `now` and schedule the next one.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due_at(now) {
            Some(due) => {
                self.next_due = Some(next_after(due, self.period, now));
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }
}

/// A one-shot request for the next display frame.
///
/// The frame callback decides whether to request another one.
#[derive(Debug, Clone)]
pub struct FrameRequest {
    period: Duration,
    due: Option<Instant>,
    last_fired: Option<Instant>,
}

impl FrameRequest {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            due: None,
            last_fired: None,
        }
    }

    /// Request a frame at the next refresh after `now`. Requesting twice
    /// before the frame fires keeps the earlier deadline.
    pub fn request(&mut self, now: Instant) {
        if self.due.is_some() {
            return;
        }
        let due = match self.last_fired {
            Some(last) => next_after(last, self.period, now),
            None => now + self.period,
        };
        self.due = Some(due);
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    pub fn due_at(&self, now: Instant) -> Option<Instant> {
        self.due.filter(|due| *due <= now)
    }

    /// Consume the pending frame if it is due at `now`.
    pub fn take(&mut self, now: Instant) -> Option<Instant> {
        let due = self.due_at(now)?;
        self.due = None;
        self.last_fired = Some(due);
        Some(due)
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }
}
