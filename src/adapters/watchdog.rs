//! Inactivity watchdog.
//!
//! Host analog of the hardware watchdog: if no sequence completes
//! within the configured window while a level is in progress, the outer
//! loop resets the session back to the menu. The game core performs no
//! timeout logic itself — the loop arms, feeds, and polls this struct.

use std::time::{Duration, Instant};

use log::warn;

pub struct InactivityWatchdog {
    window: Duration,
    deadline: Option<Instant>,
}

impl InactivityWatchdog {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the window starting at `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Feed the watchdog: push the deadline out. Must be called on
    /// every completed sequence while armed.
    pub fn feed(&mut self, now: Instant) {
        if self.deadline.is_some() {
            self.arm(now);
        }
    }

    /// Stop watching (menu, game over).
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Poll: returns `true` exactly once when the window elapses, and
    /// disarms itself.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                warn!("no sequence completed within {:?}", self.window);
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
