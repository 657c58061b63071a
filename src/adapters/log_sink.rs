//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the host logger. A future telemetry adapter would implement the same
//! trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("START | session opened"),
            AppEvent::LevelStarted(level) => {
                info!("LEVEL | started level {}", level.number());
            }
            AppEvent::MenuRejected(error) => {
                info!("MENU  | selection rejected: {error}");
            }
            AppEvent::TurnEvaluated {
                passed,
                streak,
                lives,
            } => {
                info!(
                    "TURN  | {} | streak={} lives={}",
                    if *passed { "pass" } else { "fail" },
                    streak,
                    lives,
                );
            }
            AppEvent::LevelCompleted(level) => {
                info!("LEVEL | completed level {}", level.number());
            }
            AppEvent::GameWon => info!("GAME  | all levels cleared"),
            AppEvent::GameOver => info!("GAME  | out of lives"),
            AppEvent::SessionReset => info!("RESET | inactivity watchdog fired"),
        }
    }
}
