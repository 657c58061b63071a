//! Outbound application events.
//!
//! The [`TrainerService`](super::service::TrainerService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on
//! the other side decide what to do with them — the stock adapter logs
//! them to the host logger.

use crate::engine::Level;
use crate::error::MenuError;

/// Structured events emitted by the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started and shown the welcome screen.
    Started,

    /// A level was selected from the menu.
    LevelStarted(Level),

    /// A menu selection was rejected.
    MenuRejected(MenuError),

    /// One answer was evaluated.
    TurnEvaluated { passed: bool, streak: u32, lives: u8 },

    /// A level reached its streak target.
    LevelCompleted(Level),

    /// All four levels have been cleared this run.
    GameWon,

    /// All lives were lost.
    GameOver,

    /// The inactivity watchdog abandoned the session.
    SessionReset,
}
