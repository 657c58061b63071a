//! Game configuration parameters
//!
//! All tunable parameters for the trainer. The defaults reproduce the
//! classic rules: three lives, five consecutive correct answers to clear
//! a level, and a nine-second inactivity window before the session is
//! reset.

use serde::{Deserialize, Serialize};

/// Core game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    // --- Rules ---
    /// Lives at level start; also the cap that correct answers can
    /// restore lost lives back up to.
    pub max_lives: u8,
    /// Consecutive correct answers required to complete a level.
    pub streak_to_win: u32,

    // --- Supervision ---
    /// Seconds without a completed sequence before the watchdog resets
    /// the session back to the menu.
    pub idle_reset_secs: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_lives: 3,
            streak_to_win: 5,
            idle_reset_secs: 9,
        }
    }
}
