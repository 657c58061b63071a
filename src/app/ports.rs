//! Port traits — the boundary between the game core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ TrainerService (domain)
//! ```
//!
//! Driven adapters (screen, indicator LED, event log) implement these
//! traits. The [`TrainerService`](super::service::TrainerService)
//! consumes them via generics, so the core never touches a terminal or
//! an LED directly and the whole game is testable with recording mocks.

use crate::decoder::MorseSymbol;
use crate::engine::context::SessionOutcome;
use crate::engine::{Level, Mode};
use crate::error::MenuError;
use crate::symbols::WORD_CODE_CAP;

// ───────────────────────────────────────────────────────────────
// Prompt card (domain → display)
// ───────────────────────────────────────────────────────────────

/// The target of the current turn, ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptText {
    Character(char),
    Word(&'static str),
}

/// Everything the prompt screen shows: the target, the hint code on
/// levels that reveal it, and the player's standing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCard {
    pub level: Level,
    pub target: PromptText,
    /// Present only on levels that show the expected code.
    pub code: Option<heapless::String<WORD_CODE_CAP>>,
    pub lives: u8,
    pub streak: u32,
    /// Consecutive correct answers needed to clear the level.
    pub streak_target: u32,
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → screen)
// ───────────────────────────────────────────────────────────────

/// Write-side port for every screen the game requests.
pub trait DisplayPort {
    /// Opening screen: banner, rules, and the level-select menu.
    fn show_welcome(&mut self, completed: &[bool; Level::COUNT]);

    /// Level-select menu with per-level completion markers.
    fn show_menu(&mut self, completed: &[bool; Level::COUNT]);

    /// A menu selection was rejected.
    fn show_menu_error(&mut self, error: MenuError);

    /// A level is starting.
    fn show_level_intro(&mut self, level: Level);

    /// Render the current target.
    fn show_prompt(&mut self, card: &PromptCard);

    /// Pass/fail screen for the evaluated answer.
    fn show_feedback(&mut self, passed: bool, lives: u8);

    /// Level-complete / game-won / game-over screen.
    fn show_outcome(&mut self, outcome: SessionOutcome);

    /// End-of-level summary.
    fn show_stats(&mut self, correct: u32, incorrect: u32, accuracy_percent: f32);

    /// Echo one accepted keyed symbol.
    fn echo_symbol(&mut self, symbol: MorseSymbol);

    /// Echo the inter-character gap.
    fn echo_gap(&mut self);

    /// Echo the full decoded answer as it is submitted.
    fn echo_submission(&mut self, answer: &str);
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → status LED)
// ───────────────────────────────────────────────────────────────

/// The lives/mode indicator. Adapters map the pair onto their fixed
/// palette (off in the menu; green/blue/orange/red for 3/2/1/0 lives).
pub trait IndicatorPort {
    fn set_indicator(&mut self, lives: u8, mode: Mode);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
