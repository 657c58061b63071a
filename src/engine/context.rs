//! Shared mutable context threaded through the mode handlers.
//!
//! `GameContext` is the single struct the submit handlers read from and
//! write to: rules configuration, the per-level counters, the current
//! prompt, and the list of presentation effects produced by the turn.
//! Handlers never touch a screen or an LED — they describe what should
//! happen in [`Effect`] values, and the service applies those to the
//! ports afterwards.

use rand::Rng;

use super::{Level, Prompt};
use crate::config::GameConfig;
use crate::error::MenuError;
use crate::symbols;

/// Upper bound on effects a single turn can produce (feedback + outcome
/// + stats + menu + prompt is the widest path).
pub const EFFECT_CAP: usize = 8;

/// Per-turn effect list.
pub type Effects = heapless::Vec<Effect, EFFECT_CAP>;

// ---------------------------------------------------------------------------
// Presentation effects (written by handlers; applied by the service)
// ---------------------------------------------------------------------------

/// How a completed level (or game) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Five-in-a-row reached on this level.
    LevelComplete(Level),
    /// That level was the last of the four.
    GameWon,
    /// All lives lost.
    GameOver,
}

/// Presentation requests produced by one submitted sequence, in the
/// order they should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Re-display the level-select menu.
    ShowMenu,
    /// Report a rejected menu selection.
    ShowMenuError(MenuError),
    /// Announce the level that just started.
    ShowLevelIntro(Level),
    /// Display the current prompt (target, hint code, lives, streak).
    ShowPrompt,
    /// Pass/fail banner; carries the lives left after the answer.
    ShowFeedback { passed: bool, lives: u8 },
    /// Level-complete / game-won / game-over screen.
    ShowOutcome(SessionOutcome),
    /// End-of-level statistics, captured before the counters reset.
    ShowStats {
        correct: u32,
        incorrect: u32,
        attempts: u32,
    },
}

// ---------------------------------------------------------------------------
// GameContext
// ---------------------------------------------------------------------------

/// The blackboard shared by the menu and playing handlers.
pub struct GameContext {
    /// Rules configuration.
    pub config: GameConfig,
    /// Level in progress; `None` while in the menu.
    pub level: Option<Level>,
    /// Lives remaining, `0..=config.max_lives`.
    pub lives: u8,
    /// Consecutive correct answers this level.
    pub streak: u32,
    /// Per-level counters for the end-of-level stats.
    pub attempts: u32,
    pub correct: u32,
    pub incorrect: u32,
    /// Which levels have been cleared this run.
    pub levels_completed: [bool; Level::COUNT],
    /// Target of the current turn; only meaningful while playing.
    pub prompt: Option<Prompt>,
    /// Effects produced by the turn being processed.
    pub effects: Effects,
}

impl GameContext {
    pub fn new(config: GameConfig) -> Self {
        let lives = config.max_lives;
        Self {
            config,
            level: None,
            lives,
            streak: 0,
            attempts: 0,
            correct: 0,
            incorrect: 0,
            levels_completed: [false; Level::COUNT],
            prompt: None,
            effects: Effects::new(),
        }
    }

    /// Start `level`: fresh counters and a fresh prompt.
    pub fn begin_level(&mut self, level: Level, rng: &mut impl Rng) {
        self.level = Some(level);
        self.reset_level_counters();
        self.choose_prompt(rng);
    }

    /// Leave the current level (completed, lost, or reset). Counters go
    /// back to their level-start values; `levels_completed` persists.
    pub fn finish_level(&mut self) {
        self.level = None;
        self.prompt = None;
        self.reset_level_counters();
    }

    /// Pick a new uniformly random prompt for the current level.
    pub fn choose_prompt(&mut self, rng: &mut impl Rng) {
        self.prompt = self.level.map(|level| {
            if level.is_word_level() {
                Prompt::Word(rng.gen_range(0..symbols::WORD_COUNT))
            } else {
                Prompt::Character(rng.gen_range(0..symbols::CHAR_COUNT))
            }
        });
    }

    /// True once every level has been cleared this run.
    pub fn all_levels_completed(&self) -> bool {
        self.levels_completed.iter().all(|&done| done)
    }

    /// Queue a presentation effect for the service to apply.
    pub fn push_effect(&mut self, effect: Effect) {
        debug_assert!(self.effects.len() < EFFECT_CAP);
        let _ = self.effects.push(effect);
    }

    fn reset_level_counters(&mut self) {
        self.lives = self.config.max_lives;
        self.streak = 0;
        self.attempts = 0;
        self.correct = 0;
        self.incorrect = 0;
    }
}
