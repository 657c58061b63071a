//! Quiz engine state machine.
//!
//! Two modes, one dispatch point:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Mode      │ handler                                │
//! ├────────────┼────────────────────────────────────────┤
//! │  Menu      │ states::menu_submit(ctx, answer)       │
//! │  Playing   │ states::playing_submit(ctx, answer)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Each submitted sequence runs exactly one handler against the shared
//! [`GameContext`](context::GameContext). The handler queues
//! presentation [`Effect`](context::Effect)s and returns `Some(next)`
//! to change mode. The engine itself performs no I/O; callers drain the
//! effect list and drive the display/indicator ports.

pub mod context;
mod states;

use log::info;
use rand::Rng;

use crate::config::GameConfig;
use context::{Effects, GameContext};

// ---------------------------------------------------------------------------
// Mode / level / prompt identity
// ---------------------------------------------------------------------------

/// Top-level engine mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Level select: submissions are interpreted as a level digit.
    Menu,
    /// In a level: submissions are answers to the current prompt.
    Playing,
}

/// The four quiz levels. Odd levels show the expected code alongside
/// the prompt; levels three and four quiz whole words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Level {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Level {
    /// Total number of levels — sizes the completion array.
    pub const COUNT: usize = 4;

    /// Parse a menu selection digit.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::One),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            _ => None,
        }
    }

    /// Level number as shown to the player, `1..=4`.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based index into the completion array.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Word levels quiz three-letter words; the others single characters.
    pub const fn is_word_level(self) -> bool {
        matches!(self, Self::Three | Self::Four)
    }

    /// Odd levels display the expected Morse code next to the prompt.
    pub const fn shows_code(self) -> bool {
        self.number() % 2 == 1
    }
}

/// The target of one turn, as an index into the fixed tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Index into the 36-character table.
    Character(usize),
    /// Index into the word pool.
    Word(usize),
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The quiz engine: current mode plus the shared game context.
pub struct QuizEngine {
    mode: Mode,
    ctx: GameContext,
}

impl QuizEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            mode: Mode::Menu,
            ctx: GameContext::new(config),
        }
    }

    /// Evaluate one submitted answer.
    ///
    /// Dispatches to the current mode's handler; presentation effects
    /// accumulate until [`take_effects`](Self::take_effects) drains them.
    pub fn submit(&mut self, answer: &str, rng: &mut impl Rng) {
        let next = match self.mode {
            Mode::Menu => states::menu_submit(&mut self.ctx, answer, rng),
            Mode::Playing => states::playing_submit(&mut self.ctx, answer, rng),
        };

        if let Some(next) = next {
            if next != self.mode {
                info!("mode transition: {:?} -> {:?}", self.mode, next);
                self.mode = next;
            }
        }
    }

    /// Abandon the current level and return to the menu (watchdog /
    /// session-reset path). Emits no effects; the caller re-displays.
    pub fn reset_session(&mut self) {
        if self.mode == Mode::Playing {
            info!("session reset, abandoning level");
        }
        self.ctx.finish_level();
        self.ctx.effects.clear();
        self.mode = Mode::Menu;
    }

    /// Drain the effects produced since the last call.
    pub fn take_effects(&mut self) -> Effects {
        core::mem::take(&mut self.ctx.effects)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn level(&self) -> Option<Level> {
        self.ctx.level
    }

    pub fn lives(&self) -> u8 {
        self.ctx.lives
    }

    pub fn streak(&self) -> u32 {
        self.ctx.streak
    }

    pub fn prompt(&self) -> Option<Prompt> {
        self.ctx.prompt
    }

    pub fn levels_completed(&self) -> [bool; Level::COUNT] {
        self.ctx.levels_completed
    }

    pub fn config(&self) -> &GameConfig {
        &self.ctx.config
    }
}
