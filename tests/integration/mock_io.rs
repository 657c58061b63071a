//! Mock port adapters for integration tests.
//!
//! Records every display/indicator call so tests can assert on the full
//! presentation history without a terminal.

use morse_trainer::app::events::AppEvent;
use morse_trainer::app::ports::{DisplayPort, EventSink, IndicatorPort, PromptCard};
use morse_trainer::decoder::MorseSymbol;
use morse_trainer::engine::context::SessionOutcome;
use morse_trainer::engine::{Level, Mode};
use morse_trainer::error::MenuError;

// ── Display call record ───────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Welcome {
        completed: [bool; Level::COUNT],
    },
    Menu {
        completed: [bool; Level::COUNT],
    },
    MenuError(MenuError),
    LevelIntro(Level),
    Prompt(PromptCard),
    Feedback {
        passed: bool,
        lives: u8,
    },
    Outcome(SessionOutcome),
    Stats {
        correct: u32,
        incorrect: u32,
        accuracy_percent: f32,
    },
    EchoSymbol(char),
    EchoGap,
    EchoSubmission(String),
    Indicator {
        lives: u8,
        mode: Mode,
    },
}

// ── MockIo ────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockIo {
    pub calls: Vec<DisplayCall>,
}

#[allow(dead_code)]
impl MockIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_prompt(&self) -> Option<&PromptCard> {
        self.calls.iter().rev().find_map(|c| match c {
            DisplayCall::Prompt(card) => Some(card),
            _ => None,
        })
    }

    pub fn last_indicator(&self) -> Option<(u8, Mode)> {
        self.calls.iter().rev().find_map(|c| match c {
            DisplayCall::Indicator { lives, mode } => Some((*lives, *mode)),
            _ => None,
        })
    }

    pub fn last_submission(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            DisplayCall::EchoSubmission(answer) => Some(answer.as_str()),
            _ => None,
        })
    }

    pub fn echoed_symbols(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DisplayCall::EchoSymbol(_)))
            .count()
    }

    pub fn outcomes(&self) -> Vec<SessionOutcome> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DisplayCall::Outcome(o) => Some(*o),
                _ => None,
            })
            .collect()
    }

    pub fn contains(&self, call: &DisplayCall) -> bool {
        self.calls.contains(call)
    }
}

impl DisplayPort for MockIo {
    fn show_welcome(&mut self, completed: &[bool; Level::COUNT]) {
        self.calls.push(DisplayCall::Welcome {
            completed: *completed,
        });
    }

    fn show_menu(&mut self, completed: &[bool; Level::COUNT]) {
        self.calls.push(DisplayCall::Menu {
            completed: *completed,
        });
    }

    fn show_menu_error(&mut self, error: MenuError) {
        self.calls.push(DisplayCall::MenuError(error));
    }

    fn show_level_intro(&mut self, level: Level) {
        self.calls.push(DisplayCall::LevelIntro(level));
    }

    fn show_prompt(&mut self, card: &PromptCard) {
        self.calls.push(DisplayCall::Prompt(card.clone()));
    }

    fn show_feedback(&mut self, passed: bool, lives: u8) {
        self.calls.push(DisplayCall::Feedback { passed, lives });
    }

    fn show_outcome(&mut self, outcome: SessionOutcome) {
        self.calls.push(DisplayCall::Outcome(outcome));
    }

    fn show_stats(&mut self, correct: u32, incorrect: u32, accuracy_percent: f32) {
        self.calls.push(DisplayCall::Stats {
            correct,
            incorrect,
            accuracy_percent,
        });
    }

    fn echo_symbol(&mut self, symbol: MorseSymbol) {
        self.calls.push(DisplayCall::EchoSymbol(symbol.glyph()));
    }

    fn echo_gap(&mut self) {
        self.calls.push(DisplayCall::EchoGap);
    }

    fn echo_submission(&mut self, answer: &str) {
        self.calls
            .push(DisplayCall::EchoSubmission(answer.to_string()));
    }
}

impl IndicatorPort for MockIo {
    fn set_indicator(&mut self, lives: u8, mode: Mode) {
        self.calls.push(DisplayCall::Indicator { lives, mode });
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, event: &AppEvent) -> bool {
        self.events.contains(event)
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
