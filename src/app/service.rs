//! Trainer service — the hexagonal core.
//!
//! [`TrainerService`] owns the Morse decoder and the quiz engine and
//! exposes a single event-driven API. All I/O flows through port traits
//! injected at call sites, making the entire game playable against
//! mock adapters.
//!
//! ```text
//!  InputEvent ──▶ ┌────────────────────────┐ ──▶ DisplayPort
//!                 │     TrainerService      │ ──▶ IndicatorPort
//!                 │   Decoder · QuizEngine  │ ──▶ EventSink
//!                 └────────────────────────┘
//! ```
//!
//! Each event is processed to completion before the next one; the
//! service is single-threaded and not reentrant.

use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::decoder::{MorseDecoder, MorseSymbol};
use crate::engine::context::{Effect, SessionOutcome};
use crate::engine::{Prompt, QuizEngine};
use crate::events::InputEvent;
use crate::symbols;

use super::events::AppEvent;
use super::ports::{DisplayPort, EventSink, IndicatorPort, PromptCard, PromptText};

// ───────────────────────────────────────────────────────────────
// TrainerService
// ───────────────────────────────────────────────────────────────

/// Orchestrates decoding and quiz evaluation.
pub struct TrainerService {
    decoder: MorseDecoder,
    engine: QuizEngine,
}

impl TrainerService {
    pub fn new(config: GameConfig) -> Self {
        Self {
            decoder: MorseDecoder::new(),
            engine: QuizEngine::new(config),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Show the opening screen and announce the session.
    pub fn start(
        &mut self,
        io: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        io.show_welcome(&self.engine.levels_completed());
        io.set_indicator(self.engine.lives(), self.engine.mode());
        sink.emit(&AppEvent::Started);
        info!("trainer started in {:?}", self.engine.mode());
    }

    /// Abandon the current level and return to the menu (inactivity
    /// watchdog path). In-flight input is discarded.
    pub fn reset_session(
        &mut self,
        io: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        self.decoder.clear();
        self.engine.reset_session();
        io.show_menu(&self.engine.levels_completed());
        io.set_indicator(self.engine.lives(), self.engine.mode());
        sink.emit(&AppEvent::SessionReset);
    }

    // ── Event handling ────────────────────────────────────────

    /// Process one input event to completion.
    ///
    /// The `io` parameter satisfies **both** [`DisplayPort`] and
    /// [`IndicatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        io: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
        rng: &mut impl Rng,
    ) {
        match event {
            InputEvent::Dot => {
                if self.decoder.record(MorseSymbol::Dot) {
                    io.echo_symbol(MorseSymbol::Dot);
                }
            }
            InputEvent::Dash => {
                if self.decoder.record(MorseSymbol::Dash) {
                    io.echo_symbol(MorseSymbol::Dash);
                }
            }
            InputEvent::EndCharacter => {
                self.decoder.end_character();
                io.echo_gap();
            }
            InputEvent::EndSequence => self.evaluate(io, sink, rng),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Read-only view of the engine (mode, lives, completion) for the
    /// outer loop's watchdog arming and rendering decisions.
    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    // ── Internal ──────────────────────────────────────────────

    /// End-of-sequence: submit the answer and apply the resulting
    /// presentation effects to the ports.
    fn evaluate(
        &mut self,
        io: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
        rng: &mut impl Rng,
    ) {
        let answer = self.decoder.end_sequence();
        io.echo_submission(&answer);

        self.engine.submit(&answer, rng);
        for effect in self.engine.take_effects() {
            self.apply_effect(effect, &mut *io, &mut *sink);
        }

        io.set_indicator(self.engine.lives(), self.engine.mode());
    }

    /// Translate one engine effect into port calls.
    fn apply_effect(
        &self,
        effect: Effect,
        io: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        match effect {
            Effect::ShowMenu => io.show_menu(&self.engine.levels_completed()),
            Effect::ShowMenuError(error) => {
                io.show_menu_error(error);
                sink.emit(&AppEvent::MenuRejected(error));
            }
            Effect::ShowLevelIntro(level) => {
                io.show_level_intro(level);
                sink.emit(&AppEvent::LevelStarted(level));
            }
            Effect::ShowPrompt => {
                if let Some(card) = self.prompt_card() {
                    io.show_prompt(&card);
                }
            }
            Effect::ShowFeedback { passed, lives } => {
                io.show_feedback(passed, lives);
                sink.emit(&AppEvent::TurnEvaluated {
                    passed,
                    streak: self.engine.streak(),
                    lives,
                });
            }
            Effect::ShowOutcome(outcome) => {
                io.show_outcome(outcome);
                sink.emit(&match outcome {
                    SessionOutcome::LevelComplete(level) => AppEvent::LevelCompleted(level),
                    SessionOutcome::GameWon => AppEvent::GameWon,
                    SessionOutcome::GameOver => AppEvent::GameOver,
                });
            }
            Effect::ShowStats {
                correct,
                incorrect,
                attempts,
            } => {
                let accuracy = if attempts > 0 {
                    correct as f32 * 100.0 / attempts as f32
                } else {
                    0.0
                };
                io.show_stats(correct, incorrect, accuracy);
            }
        }
    }

    /// Build the prompt card for the current turn, if one is active.
    fn prompt_card(&self) -> Option<PromptCard> {
        let level = self.engine.level()?;
        let prompt = self.engine.prompt()?;

        let (target, code) = match prompt {
            Prompt::Character(i) => {
                let mut code = heapless::String::new();
                let _ = code.push_str(symbols::char_code(i));
                (PromptText::Character(symbols::character(i)), code)
            }
            Prompt::Word(i) => {
                let word = symbols::word(i);
                (PromptText::Word(word), symbols::word_code(word))
            }
        };

        Some(PromptCard {
            level,
            target,
            code: level.shows_code().then_some(code),
            lives: self.engine.lives(),
            streak: self.engine.streak(),
            streak_target: self.engine.config().streak_to_win,
        })
    }
}
