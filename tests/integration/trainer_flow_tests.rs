//! End-to-end flows: keyed input events → decoder → engine → ports.
//!
//! These drive the service exactly the way the binary does, but against
//! recording mocks, and assert on the full presentation history.

use crate::mock_io::{DisplayCall, MockIo, RecordingSink};

use morse_trainer::app::events::AppEvent;
use morse_trainer::app::ports::PromptText;
use morse_trainer::app::service::TrainerService;
use morse_trainer::config::GameConfig;
use morse_trainer::engine::context::SessionOutcome;
use morse_trainer::engine::{Level, Mode, Prompt};
use morse_trainer::error::MenuError;
use morse_trainer::events::InputEvent;
use morse_trainer::symbols;

use rand::SeedableRng;
use rand::rngs::SmallRng;

// ── Harness ───────────────────────────────────────────────────

struct Harness {
    service: TrainerService,
    io: MockIo,
    sink: RecordingSink,
    rng: SmallRng,
}

impl Harness {
    fn start() -> Self {
        Self::start_seeded(0xC0FFEE)
    }

    fn start_seeded(seed: u64) -> Self {
        let mut h = Self {
            service: TrainerService::new(GameConfig::default()),
            io: MockIo::new(),
            sink: RecordingSink::new(),
            rng: SmallRng::seed_from_u64(seed),
        };
        h.service.start(&mut h.io, &mut h.sink);
        h
    }

    fn send(&mut self, event: InputEvent) {
        self.service
            .handle_event(event, &mut self.io, &mut self.sink, &mut self.rng);
    }

    /// Key the symbols of one code (no terminators).
    fn key_code(&mut self, code: &str) {
        for c in code.chars() {
            self.send(match c {
                '.' => InputEvent::Dot,
                '-' => InputEvent::Dash,
                other => panic!("not a morse symbol: {other}"),
            });
        }
    }

    /// Key a full answer: every character's code followed by the
    /// character gap, then the sequence terminator.
    fn key_text(&mut self, text: &str) {
        for c in text.chars() {
            let code = symbols::encode(c).expect("keyable character");
            self.key_code(code);
            self.send(InputEvent::EndCharacter);
        }
        self.send(InputEvent::EndSequence);
    }

    fn select_level(&mut self, digit: char) {
        self.key_text(&digit.to_string());
        assert_eq!(self.service.engine().mode(), Mode::Playing);
    }

    /// The text that answers the current prompt correctly.
    fn target_answer(&self) -> String {
        match self.service.engine().prompt().expect("active prompt") {
            Prompt::Character(i) => symbols::character(i).to_string(),
            Prompt::Word(i) => symbols::word(i).to_string(),
        }
    }

    /// A keyable answer guaranteed not to match the current prompt.
    fn wrong_answer(&self) -> String {
        match self.service.engine().prompt().expect("active prompt") {
            Prompt::Character(i) => {
                if symbols::character(i) == 'E' {
                    "T".to_string()
                } else {
                    "E".to_string()
                }
            }
            Prompt::Word(i) => {
                let mut w = symbols::word(i).to_string();
                let last = w.pop().unwrap();
                w.push(if last == 'A' { 'B' } else { 'A' });
                w
            }
        }
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_shows_welcome_and_idle_indicator() {
    let h = Harness::start();
    assert!(h.io.contains(&DisplayCall::Welcome {
        completed: [false; 4]
    }));
    assert_eq!(h.io.last_indicator(), Some((3, Mode::Menu)));
    assert!(h.sink.contains(&AppEvent::Started));
}

// ── Menu ──────────────────────────────────────────────────────

#[test]
fn keying_a_level_digit_starts_the_level() {
    let mut h = Harness::start();
    // ".----" is '1'.
    h.key_text("1");

    assert_eq!(h.service.engine().mode(), Mode::Playing);
    assert_eq!(h.service.engine().level(), Some(Level::One));
    assert_eq!(h.io.last_submission(), Some("1"));
    assert!(h.io.contains(&DisplayCall::LevelIntro(Level::One)));
    assert_eq!(h.io.last_indicator(), Some((3, Mode::Playing)));
    assert!(h.sink.contains(&AppEvent::LevelStarted(Level::One)));

    // Level 1 reveals the expected code on the prompt card.
    let card = h.io.last_prompt().expect("prompt shown");
    assert!(card.code.is_some());
    assert_eq!(card.lives, 3);
}

#[test]
fn out_of_range_digit_is_rejected_and_stays_in_menu() {
    let mut h = Harness::start();
    // "....." is '5'.
    h.key_text("5");

    assert_eq!(h.service.engine().mode(), Mode::Menu);
    assert!(
        h.io
            .contains(&DisplayCall::MenuError(MenuError::DigitOutOfRange))
    );
    assert!(
        h.sink
            .contains(&AppEvent::MenuRejected(MenuError::DigitOutOfRange))
    );
}

#[test]
fn multi_character_selection_is_rejected() {
    let mut h = Harness::start();
    h.key_text("12");

    assert_eq!(h.service.engine().mode(), Mode::Menu);
    assert!(
        h.io
            .contains(&DisplayCall::MenuError(MenuError::NotASingleDigit))
    );
}

// ── Character levels ──────────────────────────────────────────

#[test]
fn correct_character_answer_passes_and_keeps_lives() {
    let mut h = Harness::start();
    h.select_level('1');

    let target = h.target_answer();
    h.key_text(&target);

    assert_eq!(h.io.last_submission(), Some(target.as_str()));
    assert!(h.io.contains(&DisplayCall::Feedback {
        passed: true,
        lives: 3
    }));
    assert_eq!(h.io.last_indicator(), Some((3, Mode::Playing)));
    assert!(h.sink.contains(&AppEvent::TurnEvaluated {
        passed: true,
        streak: 1,
        lives: 3
    }));
}

#[test]
fn wrong_character_answer_costs_a_life_and_reshows_the_prompt() {
    let mut h = Harness::start();
    h.select_level('1');

    let target = h.target_answer();
    let wrong = h.wrong_answer();
    h.key_text(&wrong);

    assert!(h.io.contains(&DisplayCall::Feedback {
        passed: false,
        lives: 2
    }));
    assert_eq!(h.io.last_indicator(), Some((2, Mode::Playing)));

    // Same target again.
    assert_eq!(h.target_answer(), target);
    let card = h.io.last_prompt().unwrap();
    assert_eq!(card.lives, 2);
    assert_eq!(card.streak, 0);
}

#[test]
fn unrecognised_sequence_submits_a_question_mark_and_fails() {
    let mut h = Harness::start();
    h.select_level('1');

    // ".-.-" is not in the table.
    h.key_code(".-.-");
    h.send(InputEvent::EndCharacter);
    h.send(InputEvent::EndSequence);

    assert_eq!(h.io.last_submission(), Some("?"));
    assert!(h.io.contains(&DisplayCall::Feedback {
        passed: false,
        lives: 2
    }));
}

// ── Word levels ───────────────────────────────────────────────

#[test]
fn word_level_accepts_the_whole_word() {
    let mut h = Harness::start();
    h.select_level('3');

    let card = h.io.last_prompt().unwrap();
    assert!(matches!(card.target, PromptText::Word(_)));
    assert!(card.code.is_some(), "level 3 shows the code");

    let target = h.target_answer();
    h.key_text(&target);
    assert!(h.io.contains(&DisplayCall::Feedback {
        passed: true,
        lives: 3
    }));
}

#[test]
fn word_level_rejects_a_single_wrong_letter() {
    let mut h = Harness::start();
    h.select_level('4');

    let card = h.io.last_prompt().unwrap();
    assert!(card.code.is_none(), "level 4 hides the code");

    let wrong = h.wrong_answer();
    h.key_text(&wrong);
    assert!(h.io.contains(&DisplayCall::Feedback {
        passed: false,
        lives: 2
    }));
    assert!(h.sink.contains(&AppEvent::TurnEvaluated {
        passed: false,
        streak: 0,
        lives: 2
    }));
}

// ── Level completion / loss ───────────────────────────────────

#[test]
fn five_straight_passes_complete_the_level() {
    let mut h = Harness::start();
    h.select_level('2');

    for _ in 0..5 {
        let target = h.target_answer();
        h.key_text(&target);
    }

    assert_eq!(h.io.outcomes(), vec![SessionOutcome::LevelComplete(
        Level::Two
    )]);
    assert!(h.io.contains(&DisplayCall::Stats {
        correct: 5,
        incorrect: 0,
        accuracy_percent: 100.0
    }));
    assert!(h.io.contains(&DisplayCall::Menu {
        completed: [false, true, false, false]
    }));
    assert_eq!(h.io.last_indicator(), Some((3, Mode::Menu)));
    assert!(h.sink.contains(&AppEvent::LevelCompleted(Level::Two)));
}

#[test]
fn three_misses_end_the_game() {
    let mut h = Harness::start();
    h.select_level('1');

    for _ in 0..3 {
        let wrong = h.wrong_answer();
        h.key_text(&wrong);
    }

    assert_eq!(h.io.outcomes(), vec![SessionOutcome::GameOver]);
    assert!(h.io.contains(&DisplayCall::Stats {
        correct: 0,
        incorrect: 3,
        accuracy_percent: 0.0
    }));
    assert_eq!(h.service.engine().mode(), Mode::Menu);
    assert!(h.sink.contains(&AppEvent::GameOver));
}

#[test]
fn clearing_every_level_wins_the_game() {
    let mut h = Harness::start();

    for digit in ['1', '2', '3', '4'] {
        h.select_level(digit);
        for _ in 0..5 {
            let target = h.target_answer();
            h.key_text(&target);
        }
        assert_eq!(h.service.engine().mode(), Mode::Menu);
    }

    assert!(
        h.io
            .outcomes()
            .contains(&SessionOutcome::GameWon)
    );
    assert!(h.io.contains(&DisplayCall::Menu {
        completed: [true; 4]
    }));
    assert!(h.sink.contains(&AppEvent::GameWon));
}

// ── Buffer policy ─────────────────────────────────────────────

#[test]
fn only_accepted_symbols_are_echoed() {
    let mut h = Harness::start();
    for _ in 0..30 {
        h.send(InputEvent::Dot);
    }
    // Effective symbol capacity is 18: capacity 20 minus the reserved
    // headroom.
    assert_eq!(h.io.echoed_symbols(), 18);

    h.send(InputEvent::EndCharacter);
    h.send(InputEvent::EndSequence);
    // Eighteen dots resolve to nothing; the truncated sequence still
    // evaluates cleanly as a single `?`.
    assert_eq!(h.io.last_submission(), Some("?"));
}

// ── Session reset ─────────────────────────────────────────────

#[test]
fn session_reset_abandons_the_level_and_in_flight_input() {
    let mut h = Harness::start();
    h.select_level('1');
    // Leave a half-keyed character in the decoder.
    h.key_code(".-");

    h.service.reset_session(&mut h.io, &mut h.sink);

    assert_eq!(h.service.engine().mode(), Mode::Menu);
    assert_eq!(h.io.last_indicator(), Some((3, Mode::Menu)));
    assert!(h.sink.contains(&AppEvent::SessionReset));

    // The abandoned input is gone: the next submission is exactly '1'.
    h.key_text("1");
    assert_eq!(h.io.last_submission(), Some("1"));
    assert_eq!(h.service.engine().mode(), Mode::Playing);
}
