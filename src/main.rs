//! Morse-code trainer — terminal front-end.
//!
//! Wires the pure game core to its terminal adapters:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                  │
//! │                                                           │
//! │  keying (keyboard)   TerminalDisplay    LogEventSink      │
//! │  InactivityWatchdog  (Display+Indicator) (EventSink)      │
//! │                                                           │
//! │  ────────────── Port Trait Boundary ──────────────        │
//! │                                                           │
//! │  ┌─────────────────────────────────────────────────┐      │
//! │  │          TrainerService (pure logic)            │      │
//! │  │          MorseDecoder · QuizEngine              │      │
//! │  └─────────────────────────────────────────────────┘      │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The keyboard stands in for the hardware keyer: `.` dot, `-` dash,
//! space ends a character, Enter submits the sequence, Esc/q quits.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use morse_trainer::adapters::keying::{map_key, KeyAction};
use morse_trainer::adapters::log_sink::LogEventSink;
use morse_trainer::adapters::terminal::TerminalDisplay;
use morse_trainer::adapters::watchdog::InactivityWatchdog;
use morse_trainer::app::service::TrainerService;
use morse_trainer::config::GameConfig;
use morse_trainer::engine::Mode;
use morse_trainer::events::{InputEvent, InputQueue};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    env_logger::init();

    enable_raw_mode()?;
    let result = run();
    disable_raw_mode()?;
    result
}

fn run() -> Result<()> {
    let config = GameConfig::default();
    let idle_window = Duration::from_secs(u64::from(config.idle_reset_secs));

    let mut io = TerminalDisplay::new();
    let mut sink = LogEventSink::new();
    let mut rng = SmallRng::from_entropy();
    let mut queue = InputQueue::new();
    let mut watchdog = InactivityWatchdog::new(idle_window);

    let mut service = TrainerService::new(config);
    service.start(&mut io, &mut sink);

    loop {
        // ── 1. Collect keyboard edges ─────────────────────────
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(KeyAction::Quit) => break,
                    Some(KeyAction::Input(input)) => {
                        let _ = queue.push(input);
                    }
                    None => {}
                }
            }
        }

        // ── 2. Drive the core, one event to completion ────────
        queue.drain(|input| {
            service.handle_event(input, &mut io, &mut sink, &mut rng);
            if input == InputEvent::EndSequence {
                watchdog.feed(Instant::now());
            }
        });

        // ── 3. Supervise ──────────────────────────────────────
        match service.engine().mode() {
            Mode::Playing => {
                if !watchdog.is_armed() {
                    watchdog.arm(Instant::now());
                }
            }
            Mode::Menu => watchdog.disarm(),
        }
        if watchdog.tick(Instant::now()) {
            service.reset_session(&mut io, &mut sink);
        }
    }

    Ok(())
}
