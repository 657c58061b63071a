//! Terminal display adapter.
//!
//! Renders the game's screens as a scrolling console, like a serial
//! log. The terminal runs in raw mode (the keyer needs unbuffered
//! keys), so every line ends with an explicit `\r\n`.
//!
//! The status LED becomes a coloured dot: off in the menu, then
//! green/blue/orange/red for 3/2/1/0 lives.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use log::warn;

use crate::app::ports::{DisplayPort, IndicatorPort, PromptCard, PromptText};
use crate::decoder::MorseSymbol;
use crate::engine::context::SessionOutcome;
use crate::engine::{Level, Mode};
use crate::error::MenuError;
use crate::symbols;

// ───────────────────────────────────────────────────────────────
// Indicator palette
// ───────────────────────────────────────────────────────────────

/// Half-intensity palette, as on the hardware LED.
pub const COLOUR_FULL_LIVES: (u8, u8, u8) = (0x00, 0x7F, 0x00); // green
pub const COLOUR_TWO_LIVES: (u8, u8, u8) = (0x00, 0x00, 0x7F); // blue
pub const COLOUR_ONE_LIFE: (u8, u8, u8) = (0x7F, 0x52, 0x00); // orange
pub const COLOUR_NO_LIVES: (u8, u8, u8) = (0x7F, 0x00, 0x00); // red
pub const COLOUR_OFF: (u8, u8, u8) = (0x00, 0x00, 0x00);

/// Map the lives/mode pair onto the fixed four-entry palette.
pub const fn indicator_colour(lives: u8, mode: Mode) -> (u8, u8, u8) {
    match mode {
        Mode::Menu => COLOUR_OFF,
        Mode::Playing => match lives {
            3 => COLOUR_FULL_LIVES,
            2 => COLOUR_TWO_LIVES,
            1 => COLOUR_ONE_LIFE,
            _ => COLOUR_NO_LIVES,
        },
    }
}

// ───────────────────────────────────────────────────────────────
// TerminalDisplay
// ───────────────────────────────────────────────────────────────

pub struct TerminalDisplay {
    out: io::Stdout,
    /// True when the cursor sits at the start of a fresh line, so the
    /// first echoed symbol of an answer gets its `> ` prefix.
    at_line_start: bool,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            at_line_start: true,
        }
    }

    // ── Low-level output ──────────────────────────────────────

    fn put(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            warn!("terminal write failed: {e}");
        }
    }

    fn line(&mut self, text: &str) {
        self.put(text);
        self.put("\r\n");
        self.at_line_start = true;
    }

    fn banner(&mut self, colour: Color, text: &str) {
        let res = queue!(
            self.out,
            SetForegroundColor(colour),
            Print(text),
            ResetColor,
            Print("\r\n"),
        );
        if let Err(e) = res {
            warn!("terminal write failed: {e}");
        }
        self.at_line_start = true;
    }

    fn upper_edge(&mut self) {
        self.line("");
        self.line("\u{2591}");
        self.line("\u{2592}\u{2591}");
        self.line("\u{2593}\u{2592}\u{2591}");
    }

    fn lower_edge(&mut self) {
        self.line("\u{2593}\u{2592}\u{2591}");
        self.line("\u{2592}\u{2591}");
        self.line("\u{2591}");
        self.line("");
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!("terminal flush failed: {e}");
        }
    }

    // ── Screen fragments ──────────────────────────────────────

    fn menu_body(&mut self, completed: &[bool; Level::COUNT]) {
        self.line("KEY A SEQUENCE TO BEGIN ('.' dot, '-' dash, space, Enter)");
        let entries = [
            ("LEVEL 01 - CHARS (EASY)", completed[0]),
            ("LEVEL 02 - CHARS (HARD)", completed[1]),
            ("LEVEL 03 - WORDS (EASY)", completed[2]),
            ("LEVEL 04 - WORDS (HARD)", completed[3]),
        ];
        for (i, (label, done)) in entries.iter().enumerate() {
            let digit = char::from(b'1' + i as u8);
            let code = symbols::encode(digit).unwrap_or("");
            let marker = if *done { " (Completed)" } else { "" };
            self.line(&format!("\"{code}\" - {label}{marker}"));
        }
    }

    fn rules(&mut self) {
        self.line("The rules are as follows:");
        self.line("1. Enter the character displayed in morse");
        self.line("2. If you get it correct you gain a life");
        self.line("3. Otherwise you lose a life. The dot shows how many lives you have");
        self.line("4. If you take longer than 9 seconds to answer the game will reset");
        self.line("5. If you lose all 3 lives the game will end");
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

// ───────────────────────────────────────────────────────────────
// DisplayPort
// ───────────────────────────────────────────────────────────────

impl DisplayPort for TerminalDisplay {
    fn show_welcome(&mut self, completed: &[bool; Level::COUNT]) {
        self.banner(Color::Green, "==== MORSE CODE ====");
        self.upper_edge();
        self.menu_body(completed);
        self.rules();
        self.lower_edge();
        self.flush();
    }

    fn show_menu(&mut self, completed: &[bool; Level::COUNT]) {
        self.upper_edge();
        self.menu_body(completed);
        self.lower_edge();
        self.flush();
    }

    fn show_menu_error(&mut self, error: MenuError) {
        self.line(&error.to_string());
        self.line("");
        self.flush();
    }

    fn show_level_intro(&mut self, level: Level) {
        self.line(&format!("LEVEL-{:02}", level.number()));
        self.flush();
    }

    fn show_prompt(&mut self, card: &PromptCard) {
        self.upper_edge();
        self.line(&format!(
            "So far: {} correct sequences in a row ({} needed to win this level).",
            card.streak, card.streak_target,
        ));
        self.line(&format!("You have {} lives remaining.", card.lives));
        let (unit, target) = match card.target {
            PromptText::Character(c) => ("character", c.to_string()),
            PromptText::Word(w) => ("word", w.to_string()),
        };
        match &card.code {
            Some(code) => self.line(&format!(
                "Your {unit} is '{target}' and its morse code is '{code}'"
            )),
            None => self.line(&format!("Your {unit} is '{target}'.")),
        }
        self.lower_edge();
        self.flush();
    }

    fn show_feedback(&mut self, passed: bool, lives: u8) {
        if passed {
            self.banner(Color::Green, "==== CORRECT ====");
        } else {
            self.banner(Color::Red, "==== INCORRECT ====");
            let unit = if lives == 1 { "life" } else { "lives" };
            self.line(&format!("You have {lives} {unit} remaining."));
        }
        self.flush();
    }

    fn show_outcome(&mut self, outcome: SessionOutcome) {
        match outcome {
            SessionOutcome::LevelComplete(level) => {
                self.banner(
                    Color::Cyan,
                    &format!("==== LEVEL {:02} COMPLETE ====", level.number()),
                );
            }
            SessionOutcome::GameWon => self.banner(Color::Green, "==== YOU WON ===="),
            SessionOutcome::GameOver => self.banner(Color::Red, "==== GAME OVER ===="),
        }
        self.flush();
    }

    fn show_stats(&mut self, correct: u32, incorrect: u32, accuracy_percent: f32) {
        self.line(&format!(
            "This level you had {correct} correct answers and {incorrect} incorrect answers."
        ));
        self.line(&format!(
            "Your overall accuracy was {accuracy_percent:.1}% this level."
        ));
        self.flush();
    }

    fn echo_symbol(&mut self, symbol: MorseSymbol) {
        if self.at_line_start {
            self.put("> ");
            self.at_line_start = false;
        }
        let mut buf = [0u8; 4];
        self.put(symbol.glyph().encode_utf8(&mut buf));
        self.flush();
    }

    fn echo_gap(&mut self) {
        self.at_line_start = false;
        self.put(" ");
        self.flush();
    }

    fn echo_submission(&mut self, answer: &str) {
        self.put(":= ");
        self.line(answer);
        self.flush();
    }
}

// ───────────────────────────────────────────────────────────────
// IndicatorPort
// ───────────────────────────────────────────────────────────────

impl IndicatorPort for TerminalDisplay {
    fn set_indicator(&mut self, lives: u8, mode: Mode) {
        let (r, g, b) = indicator_colour(lives, mode);
        if (r, g, b) == COLOUR_OFF {
            self.line("\u{25cb}");
        } else {
            let res = queue!(
                self.out,
                SetForegroundColor(Color::Rgb { r, g, b }),
                Print("\u{25cf}"),
                ResetColor,
                Print("\r\n"),
            );
            if let Err(e) = res {
                warn!("terminal write failed: {e}");
            }
            self.at_line_start = true;
        }
        self.flush();
    }
}
