//! Keyboard keying adapter.
//!
//! Maps terminal key presses onto the input events the core consumes.
//! The keyboard plays the role edge-triggered timing logic plays on
//! hardware: `.` keys a dot, `-` keys a dash, space ends the character,
//! Enter ends the sequence.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::events::InputEvent;

/// What a key press asks the outer loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an input event to the game.
    Input(InputEvent),
    /// Leave the trainer.
    Quit,
}

/// Classify one key event. Returns `None` for releases and unbound keys.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyAction::Quit);
    }

    match key.code {
        KeyCode::Char('.') => Some(KeyAction::Input(InputEvent::Dot)),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(KeyAction::Input(InputEvent::Dash)),
        KeyCode::Char(' ') => Some(KeyAction::Input(InputEvent::EndCharacter)),
        KeyCode::Enter => Some(KeyAction::Input(InputEvent::EndSequence)),
        KeyCode::Esc | KeyCode::Char('q') => Some(KeyAction::Quit),
        _ => None,
    }
}
