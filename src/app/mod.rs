//! Application core — pure game logic, zero I/O.
//!
//! This module ties the Morse decoder and the quiz engine together and
//! exposes them behind **port traits** defined in [`ports`], keeping
//! the whole game testable without a terminal, an LED, or a keyer.

pub mod events;
pub mod ports;
pub mod service;
