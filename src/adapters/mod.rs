//! Adapters — concrete implementations on the outer side of the ports.
//!
//! The terminal display and keyboard keyer stand in for the UART
//! console and GPIO paddle of a hardware build; the watchdog is the
//! host analog of a hardware reset timer.

pub mod keying;
pub mod log_sink;
pub mod terminal;
pub mod watchdog;
