//! Morse-code trainer library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! embedding. The core (decoder, quiz engine, service) performs no I/O;
//! the terminal front-end lives in [`adapters`] and the binary.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod decoder;
pub mod engine;
pub mod error;
pub mod events;
pub mod symbols;

pub mod adapters;
