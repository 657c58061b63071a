//! Integration test driver for `tests/integration/`.
//!
//! Each `mod` below maps to a file that exercises the trainer against
//! mock port adapters. Everything runs without a terminal.

mod mock_io;
mod trainer_flow_tests;
