//! Pursuit engine library.
//!
//! Exposes the graph board, scoring, strategies, protocol and game driver
//! for use by the binaries, integration tests and benchmarks.

pub mod board;
pub mod eval;
pub mod game;
pub mod logging;
pub mod protocol;
pub mod selfplay;
pub mod strategy;
