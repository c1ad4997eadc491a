//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types and performs no I/O.
//! Pegs, codes, difficulty rules and guess scoring live here; everything is
//! pure and deterministic apart from `Code::random`, which draws from a
//! caller-supplied random source.

mod code;
mod difficulty;
mod feedback;

pub use code::{Code, Peg};
pub use difficulty::{Difficulty, Rules};
pub use feedback::Feedback;
