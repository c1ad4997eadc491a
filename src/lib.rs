//! Mastermind
//!
//! A code-breaking game: guess a hidden sequence of colored pegs within a
//! limited number of attempts, guided by exact/partial match feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::Difficulty;
//! use mastermind::game::{Game, GameState};
//!
//! let mut game = Game::with_seed(Difficulty::Easy, 42);
//! let secret = game.reveal_secret().ids();
//!
//! let outcome = game.submit_guess(&secret).unwrap();
//! assert_eq!(outcome.state, GameState::Won);
//! assert_eq!(game.statistics().best_score(), Some(1));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game lifecycle and statistics
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
