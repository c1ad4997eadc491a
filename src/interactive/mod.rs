//! Interactive TUI interface
//!
//! Full-screen terminal front end built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Theme, run_tui};
