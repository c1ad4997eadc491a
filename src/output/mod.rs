//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod palette;

pub use display::{print_analysis_result, print_score_result, print_statistics};
