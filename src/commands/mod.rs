//! Command implementations

pub mod analyze;
pub mod score;
pub mod simple;

pub use analyze::{AnalysisConfig, AnalysisResult, run_analysis};
pub use score::{ScoreResult, score_codes};
pub use simple::run_simple;
