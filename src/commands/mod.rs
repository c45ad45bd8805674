//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;

pub use score::{ScoreResult, score_words};
pub use simple::run_simple;
pub use simulate::{RoundOutcome, SimulationResult, play_round, run_simulation};
