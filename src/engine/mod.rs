//! Single-player round state machine
//!
//! The engine validates and scores guesses, sequences the row reveal on a
//! virtual clock, aggregates keyboard feedback and detects the end of the
//! round. It knows nothing about storage or the countdown timer; the
//! [`Session`](crate::session::Session) wires those in.

mod board;
mod game;
mod keyboard;
mod schedule;
mod state;

pub use board::{Board, Cell, MAX_ROWS};
pub use game::{
    EngineEvent, GuessEngine, REVEAL_STEP, RejectReason, SETTLE_DELAY, SHAKE_DURATION,
    reveal_duration,
};
pub use keyboard::KeyboardState;
pub use schedule::Scheduler;
pub use state::{GameStatus, PersistError, SavedGameState};
