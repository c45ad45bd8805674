//! Kelmat
//!
//! A word-guessing game: six tries to find a hidden English or Arabic word,
//! with an animated row reveal, an optional per-guess countdown, resumable
//! saves, lifetime statistics and local game codes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kelmat::config::RoundSettings;
//! use kelmat::core::Language;
//! use kelmat::engine::{GuessEngine, reveal_duration};
//! use kelmat::wordlists::WordLists;
//!
//! let lists = WordLists::resolve(Language::English, 5);
//! let settings = RoundSettings::default().matching(&lists);
//! let mut engine = GuessEngine::new(&lists, settings);
//!
//! engine.submit_guess("crane").unwrap();
//! for event in engine.advance(reveal_duration(5)) {
//!     println!("{event:?}");
//! }
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Persistence
pub mod storage;

// Round settings and preferences
pub mod config;

// Round state machine
pub mod engine;

// Per-guess countdown
pub mod countdown;

// Engine, countdown, statistics and storage wired together
pub mod session;

// Lifetime statistics
pub mod stats;

// Local game codes
pub mod lobby;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
