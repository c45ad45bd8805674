//! Interactive TUI interface

pub mod app;
mod rendering;

pub use app::{App, InputMode, MESSAGE_LIFETIME, Message, MessageStyle, run_tui};
