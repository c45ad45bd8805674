//! Terminal output formatting
//!
//! Coloured tiles, boards and result summaries for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_game_created, print_game_joined, print_keyboard, print_round_over,
    print_score_result, print_simulation_result, print_statistics, print_timer,
};
