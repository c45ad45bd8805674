//! Line-mode play
//!
//! Plays rounds on plain stdin/stdout without the TUI. Each guess is typed as
//! a whole word; the reveal is settled at once and the board reprinted.

use crate::engine::{GameStatus, MAX_ROWS, reveal_duration};
use crate::output::display::{
    print_board, print_keyboard, print_round_over, print_statistics, print_timer,
};
use crate::session::{Session, SessionEvent};
use crate::storage::Store;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Run line-mode rounds until the player quits
///
/// # Errors
///
/// Returns an error if stdin or stdout fail, or the store cannot be written
/// when starting a new round.
pub fn run_simple<S: Store>(session: &mut Session<'_, S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Kelmat - Line Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let settings = *session.engine().settings();
    println!(
        "Guess the {}-letter {} word in {} tries.",
        settings.letter_length, settings.language, MAX_ROWS
    );
    println!("Commands: 'quit' to exit, 'new' for a new word, 'stats' for statistics\n");

    if session.has_saved_game() {
        let answer = get_user_input("Resume your saved game? (yes/no)")?;
        if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            if session.resume() {
                println!("↩  Game resumed");
            } else {
                println!("{}", "Saved game could not be restored".yellow());
            }
        } else {
            session.clear_saved_game().context("clearing saved game")?;
        }
    }

    session.start();
    let mut last = Instant::now();

    loop {
        print_board(session.engine());
        print_keyboard(settings.language, session.engine().keyboard());
        if session.timer_enabled() {
            print_timer(session.timer());
        }

        let input = get_user_input("Guess")?;

        // time spent typing counts against the countdown
        let timed_out = session
            .advance(last.elapsed())
            .contains(&SessionEvent::TimedOut);
        last = Instant::now();

        if timed_out {
            print_board(session.engine());
            print_round_over(session.engine(), true);
            if !play_again(session)? {
                break;
            }
            last = Instant::now();
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session.new_round().context("starting a new round")?;
                println!("\n🔄 New word chosen!");
                last = Instant::now();
                continue;
            }
            "stats" => {
                print_statistics(session.statistics());
                continue;
            }
            "" => continue,
            word => {
                if let Err(reason) = session.submit_word(word) {
                    println!("{}", format!("❌ {reason}").red());
                    continue;
                }
            }
        }

        let events = session.advance(reveal_duration(settings.letter_length));
        last = Instant::now();

        if session.status() != GameStatus::Playing {
            print_board(session.engine());
            let timed_out = events.contains(&SessionEvent::TimedOut);
            print_round_over(session.engine(), timed_out);
            if !play_again(session)? {
                break;
            }
            last = Instant::now();
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Offer another round; `false` means the player is done
fn play_again<S: Store>(session: &mut Session<'_, S>) -> Result<bool> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            session.new_round().context("starting a new round")?;
            println!("\n🔄 New game started!");
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
