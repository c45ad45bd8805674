//! Display functions for command results

use super::formatters::{distribution_bar, letter_tile, plural_guesses};
use crate::commands::{ScoreResult, SimulationResult};
use crate::config::RoundSettings;
use crate::countdown::CountdownTimer;
use crate::core::Language;
use crate::engine::{GameStatus, GuessEngine, KeyboardState, MAX_ROWS};
use crate::lobby::GameConfig;
use crate::stats::Statistics;
use colored::Colorize;

/// Print every row up to the current one
pub fn print_board(engine: &GuessEngine<'_>) {
    let last = engine.current_row().min(MAX_ROWS - 1);

    println!();
    for row in &engine.board().rows()[..=last] {
        let tiles: Vec<String> = row
            .iter()
            .map(|cell| letter_tile(cell.letter, cell.visible_status()).to_string())
            .collect();
        println!("   {}", tiles.join(" "));
    }
    println!();
}

/// Print the keyboard with each key coloured by its best known status
pub fn print_keyboard(language: Language, keyboard: &KeyboardState) {
    for (indent, row) in language.keyboard_rows().iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|key| {
                letter_tile(Some(key), keyboard.status(language.normalize(key))).to_string()
            })
            .collect();
        println!("{}{}", "  ".repeat(indent + 1), keys.join(""));
    }
    println!();
}

pub fn print_timer(timer: &CountdownTimer) {
    let remaining = timer.formatted();
    let text = if timer.percentage_remaining() <= 25.0 {
        remaining.red().bold()
    } else {
        remaining.bright_cyan()
    };
    println!("   ⏱  {text}");
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    let tiles: Vec<String> = result
        .guess
        .letters()
        .iter()
        .zip(result.pattern.statuses())
        .map(|(&letter, &status)| letter_tile(Some(letter), status).to_string())
        .collect();

    println!(
        "\n{} vs {}",
        result.guess.display_text().bright_white().bold(),
        result.solution.display_text().bright_yellow().bold()
    );
    println!("   {}   {}", tiles.join(" "), result.pattern.to_emoji());
}

/// Print lifetime statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{}%", stats.win_percentage).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Best streak:     {}", stats.best_streak);
    println!("   Average time:    {}s", stats.average_time);

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0) as usize;
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = distribution_bar(count as usize, max, 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}

/// Print the outcome of a bot simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max = result.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in result.distribution.iter().enumerate() {
        let pct = if result.rounds > 0 {
            count as f64 / result.rounds as f64 * 100.0
        } else {
            0.0
        };
        let bar = distribution_bar(count, max, 40);
        println!("   {}: {} {count:4} ({pct:5.1}%)", i + 1, bar.green());
    }

    if !result.missed.is_empty() {
        println!("\n😰 {}", "Missed words".yellow().bold());
        for word in result.missed.iter().take(10) {
            println!("   {}", word.to_uppercase().yellow());
        }
    }
}

fn print_settings(settings: &RoundSettings) {
    println!("   Language:  {}", settings.language);
    println!("   Letters:   {}", settings.letter_length);
    if settings.timer_enabled {
        println!("   Timer:     {}s per guess", settings.timer_duration);
    } else {
        println!("   Timer:     off");
    }
}

pub fn print_game_created(code: &str, settings: &RoundSettings) {
    println!(
        "\n🎲 Game created! Share this code: {}",
        code.bright_yellow().bold()
    );
    print_settings(settings);
}

pub fn print_game_joined(code: &str, config: &GameConfig) {
    println!(
        "\n🤝 Joined {}'s game {}",
        config.host.bright_white().bold(),
        code.to_uppercase().bright_yellow().bold()
    );
    print_settings(&config.round_settings());
}

/// Announce the end of a round
pub fn print_round_over(engine: &GuessEngine<'_>, timed_out: bool) {
    match engine.status() {
        GameStatus::Won => {
            let guesses = engine.current_row() + 1;
            println!(
                "{}",
                format!("🎉 You won in {}!", plural_guesses(guesses))
                    .green()
                    .bold()
            );
        }
        GameStatus::Lost => {
            let headline = if timed_out {
                "⏰ Time's up! Game over."
            } else {
                "❌ Game over!"
            };
            println!("{}", headline.red().bold());
            println!(
                "   The word was {}",
                engine.solution().display_text().bright_yellow().bold()
            );
        }
        GameStatus::Playing => {}
    }
}
