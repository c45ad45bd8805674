//! Bot simulation over many rounds
//!
//! Each round runs its own engine with a seeded generator. The bot guesses a
//! random word still consistent with every pattern it has seen, so it only
//! exercises the engine and never uses the solution directly.

use crate::config::RoundSettings;
use crate::core::{Pattern, Word};
use crate::engine::{EngineEvent, GameStatus, GuessEngine, MAX_ROWS, reveal_duration};
use crate::wordlists::WordLists;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of one simulated round
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub solution: String,
    pub guesses: Vec<String>,
    pub won: bool,
}

#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub wins: usize,
    /// Wins by guess count, index 0 for one guess
    pub distribution: [usize; MAX_ROWS],
    pub average_guesses: f64,
    pub duration: Duration,
    /// Lost rounds' solutions
    pub missed: Vec<String>,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64 * 100.0
    }
}

/// Play one round with the consistent-candidate bot
#[must_use]
pub fn play_round(lists: &WordLists, seed: u64) -> RoundOutcome {
    let settings = RoundSettings {
        language: lists.language(),
        letter_length: lists.length(),
        ..RoundSettings::default()
    };
    let mut engine = GuessEngine::with_rng(lists, settings, StdRng::seed_from_u64(seed));
    let mut bot_rng = StdRng::seed_from_u64(seed.rotate_left(17));
    let settle = reveal_duration(lists.length());

    let mut candidates: Vec<&Word> = lists.answers().iter().collect();
    let mut guesses = Vec::new();

    while engine.status() == GameStatus::Playing {
        let Some(&guess) = candidates.choose(&mut bot_rng) else {
            break;
        };
        if let Err(reason) = engine.submit_guess(guess.text()) {
            tracing::warn!(guess = guess.text(), %reason, "bot guess refused");
            break;
        }
        guesses.push(guess.text().to_string());

        for event in engine.advance(settle) {
            if let EngineEvent::RowSettled { pattern, .. } = event {
                candidates.retain(|candidate| Pattern::calculate(guess, candidate) == pattern);
            }
        }
    }

    RoundOutcome {
        solution: engine.solution().text().to_string(),
        guesses,
        won: engine.status() == GameStatus::Won,
    }
}

/// Play `rounds` rounds in parallel, seeding round `i` with `seed + i`
#[must_use]
pub fn run_simulation(
    lists: &WordLists,
    rounds: usize,
    seed: u64,
    show_progress: bool,
) -> SimulationResult {
    let pb = if show_progress {
        ProgressBar::new(rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes: Vec<RoundOutcome> = (0..rounds)
        .into_par_iter()
        .map(|i| {
            let outcome = play_round(lists, seed.wrapping_add(i as u64));
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut distribution = [0; MAX_ROWS];
    let mut missed = Vec::new();
    for outcome in &outcomes {
        if outcome.won {
            if let Some(slot) = outcome
                .guesses
                .len()
                .checked_sub(1)
                .and_then(|i| distribution.get_mut(i))
            {
                *slot += 1;
            }
        } else {
            missed.push(outcome.solution.clone());
        }
    }

    let wins: usize = distribution.iter().sum();
    let total_guesses: usize = outcomes
        .iter()
        .filter(|o| o.won)
        .map(|o| o.guesses.len())
        .sum();
    let average_guesses = if wins > 0 {
        total_guesses as f64 / wins as f64
    } else {
        0.0
    };

    tracing::debug!(rounds, wins, "simulation finished");

    SimulationResult {
        rounds,
        wins,
        distribution,
        average_guesses,
        duration: start.elapsed(),
        missed,
    }
}
