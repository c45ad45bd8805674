//! Kelmat - CLI
//!
//! Word-guessing game with a TUI, a line mode, local game codes and a bot
//! simulation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use kelmat::{
    commands::{run_simple, run_simulation, score_words},
    config::{DEFAULT_LENGTH, Preferences, RoundSettings},
    core::Language,
    engine::GuessEngine,
    interactive::{App, run_tui},
    lobby::{self, create_game, join_game},
    logging,
    output::{
        print_game_created, print_game_joined, print_score_result, print_simulation_result,
        print_statistics,
    },
    session::Session,
    stats::Statistics,
    storage::FileStore,
    wordlists::WordLists,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kelmat",
    about = "Guess the hidden word in six tries, in English or Arabic",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding saved games, statistics and preferences
    #[arg(long, global = true, env = "KELMAT_DATA_DIR", default_value = ".kelmat")]
    data_dir: PathBuf,

    /// Round language: english or arabic
    #[arg(short, long, global = true)]
    language: Option<Language>,

    /// Letters per word (3-6, depending on the language)
    #[arg(long, global = true)]
    length: Option<usize>,

    /// Enable (true) or disable (false) the per-guess countdown
    #[arg(long, global = true)]
    timer: Option<bool>,

    /// Seconds allowed per guess
    #[arg(long, global = true)]
    time_limit: Option<u32>,

    /// Log debug events
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-mode play without the TUI
    Simple,

    /// Create a game code from the current options
    Create {
        #[arg(short, long)]
        username: String,
    },

    /// Join a game by its code
    Join {
        code: String,

        #[arg(short, long)]
        username: String,
    },

    /// Score a guess against a solution
    Score { guess: String, solution: String },

    /// Show lifetime statistics
    Stats {
        /// Reset all statistics
        #[arg(long)]
        clear: bool,
    },

    /// Play many rounds with a bot
    Simulate {
        /// Number of rounds
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Seed for reproducible rounds
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Round settings: preferences, then the joined game, then command-line options
    fn round_settings(&self, preferences: &Preferences, store: &FileStore) -> RoundSettings {
        let mut settings = preferences.round_settings(Language::default(), DEFAULT_LENGTH);
        if let Some(config) = lobby::current_game_config(store)
            && !config.is_expired(lobby::now_millis())
        {
            settings = config.round_settings();
        }

        if let Some(language) = self.language {
            settings.language = language;
        }
        if let Some(length) = self.length {
            settings.letter_length = length;
        }
        if let Some(timer) = self.timer {
            settings.timer_enabled = timer;
        }
        if let Some(limit) = self.time_limit {
            settings.timer_duration = limit;
        }
        settings
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    let store = FileStore::open(&cli.data_dir)
        .with_context(|| format!("opening data directory {}", cli.data_dir.display()))?;

    // the TUI owns the terminal, so it logs to a file
    let log_file =
        matches!(command, Commands::Play).then(|| cli.data_dir.join(logging::LOG_FILE));
    logging::init(cli.verbose, log_file.as_deref())?;

    match command {
        Commands::Play => run_play_command(&cli, store),
        Commands::Simple => run_simple_command(&cli, store),
        Commands::Create { ref username } => run_create_command(&cli, store, username),
        Commands::Join {
            ref code,
            ref username,
        } => run_join_command(store, code, username),
        Commands::Score {
            ref guess,
            ref solution,
        } => run_score_command(&cli, guess, solution),
        Commands::Stats { clear } => run_stats_command(store, clear),
        Commands::Simulate { rounds, seed } => {
            run_simulate_command(&cli, rounds, seed);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli, store: FileStore) -> Result<()> {
    let preferences = Preferences::load(&store);
    let settings = cli.round_settings(&preferences, &store);
    let lists = WordLists::resolve(settings.language, settings.letter_length);
    let settings = settings.matching(&lists);
    tracing::info!(?settings, "starting tui");

    let session = Session::new(GuessEngine::new(&lists, settings), preferences, store);
    run_tui(App::new(session))
}

fn run_simple_command(cli: &Cli, store: FileStore) -> Result<()> {
    let preferences = Preferences::load(&store);
    let settings = cli.round_settings(&preferences, &store);
    let lists = WordLists::resolve(settings.language, settings.letter_length);
    let settings = settings.matching(&lists);

    let mut session = Session::new(GuessEngine::new(&lists, settings), preferences, store);
    run_simple(&mut session)
}

fn run_create_command(cli: &Cli, mut store: FileStore, username: &str) -> Result<()> {
    let preferences = Preferences::load(&store);
    let settings = cli.round_settings(&preferences, &store);
    let lists = WordLists::resolve(settings.language, settings.letter_length);
    let settings = settings.matching(&lists);

    let code = create_game(
        &mut store,
        username,
        settings,
        &mut rand::rng(),
        lobby::now_millis(),
    )
    .context("creating game")?;
    print_game_created(&code, &settings);
    Ok(())
}

fn run_join_command(mut store: FileStore, code: &str, username: &str) -> Result<()> {
    let config = join_game(&mut store, username, code, lobby::now_millis())
        .with_context(|| format!("joining game {code}"))?;
    print_game_joined(code, &config);
    Ok(())
}

fn run_score_command(cli: &Cli, guess: &str, solution: &str) -> Result<()> {
    let language = cli.language.unwrap_or_default();
    let result = score_words(guess, solution, language).context("scoring words")?;
    print_score_result(&result);
    Ok(())
}

fn run_stats_command(mut store: FileStore, clear: bool) -> Result<()> {
    let mut stats = Statistics::load(&store);
    if clear {
        stats.clear();
        stats.save(&mut store).context("saving statistics")?;
        println!("{}", "Statistics cleared".green());
        return Ok(());
    }

    print_statistics(&stats);
    Ok(())
}

fn run_simulate_command(cli: &Cli, rounds: usize, seed: Option<u64>) {
    let language = cli.language.unwrap_or_default();
    let length = cli.length.unwrap_or(DEFAULT_LENGTH);
    let lists = WordLists::resolve(language, length);
    let seed = seed.unwrap_or_else(rand::random);

    println!(
        "Simulating {rounds} rounds of {}-letter {} (seed {seed})...",
        lists.length(),
        lists.language()
    );
    let result = run_simulation(&lists, rounds, seed, true);
    print_simulation_result(&result);
}
