//! Guess engine: validation, scoring, timed reveal and win/lose detection

use super::board::{Board, MAX_ROWS};
use super::keyboard::KeyboardState;
use super::schedule::Scheduler;
use super::state::{GameStatus, SavedGameState};
use crate::config::RoundSettings;
use crate::core::{LetterStatus, Pattern, Word};
use crate::wordlists::WordLists;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use thiserror::Error;

/// Delay between two cells of a row being revealed
pub const REVEAL_STEP: Duration = Duration::from_millis(400);

/// Delay between the last cell reveal and the row settling
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(1500);

/// Time from submission until a row of `length` letters settles
#[must_use]
pub fn reveal_duration(length: usize) -> Duration {
    REVEAL_STEP * u32::try_from(length).unwrap_or(u32::MAX) + SETTLE_DELAY
}

/// Why a submission was refused; nothing on the board changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("Game is not active")]
    NotActive,
    #[error("Word must be {expected} letters")]
    LengthMismatch { expected: usize },
    #[error("Not a valid word")]
    InvalidWord,
}

/// Observable effect of advancing virtual time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CellRevealed {
        row: usize,
        column: usize,
        status: LetterStatus,
    },
    RowSettled {
        row: usize,
        pattern: Pattern,
    },
    Won {
        guesses: usize,
    },
    Lost,
    ShakeCleared {
        row: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scheduled {
    Reveal { epoch: u64, row: usize, column: usize },
    Settle { epoch: u64 },
    Unshake { epoch: u64, shake: u64 },
}

impl Scheduled {
    const fn epoch(self) -> u64 {
        match self {
            Self::Reveal { epoch, .. } | Self::Settle { epoch } | Self::Unshake { epoch, .. } => {
                epoch
            }
        }
    }
}

/// A guess that has been scored and is being revealed
#[derive(Debug, Clone)]
struct InFlight {
    row: usize,
    guess: Word,
    pattern: Pattern,
}

/// State machine for one round
///
/// The engine never reads a clock. Time only moves when the owner calls
/// [`GuessEngine::advance`], which fires the reveal events that became due.
pub struct GuessEngine<'a> {
    lists: &'a WordLists,
    settings: RoundSettings,
    solution: Word,
    board: Board,
    keyboard: KeyboardState,
    current_row: usize,
    current_guess: Vec<char>,
    status: GameStatus,
    animating: bool,
    shake_row: Option<usize>,
    shake_seq: u64,
    epoch: u64,
    in_flight: Option<InFlight>,
    scheduler: Scheduler<Scheduled>,
    rng: StdRng,
}

impl<'a> GuessEngine<'a> {
    /// Start a round with a random solution
    #[must_use]
    pub fn new(lists: &'a WordLists, settings: RoundSettings) -> Self {
        Self::with_rng(lists, settings, StdRng::from_os_rng())
    }

    /// Start a round drawing solutions from the given generator
    #[must_use]
    pub fn with_rng(lists: &'a WordLists, settings: RoundSettings, mut rng: StdRng) -> Self {
        let solution = lists.random_answer(&mut rng).clone();
        Self::build(lists, settings, solution, rng)
    }

    /// Start a round with a known solution
    #[must_use]
    pub fn with_solution(lists: &'a WordLists, settings: RoundSettings, solution: Word) -> Self {
        Self::build(lists, settings, solution, StdRng::from_os_rng())
    }

    fn build(lists: &'a WordLists, settings: RoundSettings, solution: Word, rng: StdRng) -> Self {
        let settings = settings.matching(lists);
        tracing::debug!(
            language = %settings.language,
            length = settings.letter_length,
            timer = settings.timer_enabled,
            "round started"
        );

        Self {
            lists,
            settings,
            solution,
            board: Board::new(settings.letter_length),
            keyboard: KeyboardState::default(),
            current_row: 0,
            current_guess: Vec::new(),
            status: GameStatus::Playing,
            animating: false,
            shake_row: None,
            shake_seq: 0,
            epoch: 0,
            in_flight: None,
            scheduler: Scheduler::default(),
            rng,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &RoundSettings {
        &self.settings
    }

    #[must_use]
    pub const fn lists(&self) -> &'a WordLists {
        self.lists
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// Letters typed into the current row so far
    #[must_use]
    pub fn current_guess(&self) -> String {
        self.current_guess.iter().collect()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    /// Row currently flagged as rejected, if any
    #[must_use]
    pub const fn shake_row(&self) -> Option<usize> {
        self.shake_row
    }

    /// Time until the next scheduled reveal event
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    const fn accepts_input(&self) -> bool {
        matches!(self.status, GameStatus::Playing) && !self.animating
    }

    /// Append a letter to the working guess
    ///
    /// Returns `false` (and changes nothing) if input is blocked, the letter
    /// is outside the round's alphabet or the row is already full.
    pub fn type_letter(&mut self, letter: char) -> bool {
        let language = self.settings.language;
        let letter = language.normalize(letter);
        if !self.accepts_input()
            || !language.accepts(letter)
            || self.current_guess.len() >= self.settings.letter_length
        {
            return false;
        }

        self.current_guess.push(letter);
        self.board
            .write_letters(self.current_row, &self.current_guess);
        true
    }

    /// Remove the last letter of the working guess
    pub fn backspace(&mut self) -> bool {
        if !self.accepts_input() || self.current_guess.pop().is_none() {
            return false;
        }
        self.board
            .write_letters(self.current_row, &self.current_guess);
        true
    }

    /// Submit the working guess
    ///
    /// # Errors
    /// See [`GuessEngine::submit_guess`].
    pub fn submit_current(&mut self) -> Result<(), RejectReason> {
        let candidate = self.current_guess();
        self.submit_guess(&candidate)
    }

    /// Validate, score and start revealing a guess
    ///
    /// # Errors
    ///
    /// - `NotActive` if the round is over or a row is still being revealed
    /// - `LengthMismatch` if the guess does not have the round's letter count
    /// - `InvalidWord` if the guess is not an accepted word; the current row
    ///   shakes for [`SHAKE_DURATION`]
    pub fn submit_guess(&mut self, candidate: &str) -> Result<(), RejectReason> {
        if !self.accepts_input() {
            return Err(RejectReason::NotActive);
        }

        let expected = self.settings.letter_length;
        if candidate.trim().chars().count() != expected {
            return Err(RejectReason::LengthMismatch { expected });
        }

        let guess = match Word::new(candidate, self.settings.language) {
            Ok(word) if self.lists.is_accepted(&word) => word,
            _ => {
                tracing::debug!(guess = candidate, row = self.current_row, "guess rejected");
                self.start_shake();
                return Err(RejectReason::InvalidWord);
            }
        };

        let row = self.current_row;
        let pattern = Pattern::calculate(&guess, &self.solution);
        tracing::debug!(guess = guess.text(), row, %pattern, "guess accepted");

        self.current_guess = guess.letters().to_vec();
        self.board.write_letters(row, &self.current_guess);
        self.board.stage(row, &pattern);
        self.animating = true;

        for column in 0..expected {
            self.scheduler.schedule_in(
                REVEAL_STEP * u32::try_from(column).unwrap_or(u32::MAX),
                Scheduled::Reveal {
                    epoch: self.epoch,
                    row,
                    column,
                },
            );
        }
        let last = u32::try_from(expected.saturating_sub(1)).unwrap_or(u32::MAX);
        self.scheduler
            .schedule_in(REVEAL_STEP * last + SETTLE_DELAY, Scheduled::Settle { epoch: self.epoch });

        self.in_flight = Some(InFlight { row, guess, pattern });
        Ok(())
    }

    fn start_shake(&mut self) {
        self.shake_seq += 1;
        self.shake_row = Some(self.current_row);
        self.scheduler.schedule_in(
            SHAKE_DURATION,
            Scheduled::Unshake {
                epoch: self.epoch,
                shake: self.shake_seq,
            },
        );
    }

    /// Move virtual time forward and apply every reveal event now due
    pub fn advance(&mut self, elapsed: Duration) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        for scheduled in self.scheduler.advance(elapsed) {
            if scheduled.epoch() != self.epoch {
                continue;
            }
            match scheduled {
                Scheduled::Reveal { row, column, .. } => {
                    self.board.reveal(row, column);
                    events.push(EngineEvent::CellRevealed {
                        row,
                        column,
                        status: self.board.row(row)[column].visible_status(),
                    });
                }
                Scheduled::Settle { .. } => self.settle(&mut events),
                Scheduled::Unshake { shake, .. } => {
                    if shake == self.shake_seq
                        && let Some(row) = self.shake_row.take()
                    {
                        events.push(EngineEvent::ShakeCleared { row });
                    }
                }
            }
        }
        events
    }

    fn settle(&mut self, events: &mut Vec<EngineEvent>) {
        let Some(InFlight { row, guess, pattern }) = self.in_flight.take() else {
            return;
        };

        self.board.commit(row);
        self.keyboard.merge(guess.letters(), &pattern);
        self.animating = false;
        let solved = pattern.is_perfect();
        events.push(EngineEvent::RowSettled { row, pattern });

        if solved {
            self.status = GameStatus::Won;
            tracing::info!(guesses = row + 1, solution = self.solution.text(), "round won");
            events.push(EngineEvent::Won { guesses: row + 1 });
        } else if row == MAX_ROWS - 1 {
            self.status = GameStatus::Lost;
            tracing::info!(solution = self.solution.text(), "round lost");
            events.push(EngineEvent::Lost);
        } else {
            self.current_row = row + 1;
            self.current_guess.clear();
        }
    }

    fn cancel_pending(&mut self) {
        self.epoch += 1;
        self.scheduler.clear();
        self.in_flight = None;
        self.animating = false;
        self.shake_row = None;
    }

    /// Lose the round because time ran out
    ///
    /// Returns whether the round was still playing.
    pub fn force_timeout(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.cancel_pending();
        self.status = GameStatus::Lost;
        tracing::info!(
            solution = self.solution.text(),
            row = self.current_row,
            "round lost on timeout"
        );
        true
    }

    /// Clear the board for another round, optionally with a fresh solution
    pub fn reset_round(&mut self, new_word: bool) {
        self.cancel_pending();
        self.board = Board::new(self.settings.letter_length);
        self.keyboard.clear();
        self.current_row = 0;
        self.current_guess.clear();
        self.status = GameStatus::Playing;
        if new_word {
            self.solution = self.lists.random_answer(&mut self.rng).clone();
        }
        tracing::debug!(new_word, "round reset");
    }

    #[must_use]
    pub fn save_state(&self) -> SavedGameState {
        SavedGameState {
            board: self.board.clone(),
            keyboard: self.keyboard.clone(),
            current_row: self.current_row,
            current_guess: self.current_guess(),
            status: self.status,
            solution: self.solution.text().to_string(),
            settings: self.settings,
        }
    }

    /// Replace the round with a saved snapshot
    ///
    /// Returns `false` (leaving the engine untouched) for finished rounds,
    /// for snapshots taken with a different language or letter length, and
    /// for snapshots that fail [`SavedGameState::decode`]'s checks.
    pub fn restore(&mut self, state: SavedGameState) -> bool {
        let language = self.lists.language();
        if state.status.is_terminal()
            || state.settings.language != language
            || state.settings.letter_length != self.lists.length()
        {
            tracing::warn!(status = ?state.status, "saved game does not fit this round");
            return false;
        }

        let Ok(solution) = Word::new(&state.solution, language) else {
            tracing::warn!("saved solution is not a valid word");
            return false;
        };
        if let Err(err) = state.validate() {
            tracing::warn!(%err, "saved game is inconsistent");
            return false;
        }
        let guess: Vec<char> = state.current_guess.chars().collect();
        if guess.iter().any(|&c| !language.accepts(c)) {
            tracing::warn!("saved working guess has foreign letters");
            return false;
        }

        self.cancel_pending();
        self.settings = state.settings;
        self.solution = solution;
        self.board = state.board;
        self.keyboard = state.keyboard;
        self.current_row = state.current_row;
        self.current_guess = guess;
        self.status = GameStatus::Playing;
        self.board.clear_transient(self.current_row);
        self.board.write_letters(self.current_row, &self.current_guess);
        tracing::debug!(row = self.current_row, "saved game restored");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;
    use LetterStatus::{Absent, Correct, Present};

    const SETTLE: Duration = Duration::from_secs(5);

    fn lists() -> WordLists {
        WordLists::resolve(Language::English, 5)
    }

    fn engine<'a>(lists: &'a WordLists, solution: &str) -> GuessEngine<'a> {
        let solution = Word::new(solution, Language::English).unwrap();
        GuessEngine::with_solution(lists, RoundSettings::default(), solution)
    }

    fn play(engine: &mut GuessEngine<'_>, guess: &str) -> Vec<EngineEvent> {
        engine.submit_guess(guess).unwrap();
        engine.advance(SETTLE)
    }

    #[test]
    fn crane_against_trace() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        let events = play(&mut engine, "crane");

        let expected = Pattern::from_statuses(vec![Present, Correct, Correct, Absent, Correct]);
        assert!(events.contains(&EngineEvent::RowSettled {
            row: 0,
            pattern: expected,
        }));
        assert_eq!(engine.current_row(), 1);
        assert_eq!(engine.current_guess(), "");
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.keyboard().status('r'), Correct);
        assert_eq!(engine.keyboard().status('a'), Correct);
        assert_eq!(engine.keyboard().status('c'), Present);
        assert_eq!(engine.keyboard().status('n'), Absent);
    }

    #[test]
    fn trace_against_crane() {
        let lists = lists();
        let mut engine = engine(&lists, "crane");
        let events = play(&mut engine, "trace");

        let expected = Pattern::from_statuses(vec![Absent, Correct, Correct, Present, Correct]);
        assert!(events.contains(&EngineEvent::RowSettled {
            row: 0,
            pattern: expected,
        }));
        assert_eq!(engine.keyboard().status('t'), Absent);
        assert_eq!(engine.keyboard().status('c'), Present);
    }

    #[test]
    fn reveal_follows_cell_timing() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        engine.submit_guess("crane").unwrap();
        assert!(engine.is_animating());

        let first = engine.advance(Duration::ZERO);
        assert_eq!(
            first,
            vec![EngineEvent::CellRevealed {
                row: 0,
                column: 0,
                status: Present,
            }]
        );

        assert!(engine.advance(Duration::from_millis(399)).is_empty());
        assert_eq!(engine.advance(Duration::from_millis(1)).len(), 1);

        // cells 2..=4 at 800, 1200, 1600
        assert_eq!(engine.advance(Duration::from_millis(1200)).len(), 3);
        assert!(engine.is_animating());
        assert_eq!(engine.board().row(0)[4].status, LetterStatus::Unset);

        assert!(engine.advance(Duration::from_millis(299)).is_empty());
        let settled = engine.advance(Duration::from_millis(1));
        assert!(matches!(settled[0], EngineEvent::RowSettled { row: 0, .. }));
        assert!(!engine.is_animating());
        assert_eq!(engine.board().row(0)[4].status, Correct);
    }

    #[test]
    fn input_blocked_while_animating() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        engine.submit_guess("crane").unwrap();

        assert_eq!(engine.submit_guess("slate"), Err(RejectReason::NotActive));
        assert!(!engine.type_letter('a'));
        assert!(!engine.backspace());

        engine.advance(SETTLE);
        assert!(engine.type_letter('a'));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        assert_eq!(
            engine.submit_guess("cran"),
            Err(RejectReason::LengthMismatch { expected: 5 })
        );
        assert_eq!(engine.shake_row(), None);
        assert_eq!(
            RejectReason::LengthMismatch { expected: 5 }.to_string(),
            "Word must be 5 letters"
        );
    }

    #[test]
    fn unknown_word_shakes_row() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        assert_eq!(engine.submit_guess("xqzvj"), Err(RejectReason::InvalidWord));
        assert_eq!(engine.shake_row(), Some(0));
        assert!(!engine.is_animating());
        assert_eq!(engine.current_row(), 0);

        assert!(engine.advance(Duration::from_millis(1499)).is_empty());
        assert_eq!(
            engine.advance(Duration::from_millis(1)),
            vec![EngineEvent::ShakeCleared { row: 0 }]
        );
        assert_eq!(engine.shake_row(), None);
    }

    #[test]
    fn second_rejection_extends_shake() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        engine.submit_guess("xqzvj").unwrap_err();
        engine.advance(Duration::from_millis(1000));
        engine.submit_guess("qqqqq").unwrap_err();

        assert!(engine.advance(Duration::from_millis(600)).is_empty());
        assert_eq!(engine.shake_row(), Some(0));
        assert_eq!(engine.advance(Duration::from_millis(900)).len(), 1);
    }

    #[test]
    fn guess_is_case_insensitive() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        let events = play(&mut engine, "TRACE");
        assert!(events.contains(&EngineEvent::Won { guesses: 1 }));
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.current_row(), 0);
    }

    #[test]
    fn six_misses_lose() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        let guesses = ["crane", "slate", "audio", "robot", "floor", "ghost"];

        for (row, guess) in guesses.iter().enumerate() {
            assert_eq!(engine.current_row(), row);
            let events = play(&mut engine, guess);
            if row < 5 {
                assert!(!events.contains(&EngineEvent::Lost));
            } else {
                assert!(events.contains(&EngineEvent::Lost));
            }
        }

        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(engine.current_row(), 5);
        assert_eq!(engine.submit_guess("trace"), Err(RejectReason::NotActive));
    }

    #[test]
    fn win_on_last_row() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        for guess in ["crane", "slate", "audio", "robot", "floor"] {
            play(&mut engine, guess);
        }
        let events = play(&mut engine, "trace");
        assert!(events.contains(&EngineEvent::Won { guesses: 6 }));
        assert!(!events.contains(&EngineEvent::Lost));
    }

    #[test]
    fn typing_respects_alphabet_and_length() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        assert!(!engine.type_letter('1'));
        assert!(!engine.type_letter('ب'));
        for letter in "CRANES".chars() {
            engine.type_letter(letter);
        }
        assert_eq!(engine.current_guess(), "crane");
        assert_eq!(engine.board().row(0)[0].letter, Some('c'));

        assert!(engine.backspace());
        assert_eq!(engine.current_guess(), "cran");
        assert_eq!(engine.board().row(0)[4].letter, None);

        engine.type_letter('e');
        engine.submit_current().unwrap();
        engine.advance(SETTLE);
        assert_eq!(engine.current_row(), 1);
    }

    #[test]
    fn timeout_loses_once() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        assert!(engine.force_timeout());
        assert!(!engine.force_timeout());
        assert_eq!(engine.status(), GameStatus::Lost);
    }

    #[test]
    fn timeout_cancels_reveal() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        engine.submit_guess("crane").unwrap();
        engine.advance(Duration::from_millis(500));

        assert!(engine.force_timeout());
        assert!(engine.advance(SETTLE).is_empty());
        assert_eq!(engine.status(), GameStatus::Lost);
    }

    #[test]
    fn reset_discards_stale_events() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        engine.submit_guess("crane").unwrap();
        engine.advance(Duration::from_millis(500));

        engine.reset_round(false);
        assert!(engine.advance(SETTLE).is_empty());
        assert_eq!(engine.current_row(), 0);
        assert!(engine.keyboard().is_empty());
        assert!(engine.board().is_consistent(0, 5));
        assert_eq!(engine.solution().text(), "trace");
        assert!(!engine.is_animating());
    }

    #[test]
    fn reset_with_new_word_draws_answer() {
        let lists = lists();
        let mut engine =
            GuessEngine::with_rng(&lists, RoundSettings::default(), StdRng::seed_from_u64(7));
        engine.reset_round(true);
        assert!(lists.is_answer(engine.solution()));
    }

    #[test]
    fn saved_state_round_trip() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        play(&mut engine, "crane");
        play(&mut engine, "slate");
        engine.type_letter('t');
        engine.type_letter('r');

        let raw = engine.save_state().encode().unwrap();

        let mut other = engine_with_other_solution(&lists);
        assert!(other.restore(SavedGameState::decode(&raw).unwrap()));
        assert_eq!(other.save_state(), engine.save_state());
        assert_eq!(other.current_row(), 2);
        assert_eq!(other.current_guess(), "tr");
        assert_eq!(other.keyboard().status('a'), Correct);

        for letter in "ace".chars() {
            other.type_letter(letter);
        }
        other.submit_current().unwrap();
        assert!(other.advance(SETTLE).contains(&EngineEvent::Won { guesses: 3 }));
    }

    fn engine_with_other_solution(lists: &WordLists) -> GuessEngine<'_> {
        engine(lists, "ghost")
    }

    #[test]
    fn restore_refuses_mismatched_or_finished_rounds() {
        let lists = lists();
        let mut engine = engine(&lists, "trace");
        let mut state = engine.save_state();

        state.status = GameStatus::Won;
        assert!(!engine.restore(state.clone()));

        state.status = GameStatus::Playing;
        state.settings.language = Language::Arabic;
        assert!(!engine.restore(state));

        let other_lists = WordLists::resolve(Language::English, 4);
        let foreign = GuessEngine::with_rng(
            &other_lists,
            RoundSettings::default(),
            StdRng::seed_from_u64(1),
        )
        .save_state();
        assert!(!engine.restore(foreign));
        assert_eq!(engine.solution().text(), "trace");
    }

    #[test]
    fn restore_refuses_scored_current_row() {
        let lists = lists();
        let mut source = engine(&lists, "trace");
        source.submit_guess("crane").unwrap();
        // snapshot taken mid-reveal, then the row is forced to look settled
        let mut state = source.save_state();
        state.board.commit(0);

        let mut target = engine_with_other_solution(&lists);
        assert!(!target.restore(state));
        assert_eq!(target.solution().text(), "ghost");
        assert_eq!(target.current_row(), 0);
    }

    #[test]
    fn arabic_round() {
        let lists = WordLists::resolve(Language::Arabic, 5);
        let settings = RoundSettings {
            language: Language::Arabic,
            ..RoundSettings::default()
        };
        let solution = Word::new("مدرسة", Language::Arabic).unwrap();
        let mut engine = GuessEngine::with_solution(&lists, settings, solution);

        assert!(!engine.type_letter('a'));
        let events = play(&mut engine, "مكتبة");
        assert!(matches!(events.last(), Some(EngineEvent::RowSettled { row: 0, .. })));
        assert_eq!(engine.keyboard().status('م'), Correct);
        assert_eq!(engine.keyboard().status('ة'), Correct);

        let events = play(&mut engine, "مدرسة");
        assert!(events.contains(&EngineEvent::Won { guesses: 2 }));
    }
}
