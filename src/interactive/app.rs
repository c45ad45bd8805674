//! TUI application state and logic

use crate::session::{Session, SessionEvent};
use crate::storage::Store;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a transient message stays on screen
pub const MESSAGE_LIFETIME: Duration = Duration::from_secs(3);

/// Poll interval when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Application state
pub struct App<'a, S: Store> {
    pub session: Session<'a, S>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// A saved game exists; waiting for y/n
    ResumePrompt,
    Playing,
    /// Round finished; Enter starts the next one
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    /// Time left on screen
    pub remaining: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: Store> App<'a, S> {
    /// Wrap a session; asks about the saved game first if there is one
    pub fn new(mut session: Session<'a, S>) -> Self {
        let input_mode = if session.has_saved_game() {
            InputMode::ResumePrompt
        } else {
            session.start();
            InputMode::Playing
        };

        Self {
            session,
            input_mode,
            messages: Vec::new(),
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
            remaining: MESSAGE_LIFETIME,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Time until the screen needs redrawing without input
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Duration> {
        let message = self.messages.iter().map(|m| m.remaining).min();
        match (self.session.next_wakeup(), message) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Move the session clock and age messages
    pub fn tick(&mut self, elapsed: Duration) {
        for message in &mut self.messages {
            message.remaining = message.remaining.saturating_sub(elapsed);
        }
        self.messages.retain(|m| !m.remaining.is_zero());

        for event in self.session.advance(elapsed) {
            match event {
                SessionEvent::Won { guesses } => {
                    let celebration = match guesses {
                        1 => "🎯 You won! Hole in one!",
                        2 => "🔥 You won! Magnificent!",
                        3 => "✨ You won! Splendid!",
                        4 => "👏 You won! Great job!",
                        5 => "🎉 You won! Nice work!",
                        _ => "😅 You won! Phew!",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.input_mode = InputMode::RoundOver;
                }
                SessionEvent::Lost => {
                    self.announce_loss("Game over!");
                }
                SessionEvent::TimedOut => {
                    self.announce_loss("Time's up! Game over.");
                }
                SessionEvent::Revealed { .. }
                | SessionEvent::RowSettled { .. }
                | SessionEvent::ShakeCleared { .. } => {}
            }
        }
    }

    fn announce_loss(&mut self, headline: &str) {
        let solution = self.session.engine().solution().display_text();
        self.add_message(headline, MessageStyle::Error);
        self.add_message(&format!("The word was {solution}"), MessageStyle::Info);
        self.input_mode = InputMode::RoundOver;
    }

    pub fn new_round(&mut self) {
        match self.session.new_round() {
            Ok(()) => {
                self.messages.clear();
                self.add_message("New word chosen", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.input_mode = InputMode::Playing;
    }

    fn toggle_timer(&mut self) {
        let enabled = !self.session.timer_enabled();
        match self.session.set_timer_enabled(enabled) {
            Ok(()) if enabled => self.add_message("Timer on", MessageStyle::Info),
            Ok(()) => self.add_message("Timer off", MessageStyle::Info),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn toggle_theme(&mut self) {
        match self.session.toggle_theme() {
            Ok(theme) => self.add_message(&format!("Theme: {theme:?}"), MessageStyle::Info),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn answer_resume(&mut self, resume: bool) {
        if resume {
            if self.session.resume() {
                self.add_message("Game resumed", MessageStyle::Info);
            } else {
                self.add_message("Saved game could not be restored", MessageStyle::Error);
                self.session.start();
            }
        } else {
            if let Err(err) = self.session.clear_saved_game() {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            self.session.start();
        }
        self.input_mode = InputMode::Playing;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if ctrl && self.input_mode != InputMode::ResumePrompt => {
                self.new_round();
                return;
            }
            KeyCode::Char('t') if ctrl => {
                self.toggle_timer();
                return;
            }
            KeyCode::Char('d') if ctrl => {
                self.toggle_theme();
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::ResumePrompt => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.answer_resume(true),
                KeyCode::Char('n' | 'N') => self.answer_resume(false),
                _ => {}
            },
            InputMode::RoundOver => {
                if key.code == KeyCode::Enter {
                    self.new_round();
                }
            }
            InputMode::Playing => match key.code {
                KeyCode::Char(c) if !ctrl => {
                    self.session.type_letter(c);
                }
                KeyCode::Backspace => {
                    self.session.backspace();
                }
                KeyCode::Enter => {
                    if let Err(reason) = self.session.submit() {
                        self.add_message(&reason.to_string(), MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Store>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "tui exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Store>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    let mut last = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = app.next_wakeup().unwrap_or(IDLE_POLL).min(IDLE_POLL);
        let key = if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
                _ => None,
            }
        } else {
            None
        };

        // settle whatever came due before looking at the key
        let now = Instant::now();
        app.tick(now - last);
        last = now;

        if let Some(key) = key {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
