//! TUI application state and logic

use crate::game::{Outcome, Rejection, Session, SessionEvent};
use crate::wordlists::{DictionaryOracle, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Messages kept for the log panel
const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

type MessageLog = Rc<RefCell<Vec<Message>>>;

fn push_message(log: &MessageLog, text: String, style: MessageStyle) {
    let mut messages = log.borrow_mut();
    messages.push(Message { text, style });
    if messages.len() > MAX_MESSAGES {
        messages.remove(0);
    }
}

/// Application state
pub struct App<W: WordSource, D: DictionaryOracle> {
    pub session: Session<W, D>,
    pub input_buffer: String,
    /// Rejection being shown as a modal alert
    pub alert: Option<Rejection>,
    pub should_quit: bool,
    messages: MessageLog,
}

impl<W: WordSource, D: DictionaryOracle> App<W, D> {
    #[must_use]
    pub fn new(mut session: Session<W, D>) -> Self {
        let messages: MessageLog = Rc::default();
        push_message(
            &messages,
            format!(
                "Welcome! Make words from '{}'.",
                session.root_word().to_uppercase()
            ),
            MessageStyle::Info,
        );

        let sink = Rc::clone(&messages);
        session.subscribe(move |event: &SessionEvent<'_>| match event {
            SessionEvent::Started { root } => push_message(
                &sink,
                format!("New root word: {}", root.to_uppercase()),
                MessageStyle::Info,
            ),
            SessionEvent::Accepted { word, points, .. } => {
                push_message(&sink, format!("+{points} for '{word}'"), MessageStyle::Success);
            }
            SessionEvent::Rejected { rejection } => push_message(
                &sink,
                format!("'{}': {}", rejection.word, rejection.title),
                MessageStyle::Error,
            ),
        });

        Self {
            session,
            input_buffer: String::new(),
            alert: None,
            should_quit: false,
            messages,
        }
    }

    /// Submit the input buffer as a word
    pub fn submit(&mut self) {
        match self.session.attempt_word(&self.input_buffer) {
            Outcome::Ignored => {}
            Outcome::Accepted { .. } => self.input_buffer.clear(),
            Outcome::Rejected {
                rejection,
                restarted,
            } => {
                // Keep the typo around to fix unless the whole game was reset
                if restarted {
                    self.input_buffer.clear();
                }
                self.alert = Some(rejection);
            }
        }
    }

    /// Deal a new root word
    pub fn new_word(&mut self) {
        self.session.start_game();
        self.input_buffer.clear();
        self.alert = None;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Recent messages, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // While an alert is up, any key just dismisses it
        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_word();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource, D: DictionaryOracle>(app: App<W, D>) -> Result<()> {
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

    if let Err(err) = &res {
        tracing::error!("TUI exited with error: {err:#}");
    }
    res.map(|score| tracing::info!(score, "game over"))
}

fn run_app<B, W, D>(terminal: &mut Terminal<B>, mut app: App<W, D>) -> Result<u32>
where
    B: ratatui::backend::Backend,
    W: WordSource,
    D: DictionaryOracle,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.session.score())
}
