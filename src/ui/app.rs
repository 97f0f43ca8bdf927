//! Main TUI application state and logic

use crate::calc::engine::Calculator;
use crate::calc::errors::EventOutcome;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// The calculator session
    pub calc: Calculator,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Keyboard aliases mapped onto event codes
    key_aliases: FxHashMap<char, char>,
}

impl App {
    /// Create a new app around the given calculator session
    pub fn new(calc: Calculator) -> Self {
        let mut key_aliases = FxHashMap::default();
        key_aliases.insert('*', 'x');
        key_aliases.insert('/', 'd');
        key_aliases.insert('=', 'q');
        key_aliases.insert('%', 'm');
        key_aliases.insert('v', 'r');

        App {
            calc,
            should_quit: false,
            status_message: String::from("Ready!"),
            key_aliases,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Display/keypad on the left, history on the right, status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(columns[0]);

        super::panes::render_display_pane(frame, left_rows[0], &self.calc);
        super::panes::render_keypad_pane(frame, left_rows[1]);
        super::panes::render_history_pane(frame, columns[1], self.calc.frames());
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.calc.frames().len(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit('q'),
            KeyCode::Backspace => self.submit('u'),
            KeyCode::Delete => self.submit('c'),
            KeyCode::Char(c) => {
                let code = self.key_aliases.get(&c).copied().unwrap_or(c);
                self.submit(code);
            }
            _ => {}
        }
    }

    /// Feed one event code to the calculator and reflect the outcome in the
    /// status bar.
    fn submit(&mut self, code: char) {
        match crate::calc::events::EventKind::decode(code) {
            None => {
                self.status_message = format!("Unmapped key '{}'", code);
            }
            Some(kind) => match self.calc.apply_event(kind) {
                EventOutcome::Applied => {
                    self.status_message = String::from("Ok");
                }
                EventOutcome::Errored(e) => {
                    self.status_message = format!("Error: {}", e);
                }
                EventOutcome::Rejected => {
                    self.status_message = String::from("Rejected");
                }
            },
        }
    }
}
