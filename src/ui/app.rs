//! Main TUI application state and logic

use crate::display::ScreenBuffer;
use crate::interpreter::errors::RuntimeError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state, shown once the program has halted
pub struct App {
    /// Everything the program printed
    pub screen: ScreenBuffer,

    /// Status message to display
    pub status_message: String,

    /// Whether the run halted with an error
    pub failed: bool,

    /// Commands executed before halting
    pub steps: usize,

    /// View offset into the grid (row, col)
    pub scroll: (usize, usize),

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create an app for a finished run
    pub fn new(screen: ScreenBuffer, outcome: Result<(), RuntimeError>, steps: usize) -> Self {
        let (status_message, failed) = match outcome {
            Ok(()) => (String::from("Program finished"), false),
            Err(err) => (err.to_string(), true),
        };

        App {
            screen,
            status_message,
            failed,
            steps,
            scroll: (0, 0),
            should_quit: false,
        }
    }

    /// Run the TUI application until `q` is pressed
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
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
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        super::panes::render_screen_pane(frame, chunks[0], &self.screen, &mut self.scroll);

        super::panes::render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            self.steps,
            self.failed,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.scroll.0 = self.scroll.0.saturating_sub(1);
            }
            KeyCode::Down => {
                // Clamped against the grid size on the next render
                self.scroll.0 = self.scroll.0.saturating_add(1);
            }
            KeyCode::Left => {
                self.scroll.1 = self.scroll.1.saturating_sub(1);
            }
            KeyCode::Right => {
                self.scroll.1 = self.scroll.1.saturating_add(1);
            }
            _ => {}
        }
    }
}
