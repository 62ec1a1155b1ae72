//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use super::event::{Event, EventSource};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over already loaded view state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    /// Runs the TUI application until the user quits.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventSource::new(tick_rate);
        info!("tui started");

        let result = self.event_loop(&mut terminal, &events);

        // Restore terminal even if the loop failed.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        info!("tui stopped");
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventSource,
    ) -> io::Result<()> {
        loop {
            let size = terminal.size()?;
            // Table block borders take one cell on each side.
            self.state.set_table_width(size.width.saturating_sub(2));
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next()? {
                Event::Tick | Event::Resize => {}
                Event::Key(key) => {
                    if handle_key(&mut self.state, key) == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }
}
