//! Main TUI application.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::loader::{DataSource, spawn_load};
use crate::view::ViewEvent;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    source: Arc<dyn DataSource>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App reading from the given source.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        let label = source.describe();
        Self {
            source,
            state: AppState::new(label),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Initial load
        self.start_load(events.sender());

        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) | Ok(Event::Resize) => {}
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Reload => self.start_load(events.sender()),
                    KeyAction::OpenLink(url) => self.open_link(&url),
                    KeyAction::None => {}
                },
                Ok(Event::Load(event)) => {
                    if !self.state.view.apply(event) {
                        debug!("Ignored result of a superseded load");
                    }
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal. Workers still in flight find the channel closed
        // and drop their results.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Starts a new load session on a worker thread.
    fn start_load(&mut self, tx: Sender<Event>) {
        let session = self.state.view.next_session();
        self.state.view.apply(ViewEvent::LoadStarted { session });

        spawn_load(self.source.clone(), session, move |event| {
            if tx.send(Event::Load(event)).is_err() {
                debug!("Load #{} finished after the UI closed", session);
            }
        });
    }

    /// Opens a job link in a new browser window.
    fn open_link(&mut self, url: &str) {
        info!("Opening {}", url);
        match open::that_detached(url) {
            Ok(()) => self.state.status_message = Some(format!("Opened {}", url)),
            Err(e) => {
                warn!("Failed to open {}: {}", url, e);
                self.state.status_message = Some(format!("Cannot open link: {}", e));
            }
        }
    }
}
