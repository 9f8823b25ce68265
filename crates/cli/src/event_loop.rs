//! Event loop orchestrating session events, user input, and rendering.
//!
//! Coordinates three concerns: runtime event consumption (roster copies,
//! draw notices), keyboard input processing at a fixed frame interval, and
//! rendering after anything changed.

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::{self, Duration};

use sorteo_core::Action;
use sorteo_runtime::{Event, SessionError, SessionHandle};

use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal::Tui, ui};
use crate::state::AppState;

const FRAME_INTERVAL_MS: u64 = 16;

/// Main loop driving the terminal UI against a session handle.
pub struct EventLoop {
    handle: SessionHandle,
    events: broadcast::Receiver<Event>,
    input: InputHandler,
    app: AppState,
}

impl EventLoop {
    pub async fn new(handle: SessionHandle) -> Result<Self> {
        let events = handle.subscribe();
        let roster = handle.state().await?;
        Ok(Self {
            handle,
            events,
            input: InputHandler::new(),
            app: AppState::new(roster),
        })
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                result = self.events.recv() => {
                    if self.handle_session_event(result) {
                        break;
                    }
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick().await? {
                        break;
                    }
                    self.render(terminal)?;
                }
            }
        }

        Ok(())
    }

    /// Returns true when the session is gone and the UI should exit.
    fn handle_session_event(&mut self, result: Result<Event, RecvError>) -> bool {
        match result {
            Ok(Event::RosterChanged { state }) => {
                self.app.set_roster(state);
                false
            }
            Ok(Event::DrawStarted { .. }) => {
                self.app.status = None;
                false
            }
            Ok(Event::DrawSettled) => false,
            Ok(Event::ActionRejected { message }) => {
                self.app.status = Some(message);
                false
            }
            Err(RecvError::Closed) => {
                tracing::warn!("event stream closed");
                true
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("dropped {} stale events", skipped);
                false
            }
        }
    }

    /// Drain pending terminal events. Returns true on quit.
    async fn handle_input_tick(&mut self) -> Result<bool> {
        while event::poll(std::time::Duration::ZERO)? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match self.input.handle_key(key, &mut self.app) {
                    KeyAction::Quit => return Ok(true),
                    KeyAction::Submit(action) => self.submit(action).await?,
                    KeyAction::None => {}
                }
            }
        }
        Ok(false)
    }

    async fn submit(&mut self, action: Action) -> Result<()> {
        match self.handle.apply(action).await {
            Ok(_) => {
                self.app.status = None;
                Ok(())
            }
            // Rejections come back through the ActionRejected event with a
            // user-facing message.
            Err(SessionError::Execute(_)) => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        terminal.draw(|frame| ui::render(frame, &self.app))?;
        Ok(())
    }
}
