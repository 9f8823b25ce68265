//! Cloneable façade over the session worker.

use tokio::sync::{broadcast, mpsc, oneshot};

use sorteo_core::{Action, ExecutionOutcome, RosterState};

use crate::error::{Result, SessionError};
use crate::events::{Event, EventBus};
use crate::worker::Command;

/// Handle used by frontends to drive a session.
///
/// Handles are cheap to clone and can be shared across tasks. When the last
/// handle drops, the worker loop ends.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    events: EventBus,
}

impl SessionHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, events: EventBus) -> Self {
        Self { command_tx, events }
    }

    /// Execute an action and wait for its outcome.
    pub async fn apply(&self, action: Action) -> Result<ExecutionOutcome> {
        let (reply, rx) = oneshot::channel();
        self.command_tx
            .send(Command::Apply { action, reply })
            .await
            .map_err(|_| SessionError::ChannelClosed)?;
        rx.await.map_err(|_| SessionError::ChannelClosed)?
    }

    /// Fetch a copy of the current state.
    pub async fn state(&self) -> Result<RosterState> {
        let (reply, rx) = oneshot::channel();
        self.command_tx
            .send(Command::Query { reply })
            .await
            .map_err(|_| SessionError::ChannelClosed)?;
        rx.await.map_err(|_| SessionError::ChannelClosed)
    }

    /// Subscribe to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }
}
