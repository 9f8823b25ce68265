//! Session worker that owns the authoritative [`RosterState`].
//!
//! Receives commands from [`crate::SessionHandle`], executes actions via
//! [`sorteo_core::RosterEngine`], persists the roster after group-list
//! mutations, and publishes events to the bus. After a successful draw it
//! schedules a one-shot settlement that fires once the reveal delay elapses.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use sorteo_core::{
    Action, Applied, ExecutionOutcome, PcgRng, RosterEngine, RosterEnv, RosterState,
};

use crate::SNAPSHOT_KEY;
use crate::error::SessionError;
use crate::events::{Event, EventBus};
use crate::repository::SnapshotRepository;

/// Commands that can be sent to the session worker.
pub(crate) enum Command {
    /// Execute an action and reply with its outcome.
    Apply {
        action: Action,
        reply: oneshot::Sender<Result<ExecutionOutcome, SessionError>>,
    },
    /// Query the current state (read-only).
    Query {
        reply: oneshot::Sender<RosterState>,
    },
}

/// Background task that processes session commands one at a time.
///
/// The worker is the single owner of the state; no locking is needed. The
/// settlement channel is separate from the command channel so the worker can
/// hand its sender to the deferred task without keeping its own command
/// channel alive forever.
pub(crate) struct SessionWorker {
    state: RosterState,
    rng: PcgRng,
    repository: Arc<dyn SnapshotRepository>,
    command_rx: mpsc::Receiver<Command>,
    settle_tx: mpsc::Sender<()>,
    settle_rx: mpsc::Receiver<()>,
    events: EventBus,
    reveal_delay: Duration,
}

impl SessionWorker {
    pub(crate) fn new(
        state: RosterState,
        repository: Arc<dyn SnapshotRepository>,
        command_rx: mpsc::Receiver<Command>,
        events: EventBus,
        reveal_delay: Duration,
    ) -> Self {
        // Capacity 1: at most one draw can be pending at a time.
        let (settle_tx, settle_rx) = mpsc::channel(1);
        Self {
            state,
            rng: PcgRng,
            repository,
            command_rx,
            settle_tx,
            settle_rx,
            events,
            reveal_delay,
        }
    }

    /// Main worker loop. Ends when every [`crate::SessionHandle`] is dropped.
    pub(crate) async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                Some(()) = self.settle_rx.recv() => self.handle_settle(),
            }
        }
        debug!("session worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Apply { action, reply } => {
                let result = self.execute(&action);
                if reply.send(result).is_err() {
                    debug!("Apply reply channel closed (caller dropped)");
                }
            }
            Command::Query { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("Query reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, SessionError> {
        let env = RosterEnv::new(&self.rng);
        let outcome = match RosterEngine::new(&mut self.state).execute(&env, action) {
            Ok(outcome) => outcome,
            Err(error) => {
                debug!(
                    action = action.as_snake_case(),
                    error = %error,
                    "action rejected"
                );
                self.events.publish(Event::ActionRejected {
                    message: error.to_string(),
                });
                return Err(error.into());
            }
        };

        if outcome.roster_changed {
            self.persist(action);
        }

        match &outcome.applied {
            Applied::Ignored(reason) => {
                debug!(
                    action = action.as_snake_case(),
                    ?reason,
                    "action ignored"
                );
            }
            Applied::DrawStarted(result) => {
                self.events.publish(Event::DrawStarted {
                    result: result.clone(),
                });
                self.events.publish(Event::RosterChanged {
                    state: self.state.clone(),
                });
                self.schedule_settlement();
            }
            Applied::Changed | Applied::DrawSettled => {
                self.events.publish(Event::RosterChanged {
                    state: self.state.clone(),
                });
            }
        }

        Ok(outcome)
    }

    /// Apply the deferred member removal for the pending draw.
    fn handle_settle(&mut self) {
        let env = RosterEnv::new(&self.rng);
        let action = Action::settle_draw();
        match RosterEngine::new(&mut self.state).execute(&env, &action) {
            Ok(outcome) => {
                if outcome.roster_changed {
                    self.persist(&action);
                }
                if outcome.applied.changed() {
                    self.events.publish(Event::DrawSettled);
                    self.events.publish(Event::RosterChanged {
                        state: self.state.clone(),
                    });
                }
            }
            Err(error) => {
                // SettleDraw is infallible in the core; keep the session alive
                // regardless.
                warn!(error = %error, "draw settlement failed");
            }
        }
    }

    /// Spawn the one-shot settlement task for the draw that just started.
    ///
    /// The task is never cancelled; the core rejects further draws while the
    /// settlement is outstanding.
    fn schedule_settlement(&self) {
        let settle_tx = self.settle_tx.clone();
        let delay = self.reveal_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if settle_tx.send(()).await.is_err() {
                debug!("settlement dropped: worker already stopped");
            }
        });
    }

    /// Write the snapshot (or erase it after a reset). Persistence failures
    /// are logged and do not interrupt the session.
    fn persist(&self, action: &Action) {
        let result = if matches!(action, Action::Reset(_)) {
            self.repository.clear(SNAPSHOT_KEY)
        } else {
            self.repository.save(SNAPSHOT_KEY, &self.state.snapshot())
        };

        if let Err(error) = result {
            warn!(
                action = action.as_snake_case(),
                error = %error,
                "failed to persist roster snapshot"
            );
        }
    }
}
