//! Broadcast events published by the session worker.

use tokio::sync::broadcast;

use sorteo_core::{PairingResult, RosterState};

/// Events consumed by presentation layers.
#[derive(Clone, Debug)]
pub enum Event {
    /// The roster or session state changed; carries a fresh copy.
    RosterChanged { state: RosterState },
    /// A draw succeeded; member removal is deferred until [`Event::DrawSettled`].
    DrawStarted { result: PairingResult },
    /// The deferred member removal has been applied.
    DrawSettled,
    /// An action was rejected with a user-visible reason.
    ActionRejected { message: String },
}

/// Thin wrapper around the broadcast channel used to fan events out.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers. Having no subscribers is fine.
    pub fn publish(&self, event: Event) {
        if self.tx.send(event).is_err() {
            tracing::trace!("event published with no subscribers");
        }
    }
}
