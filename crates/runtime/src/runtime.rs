//! High-level session orchestrator.
//!
//! The runtime owns the worker task, wires up the command and event channels,
//! and exposes a builder-based API for frontends to start a session against
//! any [`SnapshotRepository`].

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use sorteo_core::RosterState;

use crate::error::Result;
use crate::events::EventBus;
use crate::handle::SessionHandle;
use crate::repository::{InMemorySnapshotRepo, SnapshotRepository};
use crate::worker::{Command, SessionWorker};

/// Namespace key under which the roster snapshot is persisted.
pub const SNAPSHOT_KEY: &str = "sorteo/groups";

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Delay between a successful draw and the deferred member removal.
    pub reveal_delay: Duration,
    /// Fixed RNG seed for reproducible sessions; `None` draws one at random.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(1500),
            seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Running session: owns the worker task and hands out [`SessionHandle`]s.
pub struct Runtime {
    handle: SessionHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this session.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Shut down gracefully: drop this runtime's handle and wait for the
    /// worker to drain. Outstanding handle clones keep the worker alive.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await?;
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    repository: Option<Arc<dyn SnapshotRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            repository: None,
        }
    }

    /// Override runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the snapshot repository. Defaults to an in-memory store.
    pub fn repository(mut self, repository: Arc<dyn SnapshotRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the runtime: load the persisted roster (an absent snapshot
    /// yields an empty one) and spawn the worker task.
    ///
    /// Must be called within a tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemorySnapshotRepo::new()));

        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());

        let state = match repository.load(SNAPSHOT_KEY)? {
            Some(snapshot) => {
                tracing::info!(
                    groups = snapshot.groups.len(),
                    "restored roster from snapshot"
                );
                RosterState::from_snapshot(seed, snapshot)
            }
            None => RosterState::new(seed),
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let events = EventBus::new(self.config.event_buffer_size);
        let handle = SessionHandle::new(command_tx, events.clone());

        let worker = SessionWorker::new(
            state,
            repository,
            command_rx,
            events,
            self.config.reveal_delay,
        );
        let worker_handle = tokio::spawn(worker.run());

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
