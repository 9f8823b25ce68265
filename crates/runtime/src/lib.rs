//! Session orchestration for the raffle.
//!
//! This crate wires the deterministic core into a running session: a worker
//! task owns the [`sorteo_core::RosterState`], commands arrive over a channel
//! through [`SessionHandle`], events fan out over a broadcast bus, and the
//! repository layer persists the roster snapshot after every mutation.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`events`] provides the broadcast event bus
//! - [`repository`] provides the snapshot persistence boundary
//! - `worker` keeps the background task internal to the crate
pub mod error;
pub mod events;
pub mod handle;
pub mod repository;
pub mod runtime;

mod worker;

pub use error::{Result, SessionError};
pub use events::{Event, EventBus};
pub use handle::SessionHandle;
pub use repository::{
    FileSnapshotRepo, InMemorySnapshotRepo, RepositoryError, SnapshotRepository,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, SNAPSHOT_KEY};
