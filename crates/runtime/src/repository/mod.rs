//! Repository layer for roster persistence.
//!
//! The Snapshot Store boundary: a key-value contract for saving and loading
//! the persistent portion of the roster. The session loads the snapshot at
//! startup and saves it after every group-list mutation; everything else in
//! the state is session-transient and never touches the repository.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSnapshotRepo;
pub use memory::InMemorySnapshotRepo;
pub use traits::SnapshotRepository;
