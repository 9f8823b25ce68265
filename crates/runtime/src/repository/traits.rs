//! Repository contract for saving and loading roster snapshots.

use sorteo_core::RosterSnapshot;

use super::Result;

/// Key-value persistence for [`RosterSnapshot`]s.
///
/// Keys are namespace identifiers chosen by the caller; the session uses a
/// single fixed key for its roster. Implementations must tolerate loads of
/// never-saved keys by returning `Ok(None)`.
pub trait SnapshotRepository: Send + Sync {
    /// Persist a snapshot under `key`, replacing any previous value.
    fn save(&self, key: &str, snapshot: &RosterSnapshot) -> Result<()>;

    /// Load the snapshot stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<RosterSnapshot>>;

    /// Erase the value stored under `key`. Unknown keys are a no-op.
    fn clear(&self, key: &str) -> Result<()>;

    /// Check if a value exists under `key`.
    fn exists(&self, key: &str) -> bool;
}
