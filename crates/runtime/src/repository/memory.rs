//! In-memory SnapshotRepository implementation for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::RwLock;

use sorteo_core::RosterSnapshot;

use super::{RepositoryError, Result, SnapshotRepository};

/// In-memory implementation of [`SnapshotRepository`].
pub struct InMemorySnapshotRepo {
    entries: RwLock<HashMap<String, RosterSnapshot>>,
}

impl InMemorySnapshotRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySnapshotRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotRepository for InMemorySnapshotRepo {
    fn save(&self, key: &str, snapshot: &RosterSnapshot) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.insert(key.to_string(), snapshot.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<RosterSnapshot>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn clear(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sorteo_core::{Group, GroupId};

    fn snapshot() -> RosterSnapshot {
        RosterSnapshot {
            groups: vec![Group::new(GroupId(1), "Familia")],
            next_group_id: 2,
        }
    }

    #[test]
    fn save_load_round_trip() {
        let repo = InMemorySnapshotRepo::new();
        assert!(repo.load("k").unwrap().is_none());

        repo.save("k", &snapshot()).unwrap();
        assert!(repo.exists("k"));
        assert_eq!(repo.load("k").unwrap(), Some(snapshot()));
    }

    #[test]
    fn clear_removes_entry() {
        let repo = InMemorySnapshotRepo::new();
        repo.save("k", &snapshot()).unwrap();
        repo.clear("k").unwrap();
        assert!(!repo.exists("k"));
        // Clearing an unknown key is a no-op.
        repo.clear("missing").unwrap();
    }
}
