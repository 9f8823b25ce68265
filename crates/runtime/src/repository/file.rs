//! File-based SnapshotRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use sorteo_core::RosterSnapshot;

use super::{RepositoryError, Result, SnapshotRepository};

/// File-based implementation of [`SnapshotRepository`].
///
/// Each key maps to one bincode file under the base directory; slashes in the
/// key become subdirectories, so `"sorteo/groups"` lands at
/// `<base>/sorteo/groups.bin`. Writes go to a temp file and are renamed into
/// place.
pub struct FileSnapshotRepo {
    base_dir: PathBuf,
}

impl FileSnapshotRepo {
    /// Create a new file-based repository rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Platform data directory for the application, if one can be resolved.
    pub fn default_base_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sorteo")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let mut path = self.base_dir.clone();
        for part in key.split('/').filter(|p| !p.is_empty()) {
            path.push(part);
        }
        path.set_extension("bin");
        path
    }
}

impl SnapshotRepository for FileSnapshotRepo {
    fn save(&self, key: &str, snapshot: &RosterSnapshot) -> Result<()> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        let bytes = bincode::serialize(snapshot)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let temp_path = path.with_extension("bin.tmp");
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved snapshot[{}] to {}", key, path.display());

        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<RosterSnapshot>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let snapshot: RosterSnapshot = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded snapshot[{}] from {}", key, path.display());

        Ok(Some(snapshot))
    }

    fn clear(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted snapshot[{}]", key);
        }

        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sorteo_core::{Group, GroupId};

    fn snapshot() -> RosterSnapshot {
        let mut group = Group::new(GroupId(3), "Amigos");
        group.members.push("Ana".to_string());
        RosterSnapshot {
            groups: vec![group],
            next_group_id: 4,
        }
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSnapshotRepo::new(dir.path()).unwrap();

        assert!(repo.load("sorteo/groups").unwrap().is_none());
        repo.save("sorteo/groups", &snapshot()).unwrap();
        assert!(repo.exists("sorteo/groups"));
        assert_eq!(repo.load("sorteo/groups").unwrap(), Some(snapshot()));
    }

    #[test]
    fn clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSnapshotRepo::new(dir.path()).unwrap();

        repo.save("sorteo/groups", &snapshot()).unwrap();
        repo.clear("sorteo/groups").unwrap();
        assert!(!repo.exists("sorteo/groups"));
        repo.clear("sorteo/groups").unwrap();
    }

    #[test]
    fn keys_map_to_nested_paths() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSnapshotRepo::new(dir.path()).unwrap();

        repo.save("a/b/c", &snapshot()).unwrap();
        assert!(dir.path().join("a").join("b").join("c.bin").exists());
    }
}
