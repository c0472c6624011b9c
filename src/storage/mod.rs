//! Filesystem persistence.
//!
//! JSONL files are the source of truth:
//! - Per-user partitions under `users/<user_id>/` for players, matches
//!   and tournaments
//! - A single global `victory_wall.jsonl` for the victory wall

mod jsonl;

pub use jsonl::*;

use std::path::PathBuf;
use thiserror::Error;

use crate::models::UserId;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn users_dir(&self) -> PathBuf {
        self.data_dir.join("users")
    }

    /// A user's private partition.
    pub fn user_dir(&self, user: &UserId) -> PathBuf {
        self.users_dir().join(user.as_str())
    }

    /// The global victory wall file.
    pub fn wall_path(&self) -> PathBuf {
        self.data_dir.join("victory_wall.jsonl")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(config.users_dir(), PathBuf::from("/data/users"));
        assert_eq!(
            config.user_dir(&EntityId::from("u1")),
            PathBuf::from("/data/users/u1")
        );
        assert_eq!(config.wall_path(), PathBuf::from("/data/victory_wall.jsonl"));
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
