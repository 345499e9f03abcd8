//! Session persistence configuration.

use serde::{Deserialize, Serialize};

/// Where the session is persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage backend for the persisted session keys.
    #[serde(default)]
    pub backend: StorageBackend,
    /// Path of the JSON file used by the `file` backend.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
        }
    }
}

/// Durable storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process memory only; the session dies with the process.
    Memory,
    /// A JSON file on disk; survives restarts.
    #[default]
    File,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::File => write!(f, "file"),
        }
    }
}

fn default_path() -> String {
    "data/session.json".to_string()
}
