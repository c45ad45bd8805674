//! Local key/value persistence
//!
//! All persisted records are JSON strings stored under fixed keys. Reads are
//! forgiving: a value that fails to parse is logged and treated as absent.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;
use thiserror::Error;

/// Persisted keys
pub mod keys {
    pub const CURRENT_PLAYER: &str = "kelmat-current-player";
    pub const GAME_STATE: &str = "kelmat-game-state";
    pub const GAME_IN_PROGRESS: &str = "kelmat-game-in-progress";
    pub const STATS: &str = "kelmat-stats";
    pub const THEME: &str = "kelmat-theme";
    pub const CHRONO_ENABLED: &str = "kelmat-chrono-enabled";
    pub const TIME_LIMIT: &str = "kelmat-time-limit";

    /// Key of a multiplayer game configuration
    #[must_use]
    pub fn multiplayer(game_id: &str) -> String {
        format!("kelmat-multiplayer-{game_id}")
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value store
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns `StorageError` if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    /// Returns `StorageError` if the removal cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Read and parse a JSON value, treating corrupt data as absent
pub fn load_json<T: DeserializeOwned>(store: &(impl Store + ?Sized), key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, %err, "ignoring unparsable stored value");
            None
        }
    }
}

/// Encode and store a JSON value
///
/// # Errors
/// Returns `StorageError` if encoding or persisting fails.
pub fn save_json<T: Serialize + ?Sized>(
    store: &mut (impl Store + ?Sized),
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
