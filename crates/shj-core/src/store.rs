//! Storage backends for the collection state.
//!
//! The engine only needs two calls: `load` once at start-up and `save` after
//! every mutation. Values cross this boundary as `serde_json::Value` so that
//! decoding (and its leniency rules) stays in
//! [`CollectionState::from_value`](crate::state::CollectionState::from_value).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use thiserror::Error;

use crate::state::CollectionState;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stored bytes are not valid JSON.
    #[error("stored state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Where collection state is persisted.
pub trait CollectionStore {
    /// Read the stored value, or `None` if nothing has been saved yet.
    fn load(&self) -> StoreResult<Option<Value>>;

    /// Persist the given state, replacing what was stored.
    fn save(&mut self, state: &CollectionState) -> StoreResult<()>;
}

#[derive(Debug, Default)]
struct MemorySlot {
    value: Option<Value>,
    fail_saves: bool,
    saves: usize,
}

/// In-memory store. Clones share the same slot, so a test can keep a handle
/// after giving one to the engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<MemorySlot>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with a raw value.
    pub fn with_value(value: Value) -> Self {
        let store = Self::default();
        store.lock().value = Some(value);
        store
    }

    /// The currently stored value.
    pub fn value(&self) -> Option<Value> {
        self.lock().value.clone()
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemorySlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CollectionStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<Value>> {
        Ok(self.lock().value.clone())
    }

    fn save(&mut self, state: &CollectionState) -> StoreResult<()> {
        let mut slot = self.lock();
        if slot.fail_saves {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }
        slot.value = Some(state.to_value());
        slot.saves += 1;
        Ok(())
    }
}

/// Stores state as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CollectionStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Value>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&mut self, state: &CollectionState) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&state.to_value())?;
        // An interrupted save must leave the previous file intact.
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
