//! Key-value backends for the shared document store

use std::fmt;
use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;

/// Flat string key-value storage behind the document store.
///
/// Whether values survive the process is the backend's concern.
pub trait DocumentBackend: Send + Sync + fmt::Debug {
    /// Read the raw value stored under `key`
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: String);
}

/// Process-local backend
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: String) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }
}
