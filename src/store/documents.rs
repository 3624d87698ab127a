//! Shared document list with explicit refresh
//!
//! The document list lives in a [`DocumentBackend`] as one JSON array under a
//! single key. Each [`DocumentStore`] handle keeps an in-memory view that is
//! brought up to date by calling [`DocumentStore::refresh`]; nothing polls
//! on its own. Clones share the same view.
//!
//! Other clients write to the same list, so entries are decoded one at a
//! time. An entry this crate cannot read is left out of the view but kept in
//! the stored list when appending.

use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashSet;
use serde_json::Value;

use super::backend::{DocumentBackend, MemoryBackend};
use crate::models::{Case, Document};
use crate::utils::logging::log_warning;

/// Raw contents of the stored list
#[derive(Debug)]
enum StoredList {
    Empty,
    Entries(Vec<Value>),
    /// Value that is not a JSON array
    Unreadable(String),
}

/// Handle to the shared document list
#[derive(Debug, Clone)]
pub struct DocumentStore {
    backend: Arc<dyn DocumentBackend>,
    key: String,
    view: Arc<RwLock<Vec<Document>>>,
}

impl DocumentStore {
    /// Create a store over a backend, reading the list under `key`
    #[must_use]
    pub fn new(backend: Arc<dyn DocumentBackend>, key: impl Into<String>) -> Self {
        let store = Self {
            backend,
            key: key.into(),
            view: Arc::new(RwLock::new(Vec::new())),
        };
        store.refresh();
        store
    }

    /// Store over a fresh [`MemoryBackend`]
    #[must_use]
    pub fn in_memory(key: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryBackend::new()), key)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshot of the in-memory view
    #[must_use]
    pub fn documents(&self) -> Vec<Document> {
        self.view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Documents in the view belonging to one case
    #[must_use]
    pub fn documents_for_case(&self, case_id: &str) -> Vec<Document> {
        self.view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|d| d.case_id == case_id)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn contains(&self, document_id: &str) -> bool {
        self.view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|d| d.id == document_id)
    }

    /// Merge a case's intake documents into the view only.
    ///
    /// Intake documents belong to the case record, so they are not written to
    /// the shared list. Returns how many were added.
    pub fn seed_from_case(&self, case: &Case) -> usize {
        let docs = case.documents.iter().cloned().map(|mut doc| {
            if doc.case_id.is_empty() {
                doc.case_id = case.id.clone();
            }
            doc
        });
        self.merge_into_view(docs)
    }

    /// Append a document to the shared list and the view.
    ///
    /// Stored entries are written back untouched, including ones that do not
    /// decode. A list that is not a JSON array at all is copied to
    /// `<key>.unreadable` and then replaced. Appending an id that is already
    /// stored is a no-op. Returns `true` if the document was added.
    pub fn append(&self, document: Document) -> bool {
        let mut entries = match self.read_stored() {
            StoredList::Empty => Vec::new(),
            StoredList::Entries(entries) => entries,
            StoredList::Unreadable(raw) => {
                let backup = self.unreadable_key();
                log::error!(
                    "Replacing unreadable document list {} ({} bytes saved to {backup})",
                    self.key,
                    raw.len()
                );
                self.backend.write(&backup, raw);
                Vec::new()
            }
        };
        if entries.iter().any(|entry| entry_id(entry) == Some(document.id.as_str())) {
            return false;
        }

        match serde_json::to_value(&document) {
            Ok(value) => entries.push(value),
            Err(e) => {
                log::error!("Failed to encode document {}: {e}", document.id);
                return false;
            }
        }

        match serde_json::to_string(&entries) {
            Ok(encoded) => self.backend.write(&self.key, encoded),
            Err(e) => {
                log::error!("Failed to encode document list {}: {e}", self.key);
                return false;
            }
        }

        self.merge_into_view(std::iter::once(document));
        true
    }

    /// Key the raw value of an unreadable list is copied to before replacing
    #[must_use]
    pub fn unreadable_key(&self) -> String {
        format!("{}.unreadable", self.key)
    }

    /// Re-read the shared list and merge documents added by others.
    ///
    /// Returns the number of documents newly added to the view.
    pub fn refresh(&self) -> usize {
        let stored = match self.read_stored() {
            StoredList::Entries(entries) => self.decode_entries(entries),
            StoredList::Empty | StoredList::Unreadable(_) => Vec::new(),
        };
        let added = self.merge_into_view(stored);
        if added > 0 {
            log::debug!("Refreshed {}: {added} new documents", self.key);
        }
        added
    }

    fn read_stored(&self) -> StoredList {
        let Some(raw) = self.backend.read(&self.key) else {
            return StoredList::Empty;
        };
        if raw.trim().is_empty() {
            return StoredList::Empty;
        }
        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => StoredList::Entries(entries),
            Err(e) => {
                log_warning(
                    &format!("Ignoring unreadable document list ({e})"),
                    Some(&self.key),
                );
                StoredList::Unreadable(raw)
            }
        }
    }

    fn decode_entries(&self, entries: Vec<Value>) -> Vec<Document> {
        entries
            .into_iter()
            .filter_map(|entry| {
                let id = entry_id(&entry).unwrap_or("<no id>").to_string();
                match serde_json::from_value::<Document>(entry) {
                    Ok(document) => Some(document),
                    Err(e) => {
                        log::warn!("Skipping unreadable entry {id} in {}: {e}", self.key);
                        None
                    }
                }
            })
            .collect()
    }

    fn merge_into_view(&self, documents: impl IntoIterator<Item = Document>) -> usize {
        let mut view = self.view.write().unwrap_or_else(PoisonError::into_inner);
        let mut known: FxHashSet<String> = view.iter().map(|d| d.id.clone()).collect();
        let before = view.len();
        for document in documents {
            if known.insert(document.id.clone()) {
                view.push(document);
            }
        }
        view.len() - before
    }
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}
