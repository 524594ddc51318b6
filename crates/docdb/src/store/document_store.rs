use super::backend::StorageBackend;
use crate::error::{DocDbError, Result};
use crate::key::KeyPath;
use crate::model::Document;
use crate::traverse;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::cell::Cell;
use std::path::PathBuf;

/// The read-modify-write engine.
///
/// Every call loads the document fresh from the backend; mutating calls
/// write the whole document back before returning. Nothing is cached between
/// calls, so a call always sees what is on storage at that moment.
pub struct DocumentStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    created_at: DateTime<Utc>,
    last_accessed: Cell<Option<DateTime<Utc>>>,
    last_modified: Cell<Option<DateTime<Utc>>>,
}

impl<B: StorageBackend> DocumentStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            created_at: Utc::now(),
            last_accessed: Cell::new(None),
            last_modified: Cell::new(None),
        }
    }

    /// Returns the value at `key`, or `None` when any level is missing.
    ///
    /// Descending below a non-mapping value counts as missing. An explicit
    /// JSON `null` is returned as `Some(Value::Null)`.
    pub fn read(&self, key: &KeyPath) -> Result<Option<Value>> {
        let doc = self.backend.load_document()?;
        self.last_accessed.set(Some(Utc::now()));
        Ok(traverse::lookup(&doc, key).cloned())
    }

    /// Stores `value` at `key`.
    ///
    /// The root key must already exist. Missing levels below it are created
    /// as empty mappings. On any error nothing is persisted.
    pub fn write(&self, key: &KeyPath, value: Value) -> Result<()> {
        let mut doc = self.backend.load_document()?;
        if !doc.contains_key(key.root()) {
            return Err(DocDbError::KeyNotFound(key.root().to_string()));
        }

        match key.subkeys().split_last() {
            None => {
                doc.insert(key.root(), value);
            }
            Some((last, _)) => {
                let parent = traverse::vivify_parent(&mut doc, key)?;
                parent.insert(last.clone(), value);
            }
        }

        self.persist(&doc)
    }

    /// Removes the entry at `key`, returning what was there.
    ///
    /// Absent entries are not an error, and nothing along the path is
    /// created. The document is written back either way.
    pub fn delete(&self, key: &KeyPath) -> Result<Option<Value>> {
        let mut doc = self.backend.load_document()?;

        let removed = match key.subkeys().split_last() {
            None => doc.entries_mut().shift_remove(key.root()),
            Some((last, _)) => match traverse::existing_parent(&mut doc, key)? {
                Some(parent) => parent.shift_remove(last),
                None => None,
            },
        };

        self.persist(&doc)?;
        Ok(removed)
    }

    /// Loads the document without touching any bookkeeping.
    pub fn snapshot(&self) -> Result<Document> {
        self.backend.load_document()
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_accessed(&self) -> Option<DateTime<Utc>> {
        self.last_accessed.get()
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified.get()
    }

    fn persist(&self, doc: &Document) -> Result<()> {
        self.backend.save_document(doc)?;
        self.last_modified.set(Some(Utc::now()));
        Ok(())
    }
}
