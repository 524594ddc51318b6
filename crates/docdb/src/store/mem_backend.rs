use super::backend::StorageBackend;
use super::fs_backend::{render_document, DEFAULT_INDENT};
use crate::error::{DocDbError, Result};
use crate::model::Document;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Keeps the serialized text rather than a parsed `Document`, so loads go
/// through the same parsing (and can fail the same way) as a real file.
/// Uses `RefCell` for interior mutability since docdb is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    simulate_write_error: Cell<bool>,
    saves: Cell<usize>,
}

impl MemBackend {
    /// A backend with no document at all; every load fails.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: &Document) -> Result<Self> {
        let backend = Self::new();
        backend.set_raw(String::from_utf8_lossy(&render_document(doc, DEFAULT_INDENT)?));
        Ok(backend)
    }

    /// Test helper to seed raw stored text, valid or not.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.content.borrow_mut() = Some(raw.into());
    }

    pub fn raw(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_document(&self) -> Result<Document> {
        match self.content.borrow().as_deref() {
            Some(raw) => Document::from_json_str(raw),
            None => Err(DocDbError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no document stored",
            ))),
        }
    }

    fn save_document(&self, doc: &Document) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(DocDbError::Store("Simulated write error".to_string()));
        }
        let rendered = render_document(doc, DEFAULT_INDENT)?;
        *self.content.borrow_mut() = Some(String::from_utf8_lossy(&rendered).into_owned());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://document.json")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use serde_json::json;

    /// The users document most engine tests start from.
    pub fn users_document() -> Document {
        let mut doc = Document::new();
        doc.insert("users", json!({"user1": {"age": "30"}}));
        doc.insert("name", json!("docdb"));
        doc
    }

    pub fn users_backend() -> MemBackend {
        MemBackend::with_document(&users_document()).expect("fixture renders")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn empty_backend_fails_to_load() {
        let backend = MemBackend::new();
        assert!(matches!(backend.load_document(), Err(DocDbError::Io(_))));
    }

    #[test]
    fn round_trips_a_document() {
        let backend = users_backend();
        assert_eq!(backend.load_document().unwrap(), users_document());
    }

    #[test]
    fn simulated_write_error_keeps_old_content() {
        let backend = users_backend();
        let before = backend.raw();
        backend.set_simulate_write_error(true);

        let result = backend.save_document(&Document::new());
        assert!(matches!(result, Err(DocDbError::Store(_))));
        assert_eq!(backend.raw(), before);
        assert_eq!(backend.save_count(), 0);
    }

    #[test]
    fn raw_garbage_fails_to_load() {
        let backend = MemBackend::new();
        backend.set_raw("not json");
        assert!(matches!(
            backend.load_document(),
            Err(DocDbError::Serialization(_))
        ));
    }
}
