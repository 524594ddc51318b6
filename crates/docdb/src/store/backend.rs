use crate::error::Result;
use crate::model::Document;
use std::path::PathBuf;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while DocumentStore handles the "what" (traversal, mutation, bookkeeping).
pub trait StorageBackend {
    /// Load the whole document.
    /// Missing or unreadable storage is an error, never an empty document.
    fn load_document(&self) -> Result<Document>;

    /// Replace the stored document with `doc`.
    /// MUST leave either the old or the new content in place, never a mix.
    fn save_document(&self, doc: &Document) -> Result<()>;

    /// Where the document lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
