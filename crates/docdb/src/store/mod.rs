//! # Storage Layer
//!
//! Storage is split in two:
//!
//! - [`backend::StorageBackend`]: raw document I/O. Loads and saves one whole
//!   [`Document`](crate::model::Document) and knows nothing about keys.
//! - [`document_store::DocumentStore`]: the read-modify-write engine on top of
//!   any backend. Parses nothing and prints nothing; it takes a
//!   [`KeyPath`](crate::key::KeyPath) and walks it.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, one `.json` file
//!   - Pretty-printed, configurable indent, trailing newline
//!   - Written to a temp sibling and renamed into place
//!
//! - [`mem_backend::MemBackend`]: in-memory storage for testing
//!   - Keeps serialized text, so parsing errors are real
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "users": {
//!         "user1": {
//!             "age": "30"
//!         }
//!     }
//! }
//! ```
//!
//! The root is always an object. Key order is kept across rewrites.

pub mod backend;
pub mod document_store;
pub mod fs_backend;
pub mod mem_backend;
