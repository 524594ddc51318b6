//! # Docdb Architecture
//!
//! Docdb is a small persistent key/value store whose whole state is **one JSON
//! document** on disk. Keys are slash separated paths that reach into nested
//! mappings (`users/user1/age`). It is a library that happens to have a CLI
//! client, not the other way round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/docdb-cli)                                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the single connection handle                        │
//! │  - Normalizes inputs (raw strings → KeyPath)                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - get / set / delete / info                                │
//! │  - Turns engine results into CmdResult + messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, traverse.rs)                        │
//! │  - DocumentStore: load → traverse/mutate → persist          │
//! │  - StorageBackend trait: FsBackend, MemBackend (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Read-Modify-Write Cycle
//!
//! Every operation loads the complete document, works on it in memory, and
//! (for `set` and `delete`) writes the complete document back. Nothing is
//! cached between operations. There is no locking: two processes writing the
//! same file race, and the last writer wins.
//!
//! ## Key Semantics at a Glance
//!
//! - `get` returns `None` for anything missing, including sub-keys below a
//!   scalar. An explicit `null` comes back as `Some(Value::Null)`.
//! - `set` never creates a root key (`KeyNotFound`), but creates any missing
//!   nested mappings below an existing root.
//! - `delete` of something absent succeeds and creates nothing.
//! - Descending through a scalar while setting or deleting is `NotAMapping`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and connection lifecycle
//! - [`commands`]: Per-operation business results
//! - [`store`]: The engine and storage backends
//! - [`traverse`]: Walking key paths through a document
//! - [`key`]: Key path parsing
//! - [`model`]: `Document` and bookkeeping types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod key;
pub mod model;
pub mod store;
pub mod traverse;
