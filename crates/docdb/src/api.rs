//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every docdb operation, whatever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the connection**: one [`DocDbApi`] is one open document store
//! - **Normalizes inputs**: raw key strings become [`KeyPath`]s here, so an
//!   invalid key is rejected before the document is ever loaded
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Connection Lifecycle
//!
//! There is no global instance. The application constructs one handle at
//! startup (usually with [`DocDbApi::open`]) and passes it by reference to
//! whatever needs the store. Opening logs a connect line with the handle's
//! connection id; dropping the handle logs the matching disconnect.
//!
//! ## Generic Over StorageBackend
//!
//! `DocDbApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `DocDbApi<FsBackend>`
//! - Testing: `DocDbApi<MemBackend>`

use crate::commands;
use crate::config::DocDbConfig;
use crate::error::{DocDbError, Result};
use crate::key::KeyPath;
use crate::store::backend::StorageBackend;
use crate::store::document_store::DocumentStore;
use crate::store::fs_backend::FsBackend;
use serde_json::Value;
use std::path::PathBuf;
use uuid::Uuid;

/// The main API facade for docdb operations.
pub struct DocDbApi<B: StorageBackend> {
    store: DocumentStore<B>,
    connection_id: Uuid,
}

impl<B: StorageBackend> DocDbApi<B> {
    pub fn new(backend: B) -> Self {
        let store = DocumentStore::with_backend(backend);
        let connection_id = Uuid::new_v4();
        log::info!(
            "Connected to document store at {} [ID: {}]",
            store.location().display(),
            connection_id
        );
        Self {
            store,
            connection_id,
        }
    }

    pub fn get(&self, raw_key: &str) -> Result<commands::CmdResult> {
        let key = KeyPath::parse(raw_key)?;
        commands::get::run(&self.store, &key)
    }

    /// Stores `value`. Takes `&mut self` so a shared borrow of the handle
    /// cannot mutate the store.
    pub fn set(&mut self, raw_key: &str, value: Value) -> Result<commands::CmdResult> {
        let key = KeyPath::parse(raw_key)?;
        commands::set::run(&self.store, &key, value)
    }

    pub fn delete(&mut self, raw_key: &str) -> Result<commands::CmdResult> {
        let key = KeyPath::parse(raw_key)?;
        commands::delete::run(&self.store, &key)
    }

    pub fn info(&self) -> Result<commands::CmdResult> {
        commands::info::run(&self.store, self.connection_id)
    }

    pub fn connection_id(&self) -> Uuid {
        self.connection_id
    }
}

impl DocDbApi<FsBackend> {
    /// Opens the document named by `config.path`.
    ///
    /// The file must already exist and be a `.json` file.
    pub fn open(config: &DocDbConfig) -> Result<Self> {
        let path = configured_path(config)?;
        let backend = FsBackend::open(path)?.with_indent(config.indent);
        Ok(Self::new(backend))
    }

    /// Creates an empty document at `config.path` if there is none yet, then
    /// opens it. An existing file must hold a valid document.
    pub fn init(config: &DocDbConfig) -> Result<(Self, commands::CmdResult)> {
        let path = configured_path(config)?;
        let (backend, created) = FsBackend::create(path)?;
        let api = Self::new(backend.with_indent(config.indent));

        let location = api.store.location();
        let mut result = commands::CmdResult::default();
        if created {
            result.add_message(commands::CmdMessage::success(format!(
                "Initialized empty document at {}",
                location.display()
            )));
        } else {
            api.store.snapshot()?;
            result.add_message(commands::CmdMessage::info(format!(
                "Document already exists at {}",
                location.display()
            )));
        }
        Ok((api, result))
    }
}

/// Reports the effective configuration. Needs no open handle.
pub fn config(config: &DocDbConfig) -> commands::CmdResult {
    commands::config::run(config)
}

impl<B: StorageBackend> Drop for DocDbApi<B> {
    fn drop(&mut self) {
        log::info!(
            "Disconnected from document store [ID: {}]",
            self.connection_id
        );
    }
}

impl<B: StorageBackend> std::fmt::Display for DocDbApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "docdb connection (ID: {})", self.connection_id)
    }
}

fn configured_path(config: &DocDbConfig) -> Result<PathBuf> {
    config.path.clone().ok_or_else(|| {
        DocDbError::InvalidStorePath(
            PathBuf::new(),
            "no document path configured (set DOCDB_PATH or pass --db)".into(),
        )
    })
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::users_backend;
    use serde_json::json;

    fn api() -> DocDbApi<crate::store::mem_backend::MemBackend> {
        DocDbApi::new(users_backend())
    }

    #[test]
    fn get_parses_and_dispatches() {
        let api = api();
        let result = api.get(" users/user1/age ").unwrap();
        assert_eq!(result.value, Some(json!("30")));
        assert_eq!(result.key.unwrap().to_string(), "users/user1/age");
    }

    #[test]
    fn invalid_key_rejected_before_load() {
        let mut api = DocDbApi::new(crate::store::mem_backend::MemBackend::new());
        // an unloadable backend would give Io, so InvalidKey proves we never loaded
        assert!(matches!(api.get("  "), Err(DocDbError::InvalidKey(_))));
        assert!(matches!(
            api.set("a//b", json!(1)),
            Err(DocDbError::InvalidKey(_))
        ));
        assert!(matches!(api.delete("/"), Err(DocDbError::InvalidKey(_))));
    }

    #[test]
    fn set_then_get() {
        let mut api = api();
        api.set("users/user1/age", json!("31")).unwrap();
        assert_eq!(api.get("users/user1/age").unwrap().value, Some(json!("31")));
    }

    #[test]
    fn delete_dispatches() {
        let mut api = api();
        let result = api.delete("name").unwrap();
        assert_eq!(result.value, Some(json!("docdb")));
        assert!(api.get("name").unwrap().value.is_none());
    }

    #[test]
    fn info_carries_connection_id() {
        let api = api();
        let info = api.info().unwrap().info.unwrap();
        assert_eq!(info.connection_id, api.connection_id());
    }

    #[test]
    fn distinct_handles_have_distinct_ids() {
        let a = api();
        let b = api();
        assert_ne!(a.connection_id(), b.connection_id());
        assert!(a.to_string().contains(&a.connection_id().to_string()));
    }

    #[test]
    fn config_reports_without_opening() {
        let settings = DocDbConfig::default().with_path("nowhere/missing.json");
        let result = config(&settings);
        assert_eq!(result.config, Some(settings));
    }

    #[test]
    fn open_requires_configured_path() {
        let err = DocDbApi::open(&DocDbConfig::default()).err().unwrap();
        assert!(matches!(err, DocDbError::InvalidStorePath(_, _)));
    }
}
