//! # Configuration
//!
//! Configuration is loaded with [`confique`], layering environment variables
//! over TOML files over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `DOCDB_PATH`, `DOCDB_INDENT`.
//! 2. **Local Config**: `./docdb.toml` in the working directory.
//! 3. **User Config**: `config.toml` in the OS-appropriate config directory
//!    (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `path` | none | Document file to open |
//! | `indent` | `4` | Spaces per indent level when writing the document |

use crate::error::{DocDbError, Result};
use crate::store::fs_backend::DEFAULT_INDENT;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const LOCAL_CONFIG_FILENAME: &str = "docdb.toml";
pub const USER_CONFIG_FILENAME: &str = "config.toml";

/// Configuration for docdb, stored in `docdb.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DocDbConfig {
    /// Path to the `.json` document file.
    #[config(env = "DOCDB_PATH")]
    pub path: Option<PathBuf>,

    /// Spaces per indent level when writing the document.
    #[config(env = "DOCDB_INDENT", default = 4)]
    pub indent: usize,
}

impl Default for DocDbConfig {
    fn default() -> Self {
        Self {
            path: None,
            indent: DEFAULT_INDENT,
        }
    }
}

impl DocDbConfig {
    /// Load from the standard locations.
    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_files())
    }

    /// Load from the environment and the given files, earlier files winning.
    pub fn load_from(files: &[PathBuf]) -> Result<Self> {
        let mut builder = DocDbConfig::builder().env();
        for file in files {
            builder = builder.file(file.clone());
        }
        builder.load().map_err(DocDbError::Config)
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Config files checked by [`DocDbConfig::load`], highest priority first.
pub fn default_config_files() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from(LOCAL_CONFIG_FILENAME)];
    if let Some(dirs) = ProjectDirs::from("com", "docdb", "docdb") {
        files.push(dirs.config_dir().join(USER_CONFIG_FILENAME));
    }
    files
}
