//! # Key Paths
//!
//! Every operation addresses the document with a slash separated key:
//!
//! ```text
//! users              -> root "users", no sub-keys
//! users/user1/age    -> root "users", sub-keys ["user1", "age"]
//! ```
//!
//! The first segment is the **root key**, a key of the document's top-level
//! mapping. The remaining segments form the **sub-key chain**, walked in order
//! through nested mappings below the root value.
//!
//! There is no escape syntax, so a key segment can never contain `/`.
//! Keys that are blank after trimming, or that contain an empty segment
//! (`/a`, `a//b`, `a/`), are rejected with [`DocDbError::InvalidKey`].

use crate::error::{DocDbError, Result};
use std::str::FromStr;

pub const SEPARATOR: char = '/';

/// A parsed key: the root key plus the ordered chain of nested sub-keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    root: String,
    subkeys: Vec<String>,
}

impl KeyPath {
    pub fn new(root: impl Into<String>, subkeys: Vec<String>) -> Result<Self> {
        let root = root.into();
        if root.is_empty() {
            return Err(DocDbError::InvalidKey("root key cannot be empty".into()));
        }
        if subkeys.iter().any(|s| s.is_empty()) {
            return Err(DocDbError::InvalidKey(format!(
                "empty sub-key in {}{}{}",
                root,
                SEPARATOR,
                subkeys.join(&SEPARATOR.to_string())
            )));
        }
        Ok(Self { root, subkeys })
    }

    /// Parses a raw key such as `"users/user1/age"`.
    ///
    /// Surrounding whitespace is trimmed before splitting.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DocDbError::InvalidKey("key cannot be empty".into()));
        }

        let mut segments = trimmed.split(SEPARATOR);
        // split always yields at least one item
        let root = segments.next().unwrap_or_default();
        let subkeys: Vec<String> = segments.map(str::to_string).collect();

        if root.is_empty() || subkeys.iter().any(|s| s.is_empty()) {
            return Err(DocDbError::InvalidKey(format!(
                "empty segment in '{}'",
                trimmed
            )));
        }

        Ok(Self {
            root: root.to_string(),
            subkeys,
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn subkeys(&self) -> &[String] {
        &self.subkeys
    }

    pub fn is_nested(&self) -> bool {
        !self.subkeys.is_empty()
    }

    /// The key made of the root and the first `depth` sub-keys.
    ///
    /// Used to name the level where a traversal stopped.
    pub fn prefix(&self, depth: usize) -> String {
        let mut out = self.root.clone();
        for sub in self.subkeys.iter().take(depth) {
            out.push(SEPARATOR);
            out.push_str(sub);
        }
        out
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix(self.subkeys.len()))
    }
}

impl FromStr for KeyPath {
    type Err = DocDbError;

    fn from_str(s: &str) -> Result<Self> {
        KeyPath::parse(s)
    }
}
