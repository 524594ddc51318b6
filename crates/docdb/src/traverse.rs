//! # Traversal
//!
//! Walking a [`KeyPath`] through a loaded [`Document`]. Three walks exist, one
//! per operation, and they differ only in how they treat a level that is
//! missing or is not a mapping:
//!
//! | walk | missing level | non-mapping level |
//! |------|---------------|-------------------|
//! | [`lookup`] (read) | not found | not found |
//! | [`vivify_parent`] (write) | created as `{}` | `NotAMapping` |
//! | [`existing_parent`] (delete) | no-op | `NotAMapping` |
//!
//! The parent walks stop one level above the last sub-key and hand back that
//! mapping, so the caller can insert or remove the final entry itself.

use crate::error::{DocDbError, Result};
use crate::key::KeyPath;
use crate::model::Document;
use serde_json::{Map, Value};

/// Finds the value addressed by `key`, if every level exists.
pub fn lookup<'a>(doc: &'a Document, key: &KeyPath) -> Option<&'a Value> {
    let mut current = doc.get(key.root())?;
    for (depth, sub) in key.subkeys().iter().enumerate() {
        let next = match current {
            Value::Object(map) => map.get(sub),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => {
                log::debug!("Lookup of {} stopped below {}", key, key.prefix(depth));
                return None;
            }
        }
    }
    Some(current)
}

/// Returns the mapping that holds the last sub-key, creating empty mappings
/// for every missing level on the way.
///
/// The root key must already exist and `key` must be nested.
pub fn vivify_parent<'a>(doc: &'a mut Document, key: &KeyPath) -> Result<&'a mut Map<String, Value>> {
    let Some((_, intermediates)) = key.subkeys().split_last() else {
        return Err(DocDbError::InvalidKey(format!("{} has no sub-keys", key)));
    };
    let root = doc
        .entries_mut()
        .get_mut(key.root())
        .ok_or_else(|| DocDbError::KeyNotFound(key.root().to_string()))?;

    let mut current = as_mapping_mut(root, key, 0)?;
    for (i, sub) in intermediates.iter().enumerate() {
        let next = current
            .entry(sub.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        current = as_mapping_mut(next, key, i + 1)?;
    }
    Ok(current)
}

/// Returns the mapping that holds the last sub-key without creating anything.
///
/// `Ok(None)` means some level along the way is absent, so there is nothing
/// below it to remove.
pub fn existing_parent<'a>(
    doc: &'a mut Document,
    key: &KeyPath,
) -> Result<Option<&'a mut Map<String, Value>>> {
    let Some((_, intermediates)) = key.subkeys().split_last() else {
        return Err(DocDbError::InvalidKey(format!("{} has no sub-keys", key)));
    };
    let Some(root) = doc.entries_mut().get_mut(key.root()) else {
        return Ok(None);
    };

    let mut current = as_mapping_mut(root, key, 0)?;
    for (i, sub) in intermediates.iter().enumerate() {
        match current.get_mut(sub) {
            Some(next) => current = as_mapping_mut(next, key, i + 1)?,
            None => {
                log::debug!("Nothing to delete below {}", key.prefix(i + 1));
                return Ok(None);
            }
        }
    }
    Ok(Some(current))
}

fn as_mapping_mut<'a>(
    value: &'a mut Value,
    key: &KeyPath,
    depth: usize,
) -> Result<&'a mut Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DocDbError::NotAMapping {
            path: key.prefix(depth),
        }),
    }
}
