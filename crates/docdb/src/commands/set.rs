use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::key::KeyPath;
use crate::store::backend::StorageBackend;
use crate::store::document_store::DocumentStore;
use serde_json::Value;

pub fn run<B: StorageBackend>(
    store: &DocumentStore<B>,
    key: &KeyPath,
    value: Value,
) -> Result<CmdResult> {
    store.write(key, value.clone())?;

    let mut result = CmdResult::default()
        .with_key(key.clone())
        .with_value(Some(value));
    result.add_message(CmdMessage::success(format!("Set {}", key)));
    Ok(result)
}
