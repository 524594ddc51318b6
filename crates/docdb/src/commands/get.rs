use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::key::KeyPath;
use crate::store::backend::StorageBackend;
use crate::store::document_store::DocumentStore;

pub fn run<B: StorageBackend>(store: &DocumentStore<B>, key: &KeyPath) -> Result<CmdResult> {
    let value = store.read(key)?;
    let mut result = CmdResult::default().with_key(key.clone());

    if value.is_none() {
        result.add_message(CmdMessage::warning(format!("Key not found: {}", key)));
    }

    Ok(result.with_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::fixtures::users_backend;
    use serde_json::json;

    #[test]
    fn returns_found_value_without_messages() {
        let store = DocumentStore::with_backend(users_backend());
        let key = KeyPath::parse("users/user1/age").unwrap();

        let result = run(&store, &key).unwrap();
        assert_eq!(result.value, Some(json!("30")));
        assert_eq!(result.key, Some(key));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn warns_on_missing_key() {
        let store = DocumentStore::with_backend(users_backend());
        let key = KeyPath::parse("users/user7").unwrap();

        let result = run(&store, &key).unwrap();
        assert!(result.value.is_none());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Key not found: users/user7");
    }
}
