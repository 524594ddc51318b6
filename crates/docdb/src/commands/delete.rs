use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::key::KeyPath;
use crate::store::backend::StorageBackend;
use crate::store::document_store::DocumentStore;

pub fn run<B: StorageBackend>(store: &DocumentStore<B>, key: &KeyPath) -> Result<CmdResult> {
    let removed = store.delete(key)?;
    let mut result = CmdResult::default().with_key(key.clone());

    match removed {
        Some(_) => result.add_message(CmdMessage::success(format!("Deleted {}", key))),
        None => result.add_message(CmdMessage::info(format!("Nothing stored at {}", key))),
    }

    Ok(result.with_value(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::fixtures::users_backend;
    use serde_json::json;

    #[test]
    fn reports_removed_value() {
        let store = DocumentStore::with_backend(users_backend());
        let key = KeyPath::parse("users/user1/age").unwrap();

        let result = run(&store, &key).unwrap();
        assert_eq!(result.value, Some(json!("30")));
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Deleted users/user1/age");
    }

    #[test]
    fn absent_key_is_informational() {
        let store = DocumentStore::with_backend(users_backend());
        let key = KeyPath::parse("ghost").unwrap();

        let result = run(&store, &key).unwrap();
        assert!(result.value.is_none());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
