use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::StoreInfo;
use crate::store::backend::StorageBackend;
use crate::store::document_store::DocumentStore;
use uuid::Uuid;

pub fn run<B: StorageBackend>(store: &DocumentStore<B>, connection_id: Uuid) -> Result<CmdResult> {
    let doc = store.snapshot()?;
    let info = StoreInfo {
        connection_id,
        location: store.location(),
        created_at: store.created_at(),
        last_accessed: store.last_accessed(),
        last_modified: store.last_modified(),
        root_keys: doc.len(),
    };
    Ok(CmdResult::default().with_info(info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyPath;
    use crate::store::mem_backend::fixtures::users_backend;
    use std::path::PathBuf;

    #[test]
    fn reports_bookkeeping() {
        let store = DocumentStore::with_backend(users_backend());
        let id = Uuid::new_v4();

        let before = run(&store, id).unwrap().info.unwrap();
        assert_eq!(before.connection_id, id);
        assert_eq!(before.root_keys, 2);
        assert_eq!(before.location, PathBuf::from("memory://document.json"));
        assert!(before.last_accessed.is_none());

        store.read(&KeyPath::parse("name").unwrap()).unwrap();
        let after = run(&store, id).unwrap().info.unwrap();
        assert!(after.last_accessed.is_some());
        assert!(after.last_modified.is_none());
        assert_eq!(after.created_at, before.created_at);
    }
}
