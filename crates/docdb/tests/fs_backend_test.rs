use docdb::error::DocDbError;
use docdb::model::Document;
use docdb::store::backend::StorageBackend;
use docdb::store::fs_backend::FsBackend;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_open_requires_existing_json_file() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        FsBackend::open(&missing),
        Err(DocDbError::InvalidStorePath(_, _))
    ));

    let wrong_ext = dir.path().join("store.txt");
    fs::write(&wrong_ext, "{}").unwrap();
    assert!(matches!(
        FsBackend::open(&wrong_ext),
        Err(DocDbError::InvalidStorePath(_, _))
    ));

    let as_dir = dir.path().join("folder.json");
    fs::create_dir(&as_dir).unwrap();
    assert!(matches!(
        FsBackend::open(&as_dir),
        Err(DocDbError::InvalidStorePath(_, _))
    ));
}

#[test]
fn test_load_and_save_round_trip() {
    let (_dir, path) = setup(r#"{"users": {"user1": {"age": "30"}}, "tags": ["a", "b"]}"#);
    let backend = FsBackend::open(&path).unwrap();

    let doc = backend.load_document().unwrap();
    backend.save_document(&doc).unwrap();
    let reloaded = backend.load_document().unwrap();

    assert_eq!(doc, reloaded);
}

#[test]
fn test_save_is_indented_and_truncated() {
    let long = format!("{{\"padding\": \"{}\"}}", "x".repeat(500));
    let (_dir, path) = setup(&long);
    let backend = FsBackend::open(&path).unwrap();

    let mut doc = Document::new();
    doc.insert("k", json!("v"));
    backend.save_document(&doc).unwrap();

    let on_disk = fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, "{\n    \"k\": \"v\"\n}\n");
}

#[test]
fn test_custom_indent() {
    let (_dir, path) = setup("{}");
    let backend = FsBackend::open(&path).unwrap().with_indent(2);

    let mut doc = Document::new();
    doc.insert("a", json!({"b": "c"}));
    backend.save_document(&doc).unwrap();

    let on_disk = fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, "{\n  \"a\": {\n    \"b\": \"c\"\n  }\n}\n");
}

#[test]
fn test_atomic_write_artifacts() {
    let (dir, path) = setup("{}");
    let backend = FsBackend::open(&path).unwrap();

    backend.save_document(&Document::new()).unwrap();

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[cfg(unix)]
#[test]
fn test_save_keeps_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, path) = setup(r#"{"secret": "1"}"#);
    fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();
    let backend = FsBackend::open(&path).unwrap();

    let doc = backend.load_document().unwrap();
    backend.save_document(&doc).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn test_failed_save_cleans_up_tmp_file() {
    let dir = TempDir::new().unwrap();
    // a non-empty directory cannot be replaced by the rename
    let blocked = dir.path().join("blocked.json");
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("keep"), "x").unwrap();
    let backend = FsBackend::new(&blocked);

    assert!(matches!(
        backend.save_document(&Document::new()),
        Err(DocDbError::Io(_))
    ));

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert!(blocked.join("keep").exists());
}

#[test]
fn test_malformed_content_is_fatal() {
    let (_dir, path) = setup("[1, 2, 3]");
    let backend = FsBackend::open(&path).unwrap();
    assert!(matches!(
        backend.load_document(),
        Err(DocDbError::MalformedDocument(_))
    ));

    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        backend.load_document(),
        Err(DocDbError::Serialization(_))
    ));
}

#[test]
fn test_file_removed_after_open_is_io_error() {
    let (_dir, path) = setup("{}");
    let backend = FsBackend::open(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert!(matches!(backend.load_document(), Err(DocDbError::Io(_))));
}

#[test]
fn test_create_writes_empty_document_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("store.json");

    let (backend, created) = FsBackend::create(&path).unwrap();
    assert!(created);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    assert!(backend.load_document().unwrap().is_empty());

    fs::write(&path, r#"{"kept": "yes"}"#).unwrap();
    let (backend, created) = FsBackend::create(&path).unwrap();
    assert!(!created);
    assert_eq!(backend.load_document().unwrap().get("kept"), Some(&json!("yes")));
}

#[test]
fn test_create_rejects_wrong_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.yaml");
    assert!(FsBackend::create(&path).is_err());
    assert!(!path.exists());
}
