use super::backend::StorageBackend;
use crate::error::{DocDbError, Result};
use crate::model::Document;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DOCUMENT_EXT: &str = "json";
pub const DEFAULT_INDENT: usize = 4;

/// A document persisted as one pretty-printed JSON file.
pub struct FsBackend {
    path: PathBuf,
    indent: usize,
}

impl FsBackend {
    /// Wraps `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            indent: DEFAULT_INDENT,
        }
    }

    /// Wraps an existing document file, checking that it can be one.
    ///
    /// The path must exist, be a regular file, and carry a `.json` extension.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        check_extension(&path)?;
        if !path.exists() {
            return Err(DocDbError::InvalidStorePath(path, "file does not exist".into()));
        }
        if !path.is_file() {
            return Err(DocDbError::InvalidStorePath(path, "not a regular file".into()));
        }
        Ok(Self::new(path))
    }

    /// Creates an empty document at `path` unless one is already there.
    ///
    /// Returns `true` when a new file was written.
    pub fn create(path: impl Into<PathBuf>) -> Result<(Self, bool)> {
        let path = path.into();
        check_extension(&path)?;
        if path.exists() {
            return Ok((Self::open(path)?, false));
        }

        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let backend = Self::new(path);
        backend.save_document(&Document::new())?;
        Ok((backend, true))
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Writes `content` to `tmp_path` and renames it over the document.
    ///
    /// An existing document keeps its permissions.
    fn write_replacement(&self, tmp_path: &Path, content: &[u8]) -> io::Result<()> {
        fs::write(tmp_path, content)?;
        match fs::metadata(&self.path) {
            Ok(meta) => fs::set_permissions(tmp_path, meta.permissions())?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        fs::rename(tmp_path, &self.path)
    }

    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document");
        let tmp_name = format!(".{}-{}.tmp", stem, Uuid::new_v4());
        match self.path.parent() {
            Some(parent) => parent.join(tmp_name),
            None => PathBuf::from(tmp_name),
        }
    }
}

impl StorageBackend for FsBackend {
    fn load_document(&self) -> Result<Document> {
        let content = fs::read_to_string(&self.path).map_err(DocDbError::Io)?;
        Document::from_json_str(&content)
    }

    fn save_document(&self, doc: &Document) -> Result<()> {
        let content = render_document(doc, self.indent)?;

        // Atomic write: the old file stays in place until the rename
        let tmp_path = self.tmp_path();
        if let Err(e) = self.write_replacement(&tmp_path, &content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DocDbError::Io(e));
        }

        log::debug!("Persisted {} root keys to {}", doc.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Serializes a document the way it is stored on disk: UTF-8, non-ASCII kept
/// verbatim, `indent` spaces per level, trailing newline.
pub fn render_document(doc: &Document, indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser).map_err(DocDbError::Serialization)?;
    buf.push(b'\n');
    Ok(buf)
}

fn check_extension(path: &Path) -> Result<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == DOCUMENT_EXT);
    if is_json {
        Ok(())
    } else {
        Err(DocDbError::InvalidStorePath(
            path.to_path_buf(),
            "the document must be a .json file".into(),
        ))
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path).map_err(DocDbError::Io)?;
    }
    Ok(())
}
