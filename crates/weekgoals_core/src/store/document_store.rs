//! Document store contract and implementations.
//!
//! # Responsibility
//! - Define the capability set the goals service needs from document
//!   storage: existence checks, nested folder creation, full-text read,
//!   create and overwrite.
//! - Provide `FsDocumentStore` (real, rooted at a base directory) and
//!   `MemoryDocumentStore` (fake for tests and staleness assertions).
//!
//! # Invariants
//! - Paths are store-relative, `/`-separated, and must not escape the
//!   store root.
//! - `read` distinguishes "absent" (`Ok(None)`) from I/O failure.
//! - `create_folder` is idempotent and creates parents as needed.

use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Result type for document store APIs.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for document access.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying I/O failure, with the store-relative path that failed.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// Path is absolute, escapes the store root, or is otherwise unusable.
    InvalidPath(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "storage failure at `{path}`: {source}"),
            Self::InvalidPath(path) => write!(f, "invalid store path: `{path}`"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidPath(_) => None,
        }
    }
}

/// Capability contract over document storage.
///
/// The goals service composes exactly these five operations; anything
/// richer (watching, metadata, partial reads) is out of scope.
pub trait DocumentStore {
    /// Returns whether a document or folder exists at `path`.
    fn exists(&self, path: &str) -> StoreResult<bool>;
    /// Creates the folder at `path`, including missing parents. Idempotent.
    fn create_folder(&self, path: &str) -> StoreResult<()>;
    /// Reads the full text of the document at `path`; `None` when absent.
    fn read(&self, path: &str) -> StoreResult<Option<String>>;
    /// Creates a new document at `path` with `content`.
    fn create(&self, path: &str, content: &str) -> StoreResult<()>;
    /// Replaces the full content of the document at `path`.
    fn overwrite(&self, path: &str, content: &str) -> StoreResult<()>;
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn exists(&self, path: &str) -> StoreResult<bool> {
        (**self).exists(path)
    }
    fn create_folder(&self, path: &str) -> StoreResult<()> {
        (**self).create_folder(path)
    }
    fn read(&self, path: &str) -> StoreResult<Option<String>> {
        (**self).read(path)
    }
    fn create(&self, path: &str, content: &str) -> StoreResult<()> {
        (**self).create(path, content)
    }
    fn overwrite(&self, path: &str, content: &str) -> StoreResult<()> {
        (**self).overwrite(path, content)
    }
}

/// Filesystem-backed document store rooted at a base directory.
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Creates a store rooted at `root`. The directory itself is created
    /// lazily on the first folder/document write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> StoreResult<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative.components().any(|component| {
            !matches!(component, Component::Normal(_) | Component::CurDir)
        });
        if path.is_empty() || escapes {
            return Err(StoreError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }

    fn io_error(path: &str, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_string(),
            source,
        }
    }
}

impl DocumentStore for FsDocumentStore {
    fn exists(&self, path: &str) -> StoreResult<bool> {
        Ok(self.resolve(path)?.exists())
    }

    fn create_folder(&self, path: &str) -> StoreResult<()> {
        let target = self.resolve(path)?;
        std::fs::create_dir_all(&target).map_err(|err| Self::io_error(path, err))
    }

    fn read(&self, path: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.resolve(path)?) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error(path, err)),
        }
    }

    fn create(&self, path: &str, content: &str) -> StoreResult<()> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|err| Self::io_error(path, err))?;
        }
        std::fs::write(&target, content).map_err(|err| Self::io_error(path, err))
    }

    fn overwrite(&self, path: &str, content: &str) -> StoreResult<()> {
        std::fs::write(self.resolve(path)?, content).map_err(|err| Self::io_error(path, err))
    }
}

/// In-memory document store.
///
/// Test seam: integration tests hand the service a `&MemoryDocumentStore`
/// and keep direct access to seed or mutate documents behind the
/// service's back (cache staleness assertions need exactly that).
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: Mutex<BTreeMap<String, String>>,
    folders: Mutex<BTreeSet<String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn documents(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn folders(&self) -> std::sync::MutexGuard<'_, BTreeSet<String>> {
        self.folders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored documents.
    pub fn document_count(&self) -> usize {
        self.documents().len()
    }

    /// Returns whether the folder was ever created.
    pub fn has_folder(&self, path: &str) -> bool {
        self.folders().contains(path)
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn exists(&self, path: &str) -> StoreResult<bool> {
        Ok(self.documents().contains_key(path) || self.folders().contains(path))
    }

    fn create_folder(&self, path: &str) -> StoreResult<()> {
        let mut folders = self.folders();
        let mut current = String::new();
        for part in path.split('/').filter(|part| !part.is_empty()) {
            if current.is_empty() {
                current = part.to_string();
            } else {
                current = format!("{current}/{part}");
            }
            folders.insert(current.clone());
        }
        Ok(())
    }

    fn read(&self, path: &str) -> StoreResult<Option<String>> {
        Ok(self.documents().get(path).cloned())
    }

    fn create(&self, path: &str, content: &str) -> StoreResult<()> {
        self.documents()
            .insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn overwrite(&self, path: &str, content: &str) -> StoreResult<()> {
        self.documents()
            .insert(path.to_string(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentStore, FsDocumentStore, MemoryDocumentStore, StoreError};

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryDocumentStore::new();
        assert_eq!(store.read("Goals/2025-W05.md").unwrap(), None);
        store.create("Goals/2025-W05.md", "# hello").unwrap();
        assert!(store.exists("Goals/2025-W05.md").unwrap());
        assert_eq!(
            store.read("Goals/2025-W05.md").unwrap().as_deref(),
            Some("# hello")
        );
        store.overwrite("Goals/2025-W05.md", "# changed").unwrap();
        assert_eq!(
            store.read("Goals/2025-W05.md").unwrap().as_deref(),
            Some("# changed")
        );
    }

    #[test]
    fn memory_store_creates_nested_folders() {
        let store = MemoryDocumentStore::new();
        store.create_folder("a/b/c").unwrap();
        assert!(store.has_folder("a"));
        assert!(store.has_folder("a/b"));
        assert!(store.has_folder("a/b/c"));
    }

    #[test]
    fn fs_store_rejects_escaping_paths() {
        let store = FsDocumentStore::new("/tmp/does-not-matter");
        let err = store.read("../outside.md").unwrap_err();
        assert!(matches!(err, StoreError::InvalidPath(_)));
        let err = store.read("").unwrap_err();
        assert!(matches!(err, StoreError::InvalidPath(_)));
    }
}
