//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stratum_core::{
    application::{ApplicationError, ports::Filesystem, ports::WriteOutcome},
    error::StratumResult,
};

/// Prefix used to fake absolute paths.
const MEMORY_ROOT: &str = "/memory";

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the service and
/// inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    write_count: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Place a file (and its parents) without counting it as a write.
    pub fn seed_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of successful `write_new_file` calls.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|i| i.write_count).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StratumResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterLock)?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                operation: "create directory",
                reason: "a file exists at this path".into(),
            }
            .into());
        }

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn write_new_file(&self, path: &Path, content: &str) -> StratumResult<WriteOutcome> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterLock)?;

        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Ok(WriteOutcome::AlreadyExists);
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    operation: "create file",
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.write_count += 1;
        Ok(WriteOutcome::Written)
    }

    fn canonicalize(&self, path: &Path) -> StratumResult<PathBuf> {
        if !self.exists(path) {
            return Err(ApplicationError::RootResolution {
                path: path.to_path_buf(),
                reason: "no such file or directory".into(),
            }
            .into());
        }
        Ok(Path::new(MEMORY_ROOT).join(path))
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_new_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        assert_eq!(
            fs.write_new_file(Path::new("a/b.txt"), "x").unwrap(),
            WriteOutcome::Written
        );
    }

    #[test]
    fn seeded_files_are_never_replaced() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("demo/.gitignore", "custom");

        assert_eq!(
            fs.write_new_file(Path::new("demo/.gitignore"), "generated")
                .unwrap(),
            WriteOutcome::AlreadyExists
        );
        assert_eq!(fs.read_file("demo/.gitignore").as_deref(), Some("custom"));
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn directory_over_file_is_error() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("demo/app", "not a dir");
        assert!(fs.create_dir_all(Path::new("demo/app")).is_err());
    }

    #[test]
    fn canonicalize_prefixes_memory_root() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("demo")).unwrap();
        assert_eq!(
            fs.canonicalize(Path::new("demo")).unwrap(),
            PathBuf::from("/memory/demo")
        );
        assert!(fs.canonicalize(Path::new("absent")).is_err());
    }
}
