//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stratum-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::StratumResult;

/// Result of a create-only write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and now holds the given content.
    Written,
    /// The file already existed and was left untouched.
    AlreadyExists,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stratum_adapters::filesystem::LocalFilesystem` (production)
/// - `stratum_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - There is no overwrite operation. `write_new_file` must never truncate
///   or modify an existing file, whoever created it.
/// - Content is UTF-8 text.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> StratumResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Write `content` to `path` only if nothing exists there yet.
    ///
    /// The parent directory must already exist.
    fn write_new_file(&self, path: &Path, content: &str) -> StratumResult<WriteOutcome>;

    /// Absolute, normalized form of an existing path.
    fn canonicalize(&self, path: &Path) -> StratumResult<PathBuf>;
}
