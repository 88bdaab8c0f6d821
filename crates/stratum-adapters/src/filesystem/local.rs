//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stratum_core::{
    application::{ApplicationError, ports::Filesystem, ports::WriteOutcome},
    error::{StratumError, StratumResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StratumResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink still occupies the name.
        path.symlink_metadata().is_ok()
    }

    fn write_new_file(&self, path: &Path, content: &str) -> StratumResult<WriteOutcome> {
        // `create_new` makes the existence check and the creation one atomic
        // step, so an existing file is never truncated.
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                trace!(path = %path.display(), "create_new refused existing file");
                return Ok(WriteOutcome::AlreadyExists);
            }
            Err(e) => return Err(map_io_error(path, e, "create file")),
        };

        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| map_io_error(path, e, "write file"))?;

        Ok(WriteOutcome::Written)
    }

    fn canonicalize(&self, path: &Path) -> StratumResult<PathBuf> {
        std::fs::canonicalize(path).map_err(|e| {
            ApplicationError::RootResolution {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> StratumError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}
