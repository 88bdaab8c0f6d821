//! Application layer errors.
//!
//! These errors represent failures in orchestration, not input rules.
//! Input and manifest errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a manifest.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A filesystem operation failed (permission denied, disk full, ...).
    #[error("Failed to {operation} at {path}: {reason}")]
    Filesystem {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// The project root could not be resolved to an absolute path.
    #[error("Cannot resolve project root {path}: {reason}")]
    RootResolution { path: PathBuf, reason: String },

    /// Adapter state is unusable (poisoned lock in the in-memory adapter).
    #[error("Filesystem adapter state is unavailable")]
    AdapterLock,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files created before the failure were kept; re-running skips them".into(),
            ],
            Self::RootResolution { path, .. } => vec![
                format!("Could not resolve: {}", path.display()),
                "Check that the current directory still exists".into(),
            ],
            Self::AdapterLock => vec!["Retry the operation".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Io,
            Self::RootResolution { .. } => ErrorCategory::NotFound,
            Self::AdapterLock => ErrorCategory::Internal,
        }
    }
}
