// ============================================================================
// domain/error.rs - MANIFEST & INPUT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid manifest '{manifest}': {reason}")]
    InvalidManifest { manifest: String, reason: String },

    #[error("Duplicate path in manifest: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Empty path not allowed in manifest")]
    EmptyPath,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use a plain directory name without path separators".into(),
                "Examples: billing_api, my-backend, service123".into(),
            ],
            Self::InvalidManifest { manifest, .. }
            | Self::DuplicatePath { path: manifest }
            | Self::AbsolutePathNotAllowed { path: manifest }
            | Self::PathEscapesRoot { path: manifest } => vec![
                format!("The built-in manifest is malformed near '{}'", manifest),
                "This is a packaging bug, please report it".into(),
            ],
            Self::EmptyPath => vec!["The built-in manifest contains an empty path".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
