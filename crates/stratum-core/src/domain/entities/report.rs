use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::common::RelativePath;

/// What happened to a single manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationOutcome {
    /// The file was absent and has been written.
    Created,
    /// The file already existed; nothing was written.
    Skipped,
}

impl fmt::Display for CreationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Outcome for one entry in one invocation. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationResult {
    /// Root-joined path, as shown to the user.
    pub path: PathBuf,
    /// Path relative to the project root, as listed in the manifest.
    pub entry: RelativePath,
    pub outcome: CreationOutcome,
}

impl CreationResult {
    pub fn created(path: impl Into<PathBuf>, entry: RelativePath) -> Self {
        Self {
            path: path.into(),
            entry,
            outcome: CreationOutcome::Created,
        }
    }

    pub fn skipped(path: impl Into<PathBuf>, entry: RelativePath) -> Self {
        Self {
            path: path.into(),
            entry,
            outcome: CreationOutcome::Skipped,
        }
    }

    pub fn is_created(&self) -> bool {
        self.outcome == CreationOutcome::Created
    }
}

/// Results of one scaffold (or dry-run) invocation, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// Project root as given (`base_dir/project_name`).
    pub root: PathBuf,
    /// Absolute form of `root`, used in the summary line.
    pub resolved_root: PathBuf,
    /// `true` when nothing was written (planning only).
    pub dry_run: bool,
    pub results: Vec<CreationResult>,
}

impl ScaffoldReport {
    pub fn new(root: impl Into<PathBuf>, resolved_root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            resolved_root: resolved_root.into(),
            dry_run: false,
            results: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn created_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_created()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.results.len() - self.created_count()
    }

    pub fn created(&self) -> impl Iterator<Item = &CreationResult> {
        self.results.iter().filter(|r| r.is_created())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &CreationResult> {
        self.results.iter().filter(|r| !r.is_created())
    }

    /// `true` if the run changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.dry_run || self.created_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ScaffoldReport {
        let mut report = ScaffoldReport::new("demo", "/work/demo");
        report
            .results
            .push(CreationResult::created("demo/README.md", "README.md".into()));
        report
            .results
            .push(CreationResult::skipped("demo/.gitignore", ".gitignore".into()));
        report
            .results
            .push(CreationResult::created("demo/app/__init__.py", "app/__init__.py".into()));
        report
    }

    #[test]
    fn counts_split_by_outcome() {
        let r = report();
        assert_eq!(r.created_count(), 2);
        assert_eq!(r.skipped_count(), 1);
        assert_eq!(r.skipped().next().unwrap().entry.to_string(), ".gitignore");
        assert!(!r.is_noop());
    }

    #[test]
    fn outcome_display_is_lowercase() {
        assert_eq!(CreationOutcome::Created.to_string(), "created");
        assert_eq!(CreationOutcome::Skipped.to_string(), "skipped");
    }

    #[test]
    fn empty_report_is_noop() {
        assert!(ScaffoldReport::new("x", "/x").is_noop());
    }
}
