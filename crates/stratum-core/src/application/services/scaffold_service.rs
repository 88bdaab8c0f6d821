//! Scaffold Service - main application orchestrator.
//!
//! This service materializes a [`Manifest`] under a project root:
//! 1. Create the root directory if absent
//! 2. For every entry, in manifest order, create missing parent directories
//!    and write the rendered body unless the file already exists
//! 3. Resolve the absolute root for the summary
//!
//! Each file moves independently from `Absent -> Created` or stays
//! `Present -> Skipped`. There is no rollback: the first filesystem error
//! aborts the run and everything written before it stays on disk. A re-run
//! then skips those files and picks up where the failed run stopped.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, WriteOutcome},
    domain::{
        CreationResult, DomainValidator as validator, Manifest, ManifestEntry, ProjectName,
        RenderContext, ScaffoldReport,
    },
    error::StratumResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    manifest: Manifest,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service for a manifest.
    ///
    /// The manifest is validated once here so every later call can assume
    /// unique, root-relative paths.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stratum_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     manifest,   // Manifest
    ///     filesystem, // Box<dyn Filesystem>
    /// )?;
    /// ```
    pub fn new(manifest: Manifest, filesystem: Box<dyn Filesystem>) -> StratumResult<Self> {
        validator::validate_manifest(&manifest)?;
        Ok(Self {
            manifest,
            filesystem,
        })
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Ensure one manifest entry exists under `root`.
    ///
    /// Missing ancestor directories are created first (including `root`).
    /// An existing file is never opened for writing.
    #[instrument(skip_all, fields(path = %entry.path()))]
    pub fn ensure_file(
        &self,
        root: &Path,
        entry: &ManifestEntry,
        ctx: &RenderContext,
    ) -> StratumResult<CreationResult> {
        let path = root.join(entry.path());

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        if self.filesystem.exists(&path) {
            debug!("File exists, skipping");
            return Ok(CreationResult::skipped(path, entry.path().clone()));
        }

        let content = entry.render(ctx);
        match self.filesystem.write_new_file(&path, &content)? {
            WriteOutcome::Written => {
                debug!(bytes = content.len(), "File created");
                Ok(CreationResult::created(path, entry.path().clone()))
            }
            WriteOutcome::AlreadyExists => {
                // Appeared between the existence check and the write.
                debug!("File appeared concurrently, skipping");
                Ok(CreationResult::skipped(path, entry.path().clone()))
            }
        }
    }

    /// Scaffold the project under `base_dir/project_name`.
    pub fn scaffold(
        &self,
        project_name: &ProjectName,
        base_dir: impl AsRef<Path>,
    ) -> StratumResult<ScaffoldReport> {
        self.scaffold_with(project_name, base_dir, |_| {})
    }

    /// Like [`Self::scaffold`], calling `on_result` as soon as each entry is
    /// settled so callers can report progress before a later entry fails.
    #[instrument(
        skip_all,
        fields(
            project = %project_name,
            manifest = %self.manifest.name(),
            base_dir = %base_dir.as_ref().display()
        )
    )]
    pub fn scaffold_with<F>(
        &self,
        project_name: &ProjectName,
        base_dir: impl AsRef<Path>,
        mut on_result: F,
    ) -> StratumResult<ScaffoldReport>
    where
        F: FnMut(&CreationResult),
    {
        let base_dir = base_dir.as_ref();
        let root = base_dir.join(project_name.as_str());
        let ctx = RenderContext::new(project_name.as_str());

        info!(entries = self.manifest.len(), "Scaffolding {}", root.display());

        self.filesystem.create_dir_all(&root)?;

        let mut results = Vec::with_capacity(self.manifest.len());
        for entry in self.manifest.entries() {
            let result = self.ensure_file(&root, entry, &ctx)?;
            on_result(&result);
            results.push(result);
        }

        let resolved = self.filesystem.canonicalize(&root)?;
        let mut report = ScaffoldReport::new(root, resolved);
        report.results = results;

        info!(
            created = report.created_count(),
            skipped = report.skipped_count(),
            "Scaffold completed"
        );
        Ok(report)
    }

    /// Report what [`Self::scaffold`] would do without writing anything.
    #[instrument(skip_all, fields(project = %project_name))]
    pub fn plan(
        &self,
        project_name: &ProjectName,
        base_dir: impl AsRef<Path>,
    ) -> StratumResult<ScaffoldReport> {
        let base_dir = base_dir.as_ref();
        let root = base_dir.join(project_name.as_str());

        let results = self
            .manifest
            .entries()
            .iter()
            .map(|entry| {
                let path = root.join(entry.path());
                if self.filesystem.exists(&path) {
                    CreationResult::skipped(path, entry.path().clone())
                } else {
                    CreationResult::created(path, entry.path().clone())
                }
            })
            .collect();

        let resolved = self.resolve_planned_root(base_dir, &root, project_name)?;
        let mut report = ScaffoldReport::new(root, resolved);
        report.dry_run = true;
        report.results = results;

        debug!(
            would_create = report.created_count(),
            would_skip = report.skipped_count(),
            "Plan computed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Absolute root for a root that may not exist yet.
    fn resolve_planned_root(
        &self,
        base_dir: &Path,
        root: &Path,
        project_name: &ProjectName,
    ) -> StratumResult<PathBuf> {
        if self.filesystem.exists(root) {
            return self.filesystem.canonicalize(root);
        }

        let base = if base_dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            base_dir
        };

        if self.filesystem.exists(base) {
            Ok(self.filesystem.canonicalize(base)?.join(project_name.as_str()))
        } else {
            Ok(root.to_path_buf())
        }
    }
}
