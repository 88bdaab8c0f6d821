use std::collections::HashSet;

use crate::domain::{
    entities::{
        common::RelativePath,
        template::{RenderContext, TemplateBody, TemplateSource},
    },
    error::DomainError,
};

/// One file the scaffolder materializes.
///
/// Immutable once built; the built-in manifest constructs these from
/// compile-time strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    path: RelativePath,
    body: TemplateBody,
}

impl ManifestEntry {
    pub fn new(path: impl Into<RelativePath>, body: TemplateBody) -> Self {
        Self {
            path: path.into(),
            body,
        }
    }

    /// Entry whose body is copied verbatim.
    pub fn literal(path: impl Into<RelativePath>, body: impl Into<TemplateSource>) -> Self {
        Self::new(path, TemplateBody::Literal(body.into()))
    }

    /// Entry whose body mentions `{{PROJECT_NAME}}`.
    pub fn parameterized(path: impl Into<RelativePath>, body: impl Into<TemplateSource>) -> Self {
        Self::new(path, TemplateBody::Parameterized(body.into()))
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn body(&self) -> &TemplateBody {
        &self.body
    }

    /// Content written to disk for this entry.
    pub fn render(&self, ctx: &RenderContext) -> String {
        self.body.render(ctx)
    }
}

/// Ordered, named list of entries.
///
/// Order only matters for reporting; parent directories are created on
/// demand for each entry, so no entry depends on another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    name: String,
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    pub fn with_entry(mut self, entry: ManifestEntry) -> Self {
        self.push(entry);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.entries.iter().map(ManifestEntry::path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject empty manifests and duplicate paths.
    ///
    /// Path shape (relative, no `..`) is already guaranteed by `RelativePath`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidManifest {
                manifest: self.name.clone(),
                reason: "manifest has no entries".into(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.path.to_string(),
                });
            }
        }

        Ok(())
    }
}
