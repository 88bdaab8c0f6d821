// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stratum.
//!
//! This module contains pure logic with no I/O. Filesystem access is
//! expressed through the `Filesystem` port in the application layer.
//!
//! - **Manifest**: ordered (relative path, template body) pairs
//! - **Template bodies**: literal or `{{PROJECT_NAME}}`-parameterized text,
//!   normalized before writing
//! - **Reports**: per-entry `Created` / `Skipped` outcomes
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    manifest::{Manifest, ManifestEntry},
    report::{CreationOutcome, CreationResult, ScaffoldReport},
    template::{
        PROJECT_NAME_PLACEHOLDER, RenderContext, TemplateBody, TemplateSource, normalize_body,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::ProjectName;

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_delegates_to_manifest() {
        let manifest = Manifest::new("one").with_entry(ManifestEntry::literal("a.txt", "a"));
        assert!(DomainValidator::validate_manifest(&manifest).is_ok());
        assert!(DomainValidator::validate_manifest(&Manifest::new("none")).is_err());
    }

    #[test]
    fn validator_parses_project_name() {
        let name = DomainValidator::validate_project_name("demo").unwrap();
        assert_eq!(name.as_str(), "demo");
        assert!(DomainValidator::validate_project_name("../escape").is_err());
    }

    #[test]
    fn project_name_errors_are_validation_category() {
        let err = ProjectName::parse("").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn manifest_errors_are_internal_category() {
        let err = Manifest::new("none").validate().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
