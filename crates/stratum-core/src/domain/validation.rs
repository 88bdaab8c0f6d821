use crate::domain::{
    entities::Manifest, error::DomainError, value_objects::ProjectName,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_manifest(manifest: &Manifest) -> Result<(), DomainError> {
        manifest.validate()
    }

    pub fn validate_project_name(raw: &str) -> Result<ProjectName, DomainError> {
        ProjectName::parse(raw)
    }
}
