pub mod common;
pub mod manifest;
pub mod report;
pub mod template;

pub use crate::domain::DomainError;
pub use manifest::{Manifest, ManifestEntry};
pub use report::{CreationOutcome, CreationResult, ScaffoldReport};
pub use template::{RenderContext, TemplateBody, TemplateSource};
