//! Stratum Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stratum
//! project scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stratum-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     stratum-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │  built-in manifest)                     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Manifest, TemplateBody, ScaffoldReport)│
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stratum_core::{application::ScaffoldService, domain::ProjectName};
//!
//! // 1. Validate the project name
//! let name = ProjectName::parse("demo")?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(manifest, Box::new(filesystem))?;
//! let report = service.scaffold(&name, ".")?;
//! println!("{} created, {} skipped", report.created_count(), report.skipped_count());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{Filesystem, WriteOutcome},
    };
    pub use crate::domain::{
        CreationOutcome, CreationResult, Manifest, ManifestEntry, ProjectName, RenderContext,
        ScaffoldReport, TemplateBody,
    };
    pub use crate::error::{StratumError, StratumResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
