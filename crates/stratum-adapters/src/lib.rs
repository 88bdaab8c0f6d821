//! Infrastructure adapters for Stratum.
//!
//! This crate implements the ports defined in `stratum-core::application::ports`.
//! It contains all I/O operations and the embedded built-in manifest.

pub mod builtin_manifest;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_manifest::{LAYERED_PYTHON, default_manifest, layered_python};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
