//! Built-in manifest.
//!
//! The layout ships inside the binary: every body lives as a plain text file
//! under `templates/layered-python/` (with a `.tmpl` suffix so files such as
//! `.gitignore` stay inert inside this repository) and is embedded with
//! `include_str!`. The table below is the single source of truth for which
//! files are generated and in which order.
//!
//! Only `README.md` is parameterized; it is the one body that mentions the
//! project name.

use tracing::debug;

use stratum_core::domain::{Manifest, ManifestEntry, TemplateBody, TemplateSource};

/// Name of the layered Python backend layout.
pub const LAYERED_PYTHON: &str = "layered-python";

/// One row of a built-in manifest table.
#[derive(Debug, Clone, Copy)]
struct BuiltinEntry {
    path: &'static str,
    body: &'static str,
    parameterized: bool,
}

impl BuiltinEntry {
    fn to_entry(self) -> ManifestEntry {
        let source = TemplateSource::Static(self.body);
        let body = if self.parameterized {
            TemplateBody::Parameterized(source)
        } else {
            TemplateBody::Literal(source)
        };
        ManifestEntry::new(self.path, body)
    }
}

macro_rules! embed {
    ($path:literal) => {
        embed!($path, false)
    };
    ($path:literal, parameterized) => {
        embed!($path, true)
    };
    ($path:literal, $parameterized:expr) => {
        BuiltinEntry {
            path: $path,
            body: include_str!(concat!("../templates/layered-python/", $path, ".tmpl")),
            parameterized: $parameterized,
        }
    };
}

const LAYERED_PYTHON_ENTRIES: &[BuiltinEntry] = &[
    // Root files
    embed!("README.md", parameterized),
    embed!("requirements.txt"),
    embed!(".env.example"),
    embed!(".gitignore"),
    // Package + config
    embed!("app/__init__.py"),
    embed!("app/config/__init__.py"),
    embed!("app/config/settings.py"),
    embed!("app/config/logging_conf.py"),
    // Core
    embed!("app/core/__init__.py"),
    embed!("app/core/exceptions.py"),
    embed!("app/core/events.py"),
    // Domain
    embed!("app/domain/__init__.py"),
    embed!("app/domain/models.py"),
    embed!("app/domain/value_objects.py"),
    embed!("app/domain/repositories.py"),
    // Application
    embed!("app/application/__init__.py"),
    embed!("app/application/dto.py"),
    embed!("app/application/services.py"),
    embed!("app/application/commands.py"),
    embed!("app/application/queries.py"),
    // Infrastructure
    embed!("app/infrastructure/__init__.py"),
    embed!("app/infrastructure/db/__init__.py"),
    embed!("app/infrastructure/db/base.py"),
    embed!("app/infrastructure/db/repositories_impl.py"),
    embed!("app/infrastructure/http/__init__.py"),
    embed!("app/infrastructure/http/client.py"),
    // Presentation
    embed!("app/presentation/__init__.py"),
    embed!("app/presentation/api/__init__.py"),
    embed!("app/presentation/api/schemas.py"),
    embed!("app/presentation/api/controllers.py"),
    embed!("app/presentation/cli/__init__.py"),
    embed!("app/presentation/cli/main.py"),
    // Tests
    embed!("tests/__init__.py"),
    embed!("tests/test_smoke.py"),
];

/// The layered Python backend manifest.
pub fn layered_python() -> Manifest {
    let manifest = LAYERED_PYTHON_ENTRIES
        .iter()
        .fold(Manifest::new(LAYERED_PYTHON), |m, e| m.with_entry(e.to_entry()));

    debug!(
        manifest = LAYERED_PYTHON,
        entries = manifest.len(),
        "built-in manifest assembled"
    );
    manifest
}

/// Manifest used when the caller does not ask for a specific one.
pub fn default_manifest() -> Manifest {
    layered_python()
}
