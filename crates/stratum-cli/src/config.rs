//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRATUM_<SECTION>__<KEY>`, e.g.
//!    `STRATUM_DEFAULTS__PROJECT_NAME=billing_api`
//! 3. Config file: `--config`, else the platform config file if present,
//!    else `.stratum.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::global::OutputFormat;

/// Local fallback config file name.
pub const LOCAL_CONFIG_FILE: &str = ".stratum.toml";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "STRATUM";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,

    /// File the values were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Used by `new` when no name is given.
    pub project_name: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_name: "mi_proyecto_backend".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from defaults, the config file, and environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to seed configuration defaults")?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let mut cfg: Self = settings
            .try_deserialize()
            .context("Invalid configuration values")?;

        if path.is_file() {
            cfg.source = Some(path);
        }

        debug!(
            source = ?cfg.source,
            project_name = %cfg.defaults.project_name,
            "Configuration loaded"
        );
        Ok(cfg)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness. When
    /// that file does not exist (or no home directory is known) the local
    /// `.stratum.toml` is used instead.
    pub fn config_path() -> PathBuf {
        Self::platform_config_path()
            .filter(|p| p.is_file())
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Where `init` writes a fresh configuration file.
    pub fn init_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(Self::platform_config_path)
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    fn platform_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "stratum", "stratum")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Serialize as TOML, the format read back by [`Self::load`].
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_project_name() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.project_name, "mi_proyecto_backend");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
        assert_eq!(AppConfig::default().output.format, OutputFormat::Auto);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[defaults]\nproject_name = \"billing_api\"\n\n[output]\nformat = \"plain\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.project_name, "billing_api");
        assert_eq!(cfg.output.format, OutputFormat::Plain);
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[defaults\nproject_name = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn toml_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("written.toml");
        std::fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.project_name, "mi_proyecto_backend");
    }

    #[test]
    fn init_path_prefers_explicit() {
        let explicit = Path::new("/tmp/stratum.toml");
        assert_eq!(AppConfig::init_path(Some(explicit)), explicit);
        assert!(!AppConfig::init_path(None).as_os_str().is_empty());
    }
}
