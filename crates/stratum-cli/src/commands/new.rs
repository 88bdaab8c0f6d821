//! Implementation of the `stratum new` command.
//!
//! Responsibility: resolve the project name, wire the built-in manifest to
//! the local filesystem, and display results. No business logic lives here.

use tracing::{debug, info, instrument};

use stratum_adapters::{LocalFilesystem, default_manifest};
use stratum_core::{
    application::ScaffoldService,
    domain::{DomainError, ProjectName},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stratum new` command.
///
/// Dispatch sequence:
/// 1. Resolve the project name (argument, else `defaults.project_name`)
/// 2. Build the scaffold service over the local filesystem
/// 3. Plan (`--dry-run`) or scaffold, printing one line per entry
/// 4. Print the summary
///
/// The project root is `./<name>`; paths are printed relative to the
/// current directory.
#[instrument(skip_all, fields(project = tracing::field::Empty))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resolve project name
    let raw = resolve_raw_name(args.name.as_deref(), &config);
    let project_name = parse_project_name(&raw)?;
    tracing::Span::current().record("project", project_name.as_str());

    // 2. Create adapters
    let filesystem = Box::new(LocalFilesystem::new());
    let service = ScaffoldService::new(default_manifest(), filesystem)?;

    debug!(
        manifest = service.manifest().name(),
        entries = service.manifest().len(),
        dry_run = args.dry_run,
        "Service ready"
    );

    // 3. Dry run: report what would happen without writing.
    if args.dry_run {
        let report = service.plan(&project_name, "")?;
        if output.is_json() {
            output.json(&report)?;
            return Ok(());
        }
        for result in &report.results {
            output.creation(result)?;
        }
        output.summary(&report)?;
        return Ok(());
    }

    // 4. Scaffold. Lines are printed as each entry settles so a failure
    //    midway still shows what was done.
    info!(project = %project_name, "Scaffold started");

    let report = if output.is_json() {
        service.scaffold(&project_name, "")?
    } else {
        let mut write_error = None;
        let report = service.scaffold_with(&project_name, "", |result| {
            if write_error.is_none() {
                write_error = output.creation(result).err();
            }
        })?;
        if let Some(e) = write_error {
            return Err(e.into());
        }
        report
    };

    info!(
        created = report.created_count(),
        skipped = report.skipped_count(),
        "Scaffold completed"
    );

    if output.is_json() {
        output.json(&report)?;
    } else {
        output.summary(&report)?;
    }

    Ok(())
}

/// Argument if given, else the configured default.
fn resolve_raw_name(arg: Option<&str>, config: &AppConfig) -> String {
    arg.map(str::to_owned)
        .unwrap_or_else(|| config.defaults.project_name.clone())
}

fn parse_project_name(raw: &str) -> CliResult<ProjectName> {
    ProjectName::parse(raw).map_err(|e| match e {
        DomainError::InvalidProjectName { name, reason } => {
            CliError::InvalidProjectName { name, reason }
        }
        other => CliError::Core(other.into()),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_wins_over_config() {
        let cfg = AppConfig::default();
        assert_eq!(resolve_raw_name(Some("billing_api"), &cfg), "billing_api");
    }

    #[test]
    fn config_default_used_without_argument() {
        let mut cfg = AppConfig::default();
        assert_eq!(resolve_raw_name(None, &cfg), "mi_proyecto_backend");

        cfg.defaults.project_name = "orders".into();
        assert_eq!(resolve_raw_name(None, &cfg), "orders");
    }

    #[test]
    fn name_is_used_as_given() {
        assert_eq!(parse_project_name(" demo").unwrap().as_str(), " demo");
    }

    #[test]
    fn separators_are_rejected_as_user_error() {
        let err = parse_project_name("../escape").unwrap_err();
        assert!(matches!(err, CliError::InvalidProjectName { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            parse_project_name("   "),
            Err(CliError::InvalidProjectName { .. })
        ));
    }
}
