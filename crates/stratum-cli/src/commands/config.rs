//! `stratum config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `config get`.
pub const KNOWN_KEYS: &[&str] = &["defaults.project_name", "output.no_color", "output.format"];

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = config.source.clone().unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.project_name" => Ok(config.defaults.project_name.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => serde_json::to_value(config.output.format)
            .ok()
            .and_then(|v| v.as_str().map(str::to_owned))
            .ok_or_else(|| CliError::ConfigError {
                message: "output.format has no string form".into(),
                source: None,
            }),
        _ => Err(CliError::ConfigError {
            message: format!(
                "Unknown config key: '{key}' (known: {})",
                KNOWN_KEYS.join(", ")
            ),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
