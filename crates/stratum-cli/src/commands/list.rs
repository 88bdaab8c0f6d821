//! Implementation of the `stratum list` command.

use serde::Serialize;

use stratum_adapters::default_manifest;
use stratum_core::domain::Manifest;

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

/// JSON shape of a listed manifest.
#[derive(Debug, Serialize)]
struct ManifestListing<'a> {
    name: &'a str,
    files: Vec<FileListing>,
}

#[derive(Debug, Serialize)]
struct FileListing {
    path: String,
    parameterized: bool,
}

impl<'a> From<&'a Manifest> for ManifestListing<'a> {
    fn from(manifest: &'a Manifest) -> Self {
        Self {
            name: manifest.name(),
            files: manifest
                .entries()
                .iter()
                .map(|e| FileListing {
                    path: e.path().to_string(),
                    parameterized: e.body().is_parameterized(),
                })
                .collect(),
        }
    }
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let manifest = default_manifest();

    // `--output-format json` also selects JSON.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!(
                "Built-in layout: {} ({} files)",
                manifest.name(),
                manifest.len()
            ))?;
            for entry in manifest.entries() {
                let marker = if entry.body().is_parameterized() {
                    "  (uses project name)"
                } else {
                    ""
                };
                output.print(&format!("  {}{marker}", entry.path()))?;
            }
        }

        ListFormat::List => {
            for path in manifest.paths() {
                output.print(&path.to_string())?;
            }
        }

        ListFormat::Json => {
            output.json(&ManifestListing::from(&manifest))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_marks_readme_only() {
        let manifest = default_manifest();
        let listing = ManifestListing::from(&manifest);

        assert_eq!(listing.files.len(), manifest.len());
        let parameterized: Vec<_> = listing
            .files
            .iter()
            .filter(|f| f.parameterized)
            .map(|f| f.path.as_str())
            .collect();
        assert_eq!(parameterized, ["README.md"]);
    }

    #[test]
    fn listing_serializes_name_and_files() {
        let manifest = default_manifest();
        let json = serde_json::to_value(ManifestListing::from(&manifest)).unwrap();
        assert_eq!(json["name"], "layered-python");
        assert_eq!(json["files"][0]["path"], "README.md");
        assert_eq!(json["files"][0]["parameterized"], true);
    }
}
