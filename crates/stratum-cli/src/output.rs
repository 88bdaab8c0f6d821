//! Output management and formatting.
//!
//! Per-file lines follow a fixed, greppable protocol:
//!
//! ```text
//! CREATED: demo/README.md
//! SKIPPED (exists): demo/.gitignore
//! ```

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use stratum_core::domain::{CreationOutcome, CreationResult, ScaffoldReport};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            explicit => explicit,
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One `CREATED:` / `SKIPPED (exists):` line.
    pub fn creation(&self, result: &CreationResult) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&creation_line(result.outcome, &result.path, self.no_color))
    }

    /// Counts and the absolute project root.
    pub fn summary(&self, report: &ScaffoldReport) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let verb = if report.dry_run { "would be " } else { "" };
        self.print("")?;
        self.header(&format!(
            "Summary: {} {verb}created, {} {verb}skipped",
            report.created_count(),
            report.skipped_count(),
        ))?;
        let ready = format!("Structure ready at: {}", report.resolved_root.display());
        if report.dry_run {
            self.info(&format!("Dry run, nothing written. {ready}"))
        } else {
            self.success(&ready)
        }
    }

    /// Pretty JSON on stdout.
    ///
    /// Not suppressed by `--quiet`: JSON was asked for explicitly and
    /// scripts depend on it.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` when the resolved format is JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

fn creation_line(outcome: CreationOutcome, path: &Path, no_color: bool) -> String {
    let label = match outcome {
        CreationOutcome::Created => "CREATED:",
        CreationOutcome::Skipped => "SKIPPED (exists):",
    };
    if no_color {
        return format!("{label} {}", path.display());
    }
    match outcome {
        CreationOutcome::Created => format!("{} {}", label.green().bold(), path.display()),
        CreationOutcome::Skipped => format!("{} {}", label.yellow(), path.display().dimmed()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
