//! Subcommand handlers, one module per `stratum` subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
