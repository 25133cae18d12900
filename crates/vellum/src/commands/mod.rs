//! Subcommands.

pub mod bindings;
pub mod definition;
pub mod regions;

use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

pub(crate) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: PathBuf::from(path),
        source,
    })
}

/// Output format (text, json)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
