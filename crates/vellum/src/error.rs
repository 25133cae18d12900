//! CLI errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{line}:{column} is not a position in {}", .path.display())]
    InvalidPosition {
        path: PathBuf,
        line: u32,
        column: u32,
    },

    #[error("offset {offset} is past the end of {} ({len} bytes)", .path.display())]
    OffsetOutOfRange { path: PathBuf, offset: u32, len: usize },

    #[error("no supported files found matching patterns: {0:?}")]
    NoFiles(Vec<String>),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
