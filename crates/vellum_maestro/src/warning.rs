//! Problems found while building a definition table.
//!
//! None of these stop the build; they are collected on the table and it is up
//! to the host to show them.

use compact_str::CompactString;
use serde::Serialize;
use vellum_carton::SourceRange;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnalysisWarning {
    /// The script parser reported an error. Bindings found before it are kept.
    #[error("syntax error in <script> at {region}: {message}")]
    ScriptSyntax {
        region: SourceRange,
        message: CompactString,
    },

    #[error("class-style component in <script> at {region} is not analyzed")]
    ClassComponent { region: SourceRange },

    #[error("<{name}> at {region} is never closed; read to end of file")]
    UnclosedRegion {
        name: CompactString,
        region: SourceRange,
    },

    #[error("{path} is not a supported document (expected {expected})")]
    UnsupportedDocument { path: String, expected: String },
}
