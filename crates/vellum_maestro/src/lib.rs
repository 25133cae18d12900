//! # vellum_maestro
//!
//! Maestro - Definition collection and go-to-definition for Vellum.
//!
//! ## Name Origin
//!
//! A **maestro** does not play every instrument; it cues each section at the
//! right moment. `vellum_maestro` cues the region parser and the three
//! analyzers over one document and merges what they find into a single
//! [`DefinitionTable`].
//!
//! ## Architecture
//!
//! ```text
//! source ──► vellum_armature::parse ──► top-level regions
//!                                          │
//!          ┌───────────────────────────────┼───────────────────────┐
//!          ▼                               ▼                       ▼
//!   analyze_template                analyze_script           analyze_style
//!          └───────────────┬───────────────┴───────────────────────┘
//!                          ▼
//!                   DefinitionTable ──► query(name, range)
//! ```
//!
//! ## Usage
//!
//! ```
//! use vellum_carton::SourceRange;
//!
//! let source = r#"<template><p>{{ count }}</p></template>
//! <script>export default { data() { return { count: 0 } } }</script>"#;
//!
//! let target = source.find("count").unwrap() as u32;
//! let found = vellum_maestro::resolve_definitions(
//!     source,
//!     "count",
//!     SourceRange::new(target, target + 5),
//! );
//! assert_eq!(found.len(), 1);
//! assert!(source[..found[0].offset as usize].ends_with("count"));
//! ```

mod collector;
pub mod ide;
mod table;
mod warning;

pub use collector::{CollectorOptions, DefinitionCollector};
pub use ide::{DefinitionService, GotoDefinition};
pub use table::{DefinitionLocation, DefinitionTable};
pub use vellum_armature::parse as parse_markup;
pub use warning::AnalysisWarning;

use vellum_carton::SourceRange;

/// Build the table for `source` with default options and look up
/// `target_name` as referenced at `target_range`.
pub fn resolve_definitions(
    source: &str,
    target_name: &str,
    target_range: SourceRange,
) -> Vec<DefinitionLocation> {
    DefinitionCollector::new()
        .build(source)
        .query(target_name, target_range)
}
