//! Editor-facing features built on the definition table.

pub mod definition;

pub use definition::{DefinitionService, GotoDefinition};
