//! # Vellum
//!
//! Go-to-definition for Vue single-file components.
//!
//! This crate re-exports all Vellum sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`carton`] - Spans, line index and shared collection types
//! - [`armature`] - Region parser
//! - [`croquis`] - Template, script and style binding extraction
//! - [`maestro`] - Definition table and queries
//!
//! ```
//! let source = "<template><p>{{ msg }}</p></template>\n<script>export default { props: ['msg'] }</script>";
//! let offset = source.find("msg").unwrap() as u32;
//! let found = vellum::maestro::DefinitionService::definition_at(source, offset).unwrap();
//! assert_eq!(found.locations.len(), 1);
//! ```

/// Spans, line index and shared collection types.
pub use vellum_carton as carton;

/// Region parser.
pub use vellum_armature as armature;

/// Binding extraction.
pub use vellum_croquis as croquis;

/// Definition table and queries.
pub use vellum_maestro as maestro;
