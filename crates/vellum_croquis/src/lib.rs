//! # vellum_croquis
//!
//! Croquis - The binding extraction layer for Vellum.
//!
//! ## Name Origin
//!
//! A **croquis** is a quick sketch that captures only the essential lines of
//! a subject. `vellum_croquis` does not type-check or evaluate anything; it
//! sketches where each name in a single-file component is introduced.
//!
//! ## Analyzers
//!
//! - [`script_parser`]: component options (`props`, `data`, `computed`, ...)
//!   and `<script setup>` declarations, via the OXC parser
//! - [`template`]: `ref`, `v-for`, `v-slot` and `slot-scope` bindings, with
//!   the element range in which loop and slot variables are visible
//! - [`css`]: class and id selectors
//!
//! Every analyzer returns an owned `Vec<Binding>`; callers concatenate.
//!
//! ```text
//! vellum_armature (regions)
//!        ↓
//!  vellum_croquis (bindings)  ← This crate
//!        ↓
//!  vellum_maestro (definition table, queries)
//! ```

mod binding;

pub mod css;
pub mod script_parser;
pub mod template;

pub use binding::{Binding, BindingCategory};
pub use css::analyze_style;
pub use script_parser::{analyze_script, ScriptAnalysis, ScriptOptions};
pub use template::analyze_template;
