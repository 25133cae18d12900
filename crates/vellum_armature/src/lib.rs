//! # vellum_armature
//!
//! Armature - The structural parser for Vellum.
//!
//! ## Name Origin
//!
//! An **armature** is the wire skeleton a sculptor builds before adding clay.
//! `vellum_armature` builds the skeleton of a single-file component: which
//! tags exist, where their opening tags sit, and where their content starts
//! and ends. It knows nothing about what a `<template>` or a `<script>` means.
//!
//! ## Guarantees
//!
//! - One forward pass; the cursor never moves backwards.
//! - Every offset points into the source text.
//! - Never fails: malformed markup produces a best-effort tree.
//!
//! ## Example
//!
//! ```
//! let source = r#"<template><div ref="box"></div></template>"#;
//! let tree = vellum_armature::parse(source);
//!
//! let template = tree.first_by_tag_name(tree.root(), "template").unwrap();
//! let div = tree.children(template).next().unwrap();
//! assert_eq!(tree[div].name, "div");
//! assert_eq!(tree[div].attribute("ref").and_then(|a| a.value.as_deref()), Some("box"));
//! ```

mod attributes;
mod parser;
mod region;
mod tokenizer;

pub use attributes::parse_attributes;
pub use parser::{parse, parse_with_options, Parser, ParserOptions};
pub use region::{Attribute, Descendants, RegionId, RegionNode, RegionTree, DOCUMENT_NAME};
pub use tokenizer::{Tag, TagKind, Tokenizer};
