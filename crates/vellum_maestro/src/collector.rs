//! Definition collection over one document.
//!
//! Splits the document into regions and hands each top-level region to the
//! matching analyzer:
//!
//! | region       | analyzer                          | offsets             |
//! |--------------|-----------------------------------|---------------------|
//! | `<template>` | [`vellum_croquis::analyze_template`] | file offsets     |
//! | `<script>`   | [`vellum_croquis::analyze_script`]   | shifted by content start |
//! | `<style>`    | [`vellum_croquis::analyze_style`]    | shifted by content start |

use std::path::Path;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vellum_armature::{parse_with_options, ParserOptions, RegionId, RegionTree};
use vellum_carton::SourceRange;
use vellum_croquis::{analyze_script, analyze_style, analyze_template, ScriptOptions};

use crate::{AnalysisWarning, DefinitionTable};

/// What to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectorOptions {
    /// File name suffixes accepted by [`DefinitionCollector::build_for_path`].
    pub extensions: Vec<CompactString>,
    /// Elements whose content is not scanned for tags.
    pub raw_text_tags: Vec<CompactString>,
    pub template: bool,
    pub script: bool,
    pub style: bool,
}

impl Default for CollectorOptions {
    fn default() -> Self {
        Self {
            extensions: vec![CompactString::const_new(".vue"), CompactString::const_new(".nvue")],
            raw_text_tags: ParserOptions::default().raw_text_tags,
            template: true,
            script: true,
            style: true,
        }
    }
}

/// Builds a [`DefinitionTable`] per document.
#[derive(Debug, Clone, Default)]
pub struct DefinitionCollector {
    options: CollectorOptions,
}

impl DefinitionCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CollectorOptions) -> Self {
        Self { options }
    }

    /// Whether `path` names a document kind this collector understands.
    pub fn supports_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| {
                self.options
                    .extensions
                    .iter()
                    .any(|ext| name.ends_with(ext.as_str()))
            })
    }

    /// Like [`build`](Self::build), but an unsupported document yields an
    /// empty table with an [`AnalysisWarning::UnsupportedDocument`].
    pub fn build_for_path(&self, path: &Path, source: &str) -> DefinitionTable {
        if self.supports_path(path) {
            return self.build(source);
        }

        warn!(path = %path.display(), "unsupported document");
        let mut table = DefinitionTable::default();
        table.warn(AnalysisWarning::UnsupportedDocument {
            path: path.display().to_string(),
            expected: self
                .options
                .extensions
                .iter()
                .map(CompactString::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        });
        table
    }

    /// Build the definition table for one document.
    pub fn build(&self, source: &str) -> DefinitionTable {
        let tree = parse_with_options(
            source,
            ParserOptions {
                raw_text_tags: self.options.raw_text_tags.clone(),
            },
        );
        let mut table = DefinitionTable::default();

        for id in tree.children(tree.root()) {
            self.collect_region(&tree, id, source, &mut table);
        }

        debug!(bindings = table.len(), warnings = table.warnings().len(), "definition table built");
        table
    }

    fn collect_region(&self, tree: &RegionTree, id: RegionId, source: &str, table: &mut DefinitionTable) {
        let node = &tree[id];
        let kind = if node.is_tag("template") {
            RegionKind::Template
        } else if node.is_tag("script") {
            RegionKind::Script
        } else if node.is_tag("style") {
            RegionKind::Style
        } else {
            return;
        };
        if !kind.enabled(&self.options) {
            return;
        }

        // Self-closing regions have no content.
        let Some(content_start) = node.content_start else {
            return;
        };
        let content = match node.content_span() {
            Some(content) => content,
            None => {
                warn!(region = %node.name, span = %node.tag_span, "unclosed region read to end of file");
                table.warn(AnalysisWarning::UnclosedRegion {
                    name: node.name.clone(),
                    region: node.tag_span,
                });
                SourceRange::new(content_start, source.len() as u32)
            }
        };
        debug!(region = %node.name, span = %content, "analyzing region");

        match kind {
            RegionKind::Template => table.extend(analyze_template(tree, id, source)),
            RegionKind::Script => {
                let Some(text) = content.slice(source) else {
                    return;
                };
                let analysis = analyze_script(
                    text,
                    ScriptOptions {
                        lang: node.attribute("lang").and_then(|a| a.value.as_deref()),
                        setup: node.has_attribute("setup"),
                    },
                );
                for diagnostic in analysis.diagnostics {
                    warn!(span = %content, "{}", diagnostic.message);
                    table.warn(AnalysisWarning::ScriptSyntax {
                        region: content,
                        message: diagnostic.message,
                    });
                }
                if analysis.panicked {
                    warn!(span = %content, "script parser gave up, no script bindings");
                }
                if analysis.class_component {
                    warn!(span = %content, "class-style component is not analyzed");
                    table.warn(AnalysisWarning::ClassComponent { region: content });
                }
                table.extend(analysis.bindings.into_iter().map(|b| b.shift(content.start)));
            }
            RegionKind::Style => {
                let Some(text) = content.slice(source) else {
                    return;
                };
                table.extend(analyze_style(text).into_iter().map(|b| b.shift(content.start)));
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum RegionKind {
    Template,
    Script,
    Style,
}

impl RegionKind {
    fn enabled(self, options: &CollectorOptions) -> bool {
        match self {
            Self::Template => options.template,
            Self::Script => options.script,
            Self::Style => options.style,
        }
    }
}
