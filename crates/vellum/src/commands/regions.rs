//! Regions command - Print the region tree of a file

use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;
use vellum_armature::{parse_with_options, ParserOptions, RegionTree};

use super::read_source;
use crate::config::VellumConfig;
use crate::error::Result;

#[derive(Args)]
pub struct RegionsArgs {
    /// File to parse
    pub file: PathBuf,
}

pub fn run(args: RegionsArgs, config: &VellumConfig) -> Result<()> {
    let source = read_source(&args.file)?;
    let tree = parse_with_options(
        &source,
        ParserOptions {
            raw_text_tags: config.definition.raw_text_tags.clone(),
        },
    );
    print!("{}", render_tree(&tree));
    Ok(())
}

/// One line per node, indented by depth: name, full span, content span and
/// attributes.
fn render_tree(tree: &RegionTree) -> String {
    let mut out = String::new();
    for id in tree.descendants(tree.root()) {
        let node = &tree[id];
        let _ = write!(out, "{:indent$}{} {}", "", node.name, node.span(), indent = tree.depth(id) * 2);
        match node.content_span() {
            Some(content) => {
                let _ = write!(out, " [{}]", content);
            }
            None if !node.is_self_closing() => out.push_str(" [unclosed]"),
            None => {}
        }
        for attr in &node.attributes {
            match &attr.value {
                Some(value) => {
                    let _ = write!(out, " {}=\"{}\"", attr.key, value);
                }
                None => {
                    let _ = write!(out, " {}", attr.key);
                }
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tree() {
        let tree = vellum_armature::parse(r#"<template><img src="a.png"/><p></template><style scoped></style>"#);
        assert_eq!(
            render_tree(&tree),
            "#document 0..64 [0..64]\n  \
             template 0..42 [10..31]\n    \
             img 10..28 src=\"a.png\"\n    \
             p 28..31 [unclosed]\n  \
             style 42..64 [56..56] scoped\n"
        );
    }
}
