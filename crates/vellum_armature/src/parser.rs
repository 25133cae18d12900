//! Region tree builder.
//!
//! Drives the [`Tokenizer`] and maintains a single open-element stack rooted
//! at a synthetic `#document` node that spans the whole text.

use compact_str::CompactString;
use vellum_carton::{smallvec, SmallVec};

use crate::attributes::parse_attributes;
use crate::region::{RegionId, RegionNode, RegionTree};
use crate::tokenizer::{Tag, TagKind, Tokenizer};

/// Parser options
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Elements whose content is raw text and is never scanned for tags.
    pub raw_text_tags: Vec<CompactString>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            raw_text_tags: vec![
                CompactString::const_new("script"),
                CompactString::const_new("style"),
            ],
        }
    }
}

impl ParserOptions {
    fn is_raw_text(&self, name: &str) -> bool {
        self.raw_text_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(name))
    }
}

/// Parse `source` into a region tree with default options.
pub fn parse(source: &str) -> RegionTree {
    Parser::new(source).parse()
}

/// Parse `source` into a region tree.
pub fn parse_with_options(source: &str, options: ParserOptions) -> RegionTree {
    Parser::with_options(source, options).parse()
}

/// Parser context for building the region tree
pub struct Parser<'a> {
    source: &'a str,
    options: ParserOptions,
    tokenizer: Tokenizer<'a>,
    tree: RegionTree,
    /// Open elements; `stack[0]` is always the root.
    stack: SmallVec<[RegionId; 16]>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    pub fn with_options(source: &'a str, options: ParserOptions) -> Self {
        let tree = RegionTree::new(source.len() as u32);
        let root = tree.root();
        Self {
            source,
            options,
            tokenizer: Tokenizer::new(source),
            tree,
            stack: smallvec![root],
        }
    }

    pub fn parse(mut self) -> RegionTree {
        while let Some(tag) = self.tokenizer.next_tag() {
            match tag.kind {
                TagKind::Start | TagKind::SelfClosing => self.on_open_tag(tag),
                TagKind::End => self.on_close_tag(tag),
            }
        }
        self.tree
    }

    fn current(&self) -> RegionId {
        // the root is never popped
        self.stack[self.stack.len() - 1]
    }

    fn on_open_tag(&mut self, tag: Tag<'a>) {
        let mut node = RegionNode::new(CompactString::new(tag.name), tag.span, Some(self.current()));
        node.attributes = parse_attributes(
            tag.attrs.slice(self.source).unwrap_or_default(),
            tag.attrs.start,
        );

        if tag.kind == TagKind::SelfClosing {
            node.end = Some(tag.span.end);
            self.tree.push(node);
            return;
        }

        node.content_start = Some(tag.span.end);
        let id = self.tree.push(node);
        self.stack.push(id);

        if self.options.is_raw_text(tag.name) {
            self.tokenizer.skip_raw_text(tag.name);
        }
    }

    fn on_close_tag(&mut self, tag: Tag<'a>) {
        // Nearest open element with the same name; everything opened after
        // it is left without a content end.
        let Some(depth) = self
            .stack
            .iter()
            .skip(1)
            .rposition(|&id| self.tree[id].is_tag(tag.name))
            .map(|i| i + 1)
        else {
            return;
        };

        let node = self.tree.get_mut(self.stack[depth]);
        node.content_end = Some(tag.span.start);
        node.end = Some(tag.span.end);
        self.stack.truncate(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_carton::SourceRange;

    const SFC: &str = r#"<template>
  <ul>
    <li v-for="item in items" :key="item.id">{{ item }}</li>
    <img src="a.png" />
  </ul>
</template>

<script lang="ts">
export default { data() { return { items: ref<string[]>([]) } } }
</script>

<style scoped>
.card { color: red }
</style>
"#;

    fn names(tree: &RegionTree, id: RegionId) -> Vec<String> {
        tree.children(id).map(|c| tree[c].name.to_string()).collect()
    }

    #[test]
    fn test_top_level_regions() {
        let tree = parse(SFC);
        assert_eq!(names(&tree, tree.root()), vec!["template", "script", "style"]);

        let script = tree.first_by_tag_name(tree.root(), "script").unwrap();
        let content = tree[script].content(SFC).unwrap();
        assert!(content.starts_with("\nexport default"));
        assert!(content.ends_with("} } }\n"));
        assert_eq!(tree[script].attribute("lang").and_then(|a| a.value.as_deref()), Some("ts"));
        assert!(tree.children(script).next().is_none());

        let style = tree.first_by_tag_name(tree.root(), "style").unwrap();
        assert!(tree[style].has_attribute("scoped"));
    }

    #[test]
    fn test_nested_children() {
        let tree = parse(SFC);
        let ul = tree.first_by_tag_name(tree.root(), "ul").unwrap();
        assert_eq!(names(&tree, ul), vec!["li", "img"]);

        let img = tree.first_by_tag_name(ul, "img").unwrap();
        assert!(tree[img].is_self_closing());
        assert_eq!(tree[img].content_span(), None);
        assert_eq!(tree[img].span(), tree[img].tag_span);
        assert_eq!(tree.depth(img), 3);
    }

    #[test]
    fn test_spans_nest_and_do_not_overlap() {
        let tree = parse(SFC);
        for (id, node) in tree.iter() {
            let mut previous_end = None;
            for child in tree.children(id) {
                let child = &tree[child];
                let content = node.content_span().unwrap();
                assert!(content.contains(child.span()));
                if let Some(end) = previous_end {
                    assert!(child.tag_span.start >= end);
                }
                previous_end = Some(child.span().end);
            }
        }
    }

    #[test]
    fn test_slices_reassemble() {
        let tree = parse(SFC);
        for (id, node) in tree.iter() {
            if id == tree.root() || node.is_self_closing() {
                continue;
            }
            let content = node.content_span().unwrap();
            let end = node.end.unwrap();
            let rebuilt = format!(
                "{}{}{}",
                node.tag_text(SFC),
                content.slice(SFC).unwrap(),
                &SFC[content.end as usize..end as usize]
            );
            assert_eq!(rebuilt, node.span().slice(SFC).unwrap());
        }
    }

    #[test]
    fn test_unmatched_end_tag_is_ignored() {
        let source = "<div></span><p></p></div>";
        let tree = parse(source);
        let div = tree.first_by_tag_name(tree.root(), "div").unwrap();
        assert_eq!(tree[div].content_span(), Some(SourceRange::new(5, 19)));
        assert_eq!(names(&tree, div), vec!["p"]);
    }

    #[test]
    fn test_stale_open_node() {
        let source = "<template><div><span></div></template>";
        let tree = parse(source);
        let span = tree.first_by_tag_name(tree.root(), "span").unwrap();
        let div = tree.first_by_tag_name(tree.root(), "div").unwrap();
        let template = tree.first_by_tag_name(tree.root(), "template").unwrap();

        assert_eq!(tree[span].content_start, Some(21));
        assert_eq!(tree[span].content_end, None);
        assert_eq!(tree[span].span(), SourceRange::new(15, 21));
        assert_eq!(tree[div].content_span(), Some(SourceRange::new(15, 21)));
        assert_eq!(tree[template].end, Some(38));
    }

    #[test]
    fn test_end_tag_never_pops_root() {
        let source = "</template><a></a>";
        let tree = parse(source);
        assert_eq!(names(&tree, tree.root()), vec!["a"]);
        assert_eq!(tree[tree.root()].content_span(), Some(SourceRange::new(0, 18)));
    }

    #[test]
    fn test_raw_text_tags_option() {
        let source = "<script>a<b>c</b></script>";
        assert_eq!(parse(source).len(), 2);

        let options = ParserOptions {
            raw_text_tags: vec![],
        };
        let tree = parse_with_options(source, options);
        let script = tree.first_by_tag_name(tree.root(), "script").unwrap();
        assert_eq!(names(&tree, script), vec!["b"]);
    }

    #[test]
    fn test_tree_snapshot() {
        let tree = parse(SFC);
        let rendered = tree
            .iter()
            .map(|(id, node)| {
                let attrs: Vec<_> = node.attributes.iter().map(|a| a.key.as_str()).collect();
                format!("{}{} {:?}", "  ".repeat(tree.depth(id)), node.name, attrs)
            })
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(rendered, @r#"
        #document []
          template []
            ul []
              li ["v-for", ":key"]
              img ["src"]
          script ["lang"]
          style ["scoped"]
        "#);
    }

    #[test]
    fn test_document_order() {
        let tree = parse(SFC);
        let order: Vec<_> = tree.iter().map(|(_, n)| n.name.to_string()).collect();
        assert_eq!(
            order,
            vec!["#document", "template", "ul", "li", "img", "script", "style"]
        );
    }
}
