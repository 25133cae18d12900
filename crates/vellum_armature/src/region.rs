//! Region tree types.
//!
//! Nodes live in a single arena owned by [`RegionTree`]; parents and children
//! refer to each other through [`RegionId`]s.

use compact_str::CompactString;
use serde::Serialize;
use vellum_carton::SourceRange;

/// Tag name of the synthetic root node.
pub const DOCUMENT_NAME: &str = "#document";

/// Index of a node in its [`RegionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(transparent)]
pub struct RegionId(u32);

impl RegionId {
    pub(crate) const ROOT: RegionId = RegionId(0);

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single attribute of an opening tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub key: CompactString,
    /// Value with one pair of surrounding quotes removed. `None` for bare
    /// attributes such as `scoped`.
    pub value: Option<CompactString>,
    /// Range of the key in the source text.
    pub key_range: SourceRange,
    /// Range of the value (without quotes) in the source text.
    pub value_range: Option<SourceRange>,
}

/// One tag in the region tree.
#[derive(Debug, Clone, Serialize)]
pub struct RegionNode {
    pub name: CompactString,
    pub attributes: Vec<Attribute>,
    /// The opening (or self-closing) tag itself.
    pub tag_span: SourceRange,
    /// Offset right after the opening tag. `None` for self-closing tags.
    pub content_start: Option<u32>,
    /// Offset of the closing tag. `None` until the node is closed by its own
    /// end tag.
    pub content_end: Option<u32>,
    /// End of the closing tag (or of the self-closing tag).
    pub end: Option<u32>,
    #[serde(skip)]
    pub parent: Option<RegionId>,
    #[serde(skip)]
    pub children: Vec<RegionId>,
}

impl RegionNode {
    pub(crate) fn new(name: CompactString, tag_span: SourceRange, parent: Option<RegionId>) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            tag_span,
            content_start: None,
            content_end: None,
            end: None,
            parent,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn is_self_closing(&self) -> bool {
        !self.is_root() && self.content_start.is_none()
    }

    /// The inner text range, present only once the node has been closed by
    /// its own end tag.
    #[inline]
    pub fn content_span(&self) -> Option<SourceRange> {
        Some(SourceRange::new(self.content_start?, self.content_end?))
    }

    /// The whole element: opening tag through closing tag. Falls back to the
    /// opening tag for nodes that were never closed.
    #[inline]
    pub fn span(&self) -> SourceRange {
        SourceRange::new(self.tag_span.start, self.end.unwrap_or(self.tag_span.end))
    }

    /// Check whether the tag name matches, ignoring ASCII case.
    #[inline]
    pub fn is_tag(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Look up an attribute by exact key. When a key is repeated the last
    /// occurrence wins.
    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.find_attribute(|k| k == key)
    }

    /// Look up the last attribute whose key satisfies `predicate`.
    pub fn find_attribute(&self, mut predicate: impl FnMut(&str) -> bool) -> Option<&Attribute> {
        self.attributes.iter().rev().find(|a| predicate(&a.key))
    }

    #[inline]
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attribute(key).is_some()
    }

    /// Text of the opening tag.
    pub fn tag_text<'s>(&self, source: &'s str) -> &'s str {
        self.tag_span.slice(source).unwrap_or_default()
    }

    /// Inner text, if the node has been closed.
    pub fn content<'s>(&self, source: &'s str) -> Option<&'s str> {
        self.content_span()?.slice(source)
    }
}

/// The parsed region tree of one file.
#[derive(Debug, Clone)]
pub struct RegionTree {
    pub(crate) nodes: Vec<RegionNode>,
}

impl RegionTree {
    pub(crate) fn new(source_len: u32) -> Self {
        let mut root = RegionNode::new(
            CompactString::const_new(DOCUMENT_NAME),
            SourceRange::empty(0),
            None,
        );
        root.content_start = Some(0);
        root.content_end = Some(source_len);
        root.end = Some(source_len);
        Self { nodes: vec![root] }
    }

    pub(crate) fn push(&mut self, node: RegionNode) -> RegionId {
        let id = RegionId(self.nodes.len() as u32);
        if let Some(parent) = node.parent {
            self.nodes[parent.index()].children.push(id);
        }
        self.nodes.push(node);
        id
    }

    pub(crate) fn get_mut(&mut self, id: RegionId) -> &mut RegionNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn root(&self) -> RegionId {
        RegionId::ROOT
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn parent(&self, id: RegionId) -> Option<RegionId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: RegionId) -> impl Iterator<Item = RegionId> + '_ {
        self.nodes[id.index()].children.iter().copied()
    }

    /// Pre-order traversal starting at (and including) `id`.
    pub fn descendants(&self, id: RegionId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Depth of `id` below the root.
    pub fn depth(&self, id: RegionId) -> usize {
        std::iter::successors(self.parent(id), |&p| self.parent(p)).count()
    }

    /// First node named `tag_name` at or below `id`, in document order.
    pub fn first_by_tag_name(&self, id: RegionId, tag_name: &str) -> Option<RegionId> {
        self.descendants(id).find(|&n| self[n].is_tag(tag_name))
    }

    /// Iterate over every node in document order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &RegionNode)> {
        self.descendants(self.root()).map(move |id| (id, &self[id]))
    }
}

impl std::ops::Index<RegionId> for RegionTree {
    type Output = RegionNode;

    #[inline]
    fn index(&self, id: RegionId) -> &RegionNode {
        &self.nodes[id.index()]
    }
}

/// Pre-order iterator returned by [`RegionTree::descendants`].
pub struct Descendants<'t> {
    tree: &'t RegionTree,
    stack: Vec<RegionId>,
}

impl Iterator for Descendants<'_> {
    type Item = RegionId;

    fn next(&mut self) -> Option<RegionId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.nodes[id.index()].children.iter().rev().copied());
        Some(id)
    }
}
