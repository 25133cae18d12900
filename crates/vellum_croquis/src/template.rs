//! Template scope analysis.
//!
//! Walks a template region and extracts:
//! - `ref="name"` (visible everywhere)
//! - `v-for` aliases (visible inside the element)
//! - `v-slot`, `#slot` and `slot-scope` variables (visible inside the element)

use once_cell::sync::Lazy;
use regex::Regex;
use vellum_armature::{Attribute, RegionId, RegionNode, RegionTree};
use vellum_carton::{is_word_byte, SourceRange};

use crate::{Binding, BindingCategory};

static V_SLOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v-slot(:[\w-]+)?$").expect("v-slot pattern"));

/// Everything before the first whitespace-delimited `in` / `of`.
static V_FOR_ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([\s\S]*?)\s+(?:in|of)\s").expect("v-for pattern"));

/// Extract bindings from the subtree rooted at `template`. Positions and
/// scopes are offsets into `source`, the whole file the tree was parsed from.
pub fn analyze_template(tree: &RegionTree, template: RegionId, source: &str) -> Vec<Binding> {
    let mut bindings = Vec::new();
    for id in tree.descendants(template) {
        element_bindings(&tree[id], source, &mut bindings);
    }
    bindings
}

fn element_bindings(node: &RegionNode, source: &str, out: &mut Vec<Binding>) {
    let scope = node.span();

    for attr in &node.attributes {
        let key = attr.key.as_str();
        if key == "ref" {
            if let (Some(value), Some(range)) = (attr.value.as_deref(), attr.value_range) {
                if !value.is_empty() {
                    out.push(Binding::new(value, BindingCategory::Ref, range.start));
                }
            }
        } else if key == "v-for" {
            if let Some((alias, start)) = v_for_alias(attr, source) {
                scoped_identifiers(alias, start, BindingCategory::VForScope, scope, out);
            }
        } else if is_slot_attribute(key) {
            if let Some((value, start)) = attribute_value(attr, source) {
                scoped_identifiers(value, start, BindingCategory::SlotScope, scope, out);
            }
        }
    }
}

fn is_slot_attribute(key: &str) -> bool {
    key == "slot-scope" || (key.len() > 1 && key.starts_with('#')) || V_SLOT.is_match(key)
}

/// Attribute value text with its file offset. Taken from the file rather
/// than the unquoted copy so that offsets stay exact.
fn attribute_value<'s>(attr: &Attribute, source: &'s str) -> Option<(&'s str, u32)> {
    let range = attr.value_range?;
    Some((range.slice(source)?, range.start))
}

fn v_for_alias<'s>(attr: &Attribute, source: &'s str) -> Option<(&'s str, u32)> {
    let (value, start) = attribute_value(attr, source)?;
    let alias = match V_FOR_ALIAS.captures(value).and_then(|c| c.get(1)) {
        Some(m) => (m.as_str(), start + m.start() as u32),
        None => (value.split(' ').next().unwrap_or(value), start),
    };
    Some(alias)
}

/// Every identifier token in `text` becomes a binding. The scan only moves
/// forward, so a repeated name gets one binding per occurrence.
fn scoped_identifiers(
    text: &str,
    base: u32,
    category: BindingCategory,
    scope: SourceRange,
    out: &mut Vec<Binding>,
) {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !is_word_byte(bytes[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && is_word_byte(bytes[i]) {
            i += 1;
        }
        if !bytes[start].is_ascii_digit() {
            out.push(Binding::scoped(
                &text[start..i],
                category,
                base + start as u32,
                scope,
            ));
        }
    }
}
