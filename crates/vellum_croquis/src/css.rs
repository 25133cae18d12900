//! Stylesheet selector extraction.
//!
//! Only selectors directly followed by a rule block count: `.card {` and
//! `#main{`, not `.a .b {` for `.a`.

use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;
use vellum_carton::SourceRange;

use crate::{Binding, BindingCategory};

static SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([#.])([\w-]+)\s*\{").expect("selector pattern"));

/// Extract class and id selectors. Positions are just past the selector
/// name, relative to `source`.
pub fn analyze_style(source: &str) -> Vec<Binding> {
    let comments = comment_ranges(source);

    SELECTOR
        .captures_iter(source)
        .filter_map(|caps| {
            let sigil = caps.get(1)?;
            let name = caps.get(2)?;
            let start = sigil.start() as u32;
            if comments.iter().any(|c| c.start <= start && start < c.end) {
                return None;
            }
            let category = if sigil.as_str() == "#" {
                BindingCategory::StyleId
            } else {
                BindingCategory::StyleClass
            };
            Some(Binding::new(name.as_str(), category, name.end() as u32))
        })
        .collect()
}

/// `/* ... */` blocks. An unterminated comment runs to the end.
fn comment_ranges(source: &str) -> Vec<SourceRange> {
    let bytes = source.as_bytes();
    let mut ranges = Vec::new();
    let mut from = 0;

    while let Some(i) = memmem::find(&bytes[from..], b"/*") {
        let start = from + i;
        let end = memmem::find(&bytes[start + 2..], b"*/").map_or(bytes.len(), |j| start + 2 + j + 2);
        ranges.push(SourceRange::new(start as u32, end as u32));
        from = end;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(source: &str) -> Vec<(String, BindingCategory)> {
        analyze_style(source)
            .into_iter()
            .map(|b| (b.name.to_string(), b.category))
            .collect()
    }

    #[test]
    fn test_class_and_id() {
        assert_eq!(
            names(".card { color: red } #id2{}"),
            vec![
                ("card".to_string(), BindingCategory::StyleClass),
                ("id2".to_string(), BindingCategory::StyleId),
            ]
        );
    }

    #[test]
    fn test_position_is_end_of_name() {
        let source = "\n.btn-primary  {\n  color: red;\n}\n";
        let bindings = analyze_style(source);
        assert_eq!(bindings.len(), 1);
        assert!(source[..bindings[0].position as usize].ends_with(".btn-primary"));
    }

    #[test]
    fn test_only_selector_before_block() {
        assert_eq!(
            names(".list .item { } .a:hover { } .b, .c { }"),
            vec![
                ("item".to_string(), BindingCategory::StyleClass),
                ("c".to_string(), BindingCategory::StyleClass),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            names("/* .old { } */ .new { } /* #gone {"),
            vec![("new".to_string(), BindingCategory::StyleClass)]
        );
    }

    #[test]
    fn test_hex_color_is_not_a_selector() {
        assert_eq!(names(".a { color: #fff; }"), vec![("a".to_string(), BindingCategory::StyleClass)]);
    }

    #[test]
    fn test_repeated_selector() {
        let source = ".x { } .x { }";
        let bindings = analyze_style(source);
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].position, 2);
        assert_eq!(bindings[1].position, 9);
    }
}
