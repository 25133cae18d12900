//! Tag scanner.
//!
//! Finds opening, closing and self-closing tags with a forward-only cursor.
//! Everything between tags is skipped; this is not an HTML tokenizer and does
//! not produce text, entity or interpolation tokens.

use memchr::{memchr, memmem};
use vellum_carton::SourceRange;

/// Kind of a scanned tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name ...>`
    Start,
    /// `<name ... />`
    SelfClosing,
    /// `</name>`
    End,
}

/// A tag found by the [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub kind: TagKind,
    pub name: &'a str,
    /// The whole tag, `<` through `>`.
    pub span: SourceRange,
    /// The raw attribute text between the tag name and the closing `>` (or
    /// `/>`). Empty for end tags.
    pub attrs: SourceRange,
}

#[inline]
fn is_tag_name_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

/// Forward-only tag scanner over one source text.
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Scan forward to the next tag.
    pub fn next_tag(&mut self) -> Option<Tag<'a>> {
        let bytes = self.source.as_bytes();

        while self.pos < bytes.len() {
            let lt = self.pos + memchr(b'<', &bytes[self.pos..])?;

            if bytes[lt..].starts_with(b"<!--") {
                self.pos = memmem::find(&bytes[lt + 4..], b"-->")
                    .map_or(bytes.len(), |i| lt + 4 + i + 3);
                continue;
            }

            let tag = if bytes.get(lt + 1) == Some(&b'/') {
                self.scan_end_tag(lt)
            } else {
                self.scan_start_tag(lt)
            };

            match tag {
                Some(tag) => {
                    self.pos = tag.span.end as usize;
                    return Some(tag);
                }
                None => self.pos = lt + 1,
            }
        }

        None
    }

    /// Move the cursor to the `</name` that closes a raw-text element, so
    /// that nothing inside it is scanned as markup. Without a closing tag the
    /// rest of the text is raw.
    pub fn skip_raw_text(&mut self, name: &str) {
        let bytes = self.source.as_bytes();
        let name = name.as_bytes();
        let mut from = self.pos;

        while let Some(i) = memmem::find(&bytes[from..], b"</") {
            let lt = from + i;
            let name_start = lt + 2;
            let name_end = name_start + name.len();
            let matches = bytes
                .get(name_start..name_end)
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
                && !bytes.get(name_end).copied().is_some_and(is_tag_name_byte);
            if matches {
                self.pos = lt;
                return;
            }
            from = lt + 2;
        }

        self.pos = bytes.len();
    }

    fn scan_end_tag(&self, lt: usize) -> Option<Tag<'a>> {
        let bytes = self.source.as_bytes();
        let name_start = lt + 2;
        let name_end = name_start
            + bytes[name_start..]
                .iter()
                .take_while(|&&c| is_tag_name_byte(c))
                .count();
        let gt = name_end
            + bytes[name_end..]
                .iter()
                .take_while(|c| c.is_ascii_whitespace())
                .count();

        if bytes.get(gt) != Some(&b'>') {
            return None;
        }

        Some(Tag {
            kind: TagKind::End,
            name: &self.source[name_start..name_end],
            span: SourceRange::new(lt as u32, gt as u32 + 1),
            attrs: SourceRange::empty(name_end as u32),
        })
    }

    fn scan_start_tag(&self, lt: usize) -> Option<Tag<'a>> {
        let bytes = self.source.as_bytes();
        let name_start = lt + 1;
        let name_end = name_start
            + bytes[name_start..]
                .iter()
                .take_while(|&&c| is_tag_name_byte(c))
                .count();

        if name_end == name_start {
            return None;
        }
        match bytes.get(name_end) {
            Some(c) if c.is_ascii_whitespace() || *c == b'>' || *c == b'/' => {}
            _ => return None,
        }

        let gt = find_tag_close(bytes, name_end)?;

        // `/` right before `>` (ignoring whitespace) marks a self-closing tag
        let inner_end = name_end
            + self.source[name_end..gt]
                .trim_end_matches(|c: char| c.is_ascii_whitespace())
                .len();
        let self_closing = inner_end > name_end && bytes[inner_end - 1] == b'/';
        let attrs_end = if self_closing { inner_end - 1 } else { inner_end };

        Some(Tag {
            kind: if self_closing {
                TagKind::SelfClosing
            } else {
                TagKind::Start
            },
            name: &self.source[name_start..name_end],
            span: SourceRange::new(lt as u32, gt as u32 + 1),
            attrs: SourceRange::new(name_end as u32, attrs_end as u32),
        })
    }
}

/// Find the `>` closing a start tag. A quote that directly follows `=`
/// (whitespace allowed between) opens an attribute value; `>` inside it does
/// not end the tag.
fn find_tag_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    let mut after_eq = false;

    while i < bytes.len() {
        let c = bytes[i];
        match c {
            b'>' => return Some(i),
            b'=' => after_eq = true,
            b'"' | b'\'' if after_eq => {
                i += 1 + memchr(c, &bytes[i + 1..])?;
                after_eq = false;
            }
            c if c.is_ascii_whitespace() => {}
            _ => after_eq = false,
        }
        i += 1;
    }

    None
}
