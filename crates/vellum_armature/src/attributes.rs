//! Attribute splitting for opening tags.

use compact_str::CompactString;
use vellum_carton::SourceRange;

use crate::region::Attribute;

/// Split raw attribute text into attributes.
///
/// `text` is the substring between a tag name and its closing `>`, and
/// `base` is the offset of `text` in the file. Tokens are separated
/// by whitespace outside quotes; each token splits on its first `=`. A value
/// loses one pair of matching surrounding quotes and is otherwise kept
/// verbatim.
pub fn parse_attributes(text: &str, base: u32) -> Vec<Attribute> {
    let bytes = text.as_bytes();
    let mut attributes = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let start = i;
        let mut quote = None;
        while i < bytes.len() {
            let c = bytes[i];
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None if c == b'"' || c == b'\'' => quote = Some(c),
                None if c.is_ascii_whitespace() => break,
                None => {}
            }
            i += 1;
        }

        if let Some(attribute) = split_token(&text[start..i], base + start as u32) {
            attributes.push(attribute);
        }
    }

    attributes
}

fn split_token(token: &str, offset: u32) -> Option<Attribute> {
    let (key, value) = match token.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (token, None),
    };
    if key.is_empty() || key == "/" {
        return None;
    }

    let key_range = SourceRange::new(offset, offset + key.len() as u32);
    let (value, value_range) = match value {
        Some(raw) => {
            let value_start = key_range.end + 1;
            let (inner, skipped) = strip_quotes(raw);
            let range = SourceRange::new(
                value_start + skipped,
                value_start + skipped + inner.len() as u32,
            );
            (Some(CompactString::new(inner)), Some(range))
        }
        None => (None, None),
    };

    Some(Attribute {
        key: CompactString::new(key),
        value,
        key_range,
        value_range,
    })
}

/// Remove one pair of matching surrounding quotes. Returns the inner text and
/// the number of bytes skipped at the front.
fn strip_quotes(raw: &str) -> (&str, u32) {
    let bytes = raw.as_bytes();
    match bytes.first() {
        Some(&q @ (b'"' | b'\'')) if bytes.len() >= 2 && bytes[bytes.len() - 1] == q => {
            (&raw[1..raw.len() - 1], 1)
        }
        _ => (raw, 0),
    }
}
