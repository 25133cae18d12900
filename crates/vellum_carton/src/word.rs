//! Identifier lookup under a cursor.

use crate::SourceRange;

/// Check if a byte is a valid identifier character.
#[inline]
pub fn is_word_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'$'
}

/// Get the identifier surrounding `offset`, together with its range.
///
/// A cursor sitting right after the last character of a word still selects
/// that word, as editors do.
pub fn word_at_offset(content: &str, offset: u32) -> Option<(SourceRange, &str)> {
    let bytes = content.as_bytes();
    let offset = offset as usize;
    if offset > bytes.len() {
        return None;
    }

    let anchor = if offset < bytes.len() && is_word_byte(bytes[offset]) {
        offset
    } else if offset > 0 && is_word_byte(bytes[offset - 1]) {
        offset - 1
    } else {
        return None;
    };

    let start = bytes[..anchor]
        .iter()
        .rposition(|&c| !is_word_byte(c))
        .map_or(0, |i| i + 1);
    let end = bytes[anchor..]
        .iter()
        .position(|&c| !is_word_byte(c))
        .map_or(bytes.len(), |i| anchor + i);

    let range = SourceRange::new(start as u32, end as u32);
    Some((range, &content[start..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_at_offset() {
        let content = "const message = 'hello'";

        let (range, word) = word_at_offset(content, 6).unwrap();
        assert_eq!(word, "message");
        assert_eq!(range, SourceRange::new(6, 13));

        assert_eq!(word_at_offset(content, 0).map(|w| w.1), Some("const"));
        // right after a word
        assert_eq!(word_at_offset(content, 5).map(|w| w.1), Some("const"));
        assert_eq!(word_at_offset(content, 14), None);
        assert_eq!(word_at_offset(content, 100), None);
    }

    #[test]
    fn test_dollar_and_underscore() {
        let content = "{{ $refs._input }}";
        assert_eq!(word_at_offset(content, 4).map(|w| w.1), Some("$refs"));
        assert_eq!(word_at_offset(content, 11).map(|w| w.1), Some("_input"));
    }

    #[test]
    fn test_end_of_text() {
        let content = "item";
        assert_eq!(word_at_offset(content, 4).map(|w| w.1), Some("item"));
    }
}
