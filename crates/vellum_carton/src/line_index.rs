//! Line/character positions over a source text.
//!
//! The analysis crates speak in byte offsets only. Hosts (editors, the CLI)
//! speak in 0-based line/character positions, so conversion lives here,
//! built once per text.

use memchr::memchr_iter;
use serde::{Deserialize, Serialize};

/// A 0-based line/character position. `character` counts `char`s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-based, as printed by compilers and linters
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Precomputed line starts for one text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<u32>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = Vec::with_capacity(source.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr_iter(b'\n', source.as_bytes()).map(|i| i as u32 + 1));
        Self {
            source,
            line_starts,
        }
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to the
    /// end of the text; offsets inside a UTF-8 sequence count the partial
    /// character as not yet reached.
    pub fn position(&self, offset: u32) -> Position {
        let offset = offset.min(self.source.len() as u32);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line] as usize;
        let character = self.source[line_start..]
            .char_indices()
            .take_while(|(i, _)| line_start + i < offset as usize)
            .count();

        Position::new(line as u32, character as u32)
    }

    /// Convert a position back to a byte offset.
    ///
    /// Returns `None` when the line does not exist or the character lies past
    /// the end of that line.
    pub fn offset(&self, position: Position) -> Option<u32> {
        let line_start = *self.line_starts.get(position.line as usize)? as usize;
        let line_end = self
            .line_starts
            .get(position.line as usize + 1)
            .map(|&next| next as usize - 1)
            .unwrap_or(self.source.len());
        let line = &self.source[line_start..line_end];
        let line = line.strip_suffix('\r').unwrap_or(line);

        let mut chars = line.char_indices();
        let mut remaining = position.character;
        loop {
            match chars.next() {
                Some((i, _)) if remaining == 0 => return Some((line_start + i) as u32),
                Some(_) => remaining -= 1,
                None if remaining == 0 => return Some((line_start + line.len()) as u32),
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let index = LineIndex::new("line1\nline2\nline3");

        assert_eq!(index.position(0), Position::new(0, 0));
        assert_eq!(index.position(3), Position::new(0, 3));
        assert_eq!(index.position(6), Position::new(1, 0));
        assert_eq!(index.position(17), Position::new(2, 5));
        assert_eq!(index.position(1000), Position::new(2, 5));
        assert_eq!(index.line_count(), 3);
    }

    #[test]
    fn test_offset_roundtrip() {
        let source = "<template>\r\n  <div ref=\"box\"/>\n</template>\n";
        let index = LineIndex::new(source);

        for offset in [0u32, 5, 12, 20, 31, 42] {
            let position = index.position(offset);
            assert_eq!(index.offset(position), Some(offset), "offset {offset}");
        }
    }

    #[test]
    fn test_offset_out_of_range() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.offset(Position::new(0, 2)), Some(2));
        assert_eq!(index.offset(Position::new(0, 3)), None);
        assert_eq!(index.offset(Position::new(1, 2)), Some(5));
        assert_eq!(index.offset(Position::new(2, 0)), None);
    }

    #[test]
    fn test_multibyte_characters() {
        let source = "// ñandú\nconst x = 1";
        let index = LineIndex::new(source);
        let x = source.find('x').unwrap() as u32;

        assert_eq!(index.position(x), Position::new(1, 6));
        assert_eq!(index.offset(Position::new(0, 8)), Some(10));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 4).to_string(), "1:5");
    }
}
