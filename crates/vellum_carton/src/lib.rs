//! Carton - The artist's toolbox for Vellum.
//!
//! Shared building blocks used by every other Vellum crate:
//!
//! - [`SourceRange`]: byte-offset spans into the file text
//! - [`LineIndex`]: offset ↔ line/character conversion for hosts that speak
//!   in editor positions
//! - [`word_at_offset`]: the identifier under a cursor
//!
//! # Example
//!
//! ```
//! use vellum_carton::{word_at_offset, LineIndex, Position};
//!
//! let source = "<template>\n  {{ count }}\n</template>";
//! let index = LineIndex::new(source);
//! let offset = index.offset(Position::new(1, 6)).unwrap();
//!
//! let (range, word) = word_at_offset(source, offset).unwrap();
//! assert_eq!(word, "count");
//! assert_eq!(index.position(range.start), Position::new(1, 5));
//! ```

pub mod line_index;
pub mod source_range;
pub mod word;

pub use line_index::{LineIndex, Position};
pub use source_range::SourceRange;
pub use word::{is_word_byte, word_at_offset};

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export rustc-hash for fast hash sets
pub use rustc_hash::FxHashSet;
