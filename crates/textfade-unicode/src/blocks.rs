#![forbid(unsafe_code)]

//! Unicode block range lookup.
//!
//! A Unicode block is a named contiguous range of code points grouped by
//! script or purpose ("Cyrillic", "Hiragana", ...). The static table lives in
//! [`crate::block_data`]; this module provides the range type and lookup.
//!
//! # Invariants
//!
//! The table is sorted ascending, pairwise non-overlapping, and every entry
//! is non-empty (`start < end`). [`find_block`] relies on sortedness for its
//! binary search, and downstream interpolation arithmetic relies on all
//! three; a single malformed entry would corrupt every blended character.
//! The test suite verifies the table exhaustively, every entry against every
//! later entry.

pub use crate::block_data::BLOCKS;

// ---------------------------------------------------------------------------
// BlockRange
// ---------------------------------------------------------------------------

/// A half-open `[start, end)` range of code points forming one Unicode block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BlockRange {
    /// First code point in the block (inclusive).
    pub start: u32,
    /// One past the last code point in the block (exclusive).
    pub end: u32,
}

impl BlockRange {
    /// Create a new block range.
    #[inline]
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of code points in the block.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the block is empty. Always false for table entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `cp` falls inside the block.
    #[inline]
    #[must_use]
    pub const fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp < self.end
    }
}

/// Find the block containing `cp`, or `None` if no block covers it.
///
/// Binary search over the sorted table. Containment is strictly half-open;
/// a code point sitting exactly on a block's exclusive end belongs to the
/// next block (or to no block at all), never to the one it bounds.
#[must_use]
pub fn find_block(cp: u32) -> Option<BlockRange> {
    let idx = BLOCKS.partition_point(|block| block.start <= cp);
    let block = *BLOCKS.get(idx.checked_sub(1)?)?;
    block.contains(cp).then_some(block)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Exhaustive sweep, every entry against every later entry. Mirrors the
    // compile-time assertions the block data originally shipped with.
    #[test]
    fn table_is_sorted_nonempty_nonoverlapping() {
        for (i, a) in BLOCKS.iter().enumerate() {
            assert!(a.start < a.end, "empty or inverted block at index {i}: {a:?}");
            for (j, b) in BLOCKS.iter().enumerate().skip(i + 1) {
                assert!(
                    a.end <= b.start,
                    "blocks {i} and {j} overlap or are out of order: {a:?} vs {b:?}"
                );
            }
        }
    }

    #[test]
    fn finds_basic_latin() {
        let block = find_block(u32::from('a')).unwrap();
        assert_eq!(block, BlockRange::new(0x0000, 0x0080));
        assert_eq!(block.len(), 128);
    }

    #[test]
    fn finds_cyrillic() {
        let block = find_block(0x044F).unwrap(); // я
        assert_eq!(block, BlockRange::new(0x0400, 0x0500));
    }

    #[test]
    fn block_seams_are_half_open() {
        // 0x7F is the last Basic Latin scalar; 0x80 opens Latin-1 Supplement.
        assert_eq!(find_block(0x7F).unwrap().start, 0x0000);
        assert_eq!(find_block(0x80).unwrap().start, 0x0080);
    }

    #[test]
    fn gaps_have_no_block() {
        // 0x2FE0..0x2FF0 is unassigned between Kangxi Radicals and
        // Ideographic Description Characters.
        assert_eq!(find_block(0x2FE5), None);
        assert_eq!(find_block(0x110000), None);
        assert_eq!(find_block(u32::MAX), None);
    }

    #[test]
    fn last_block_covers_top_of_unicode() {
        assert!(find_block(0x10FFFF).is_some());
    }

    #[test]
    fn surrogates_are_table_entries() {
        // The table is block data, not scalar validity: surrogate blocks are
        // present and lookups on them succeed. Scalar filtering happens in
        // the blend layer.
        assert!(find_block(0xD800).is_some());
    }
}
