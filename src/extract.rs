//! Range extraction and range equality.
//!
//! Both operations walk the same way: locate the fragment covering the
//! *last* byte of the requested range, then follow `next` links toward
//! logically earlier fragments, consuming each fragment's overlap with the
//! range back-to-front. Extract copies each overlap into an output buffer
//! filled from its tail end; compare checks each overlap against the
//! expected bytes and stops at the first mismatch, which is why it exists
//! as a separate operation instead of `extract` + `==`.

use crate::chain::Chain;
use crate::error::Result;

impl<'a> Chain<'a> {
    /// Copy the logical range `[index, index + count)` into an owned
    /// buffer of exactly `count` bytes.
    ///
    /// O(count) plus the locate scan. The requested range may span any
    /// number of fragments and overlap the boundary fragments partially.
    ///
    /// # Errors
    ///
    /// Declines with [`Error::EmptyRange`](crate::Error::EmptyRange) when
    /// `count == 0`, and with
    /// [`Error::OutOfBounds`](crate::Error::OutOfBounds) when the range
    /// extends past the end of the chain. The chain is untouched either
    /// way.
    ///
    /// ```rust
    /// use textchain::Chain;
    ///
    /// let mut chain = Chain::new();
    /// chain.append_str("Hello, ");
    /// chain.append_str("World!");
    /// assert_eq!(chain.extract(7, 6).unwrap(), b"World!");
    /// assert_eq!(chain.extract(5, 3).unwrap(), b", W");
    /// assert!(chain.extract(8, 6).is_err());
    /// ```
    pub fn extract(&self, index: usize, count: usize) -> Result<Vec<u8>> {
        self.check_range(index, count)?;
        let mut out = vec![0u8; count];
        let filled = self.walk_back(index, count, |at, bytes| {
            out[at..at + bytes.len()].copy_from_slice(bytes);
            true
        });
        debug_assert!(filled, "validated range failed to materialize");
        Ok(out)
    }

    /// Whether the logical range `[index, index + count)` equals
    /// `other[0..count]`, byte for byte.
    ///
    /// Returns `false` — not an error — when `count == 0`, when the range
    /// is out of bounds, or when `other` is shorter than `count`.
    ///
    /// Short-circuits on the first mismatching fragment without allocating,
    /// which is the point of keeping this separate from
    /// [`extract`](Chain::extract).
    ///
    /// ```rust
    /// use textchain::Chain;
    ///
    /// let mut chain = Chain::new();
    /// chain.append_str("Hello, ");
    /// chain.append_str("World!");
    /// assert!(chain.compare_range(b"o, Wo", 4, 5));
    /// assert!(!chain.compare_range(b"o, wo", 4, 5));
    /// assert!(!chain.compare_range(b"", 0, 0));
    /// ```
    #[must_use]
    pub fn compare_range(&self, other: &[u8], index: usize, count: usize) -> bool {
        if self.check_range(index, count).is_err() || other.len() < count {
            return false;
        }
        self.walk_back(index, count, |at, bytes| bytes == &other[at..at + bytes.len()])
    }

    /// Visit the overlaps between `[index, index + count)` and each
    /// fragment, back-to-front.
    ///
    /// `visit` receives the overlap's offset within the requested range
    /// and its bytes; returning `false` stops the walk. The range must
    /// already be validated. Returns whether the walk ran to completion.
    fn walk_back<F>(&self, index: usize, count: usize, mut visit: F) -> bool
    where
        F: FnMut(usize, &'a [u8]) -> bool,
    {
        let Some(mut id) = self.node_at(index + count - 1) else {
            debug_assert!(false, "no fragment covers an in-range index");
            return false;
        };

        let mut remaining = count;
        while remaining > 0 {
            let node = &self.nodes[id];
            if index + remaining <= node.weight {
                // The unconsumed range lies entirely before this fragment.
                let Some(next) = node.next else {
                    debug_assert!(false, "weight bookkeeping out of sync with fragment sizes");
                    return false;
                };
                id = next;
                continue;
            }
            // Overlap is [weight + local, index + remaining).
            let local = index.saturating_sub(node.weight);
            let take = index + remaining - node.weight - local;
            remaining -= take;
            if !visit(remaining, &node.data[local..local + take]) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello_world() -> Chain<'static> {
        let mut chain = Chain::new();
        chain.append_str("Hello, ");
        chain.append_str("World!");
        chain
    }

    #[test]
    fn test_extract_within_one_fragment() {
        let chain = hello_world();
        assert_eq!(chain.extract(1, 3).unwrap(), b"ell");
        assert_eq!(chain.extract(8, 4).unwrap(), b"orld");
    }

    #[test]
    fn test_extract_whole_fragment_after_offset() {
        // The last fragment starts at 7; count (6) is less than that
        // start offset, so the walk must still begin at the located
        // fragment rather than skipping past it.
        let chain = hello_world();
        assert_eq!(chain.extract(7, 6).unwrap(), b"World!");
    }

    #[test]
    fn test_extract_across_boundary() {
        let chain = hello_world();
        assert_eq!(chain.extract(5, 3).unwrap(), b", W");
        assert_eq!(chain.extract(0, 13).unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_extract_many_fragments() {
        let mut chain = Chain::new();
        for part in ["a", "bc", "def", "ghij"] {
            chain.append_str(part);
        }
        assert_eq!(chain.extract(0, 10).unwrap(), b"abcdefghij");
        assert_eq!(chain.extract(2, 6).unwrap(), b"cdefgh");
        assert_eq!(chain.extract(1, 2).unwrap(), b"bc");
    }

    #[test]
    fn test_extract_declines() {
        let chain = hello_world();
        assert!(chain.extract(0, 0).is_err());
        assert!(chain.extract(13, 1).is_err());
        assert!(chain.extract(0, 14).is_err());
        assert!(chain.extract(usize::MAX, 1).is_err());
        assert!(Chain::new().extract(0, 1).is_err());
    }

    #[test]
    fn test_compare_range_matches() {
        let chain = hello_world();
        assert!(chain.compare_range(b"Hello, World!", 0, 13));
        assert!(chain.compare_range(b"World!", 7, 6));
        assert!(chain.compare_range(b", W", 5, 3));
    }

    #[test]
    fn test_compare_range_mismatch() {
        let chain = hello_world();
        assert!(!chain.compare_range(b"World?", 7, 6));
        assert!(!chain.compare_range(b"hello", 0, 5));
    }

    #[test]
    fn test_compare_range_ignores_excess_in_other() {
        let chain = hello_world();
        // Only the first `count` bytes of `other` participate.
        assert!(chain.compare_range(b"Hello, World! and more", 0, 13));
    }

    #[test]
    fn test_compare_range_declines_with_false() {
        let chain = hello_world();
        assert!(!chain.compare_range(b"", 0, 0));
        assert!(!chain.compare_range(b"x", 13, 1));
        assert!(!chain.compare_range(b"Hel", 0, 5)); // other too short
        assert!(!Chain::new().compare_range(b"x", 0, 1));
    }
}
