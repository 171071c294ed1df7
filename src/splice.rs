//! Structural surgery: concatenate, split, and delete.
//!
//! None of these copy text. Concat re-bases one side's weights and links
//! the two lists; split re-slices the fragment under the cut point into
//! two views of the same bytes; delete is two splits, a drop, and a
//! concat. All three consume their inputs by value — a split or
//! concatenated chain cannot be reused by mistake.

use crate::chain::{Chain, Node};
use crate::error::Result;

impl<'a> Chain<'a> {
    /// Join two chains: `self`'s text followed by `last`'s text.
    ///
    /// Consumes both. An empty input returns the other unchanged.
    ///
    /// O(fragments of `last`), independent of `self`'s size: every
    /// fragment of `last` is re-based by `self.len()` and `last`'s tail is
    /// linked to `self`'s head. When either order works, pass the
    /// structurally smaller chain as `last`.
    ///
    /// ```rust
    /// use textchain::Chain;
    ///
    /// let mut first = Chain::new();
    /// first.append_str("Hello, ");
    /// let mut last = Chain::new();
    /// last.append_str("World!");
    ///
    /// let chain = first.concat(last);
    /// assert_eq!(chain.to_bytes(), b"Hello, World!");
    /// ```
    #[must_use]
    pub fn concat(mut self, last: Chain<'a>) -> Chain<'a> {
        if last.is_empty() {
            return self;
        }
        if self.is_empty() {
            return last;
        }

        let first_len = self.len();
        let first_head = self.head;
        let base = self.nodes.len();
        self.nodes.extend(last.nodes.into_iter().map(|node| Node {
            weight: node.weight + first_len,
            data: node.data,
            next: node.next.map(|id| id + base),
        }));
        // last's tail now precedes self's old head in link order.
        if let Some(tail) = last.tail {
            self.nodes[tail + base].next = first_head;
        }
        self.head = last.head.map(|id| id + base);
        self
    }

    /// Partition into `(before, after)` covering `[0, index)` and
    /// `[index, len)`.
    ///
    /// Consumes the input. `index >= self.len()` yields the whole chain as
    /// `before` and an empty `after`; `index == 0` the reverse. A cut that
    /// lands inside a fragment slices its view into two sub-views of the
    /// same backing bytes — one new fragment record, zero byte copies.
    ///
    /// `after`'s weights are re-based by `-index` so both results are
    /// zero-founded. O(fragments) worst case.
    ///
    /// ```rust
    /// use textchain::Chain;
    ///
    /// let mut chain = Chain::new();
    /// chain.append_str("Hello, World!");
    ///
    /// let (before, after) = chain.split(7);
    /// assert_eq!(before.to_bytes(), b"Hello, ");
    /// assert_eq!(after.to_bytes(), b"World!");
    /// ```
    #[must_use]
    pub fn split(self, index: usize) -> (Chain<'a>, Chain<'a>) {
        if index >= self.len() {
            return (self, Chain::new());
        }

        // Walk from the head (highest offsets first): fragments at or past
        // the cut go to `after`, the rest to `before`. The fragment under
        // the cut contributes a slice to each.
        let mut after = Vec::new();
        let mut before = Vec::new();
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            cursor = node.next;
            if node.weight >= index {
                after.push(Node {
                    weight: node.weight - index,
                    data: node.data,
                    next: None,
                });
            } else if node.weight + node.data.len() > index {
                let local = index - node.weight;
                after.push(Node {
                    weight: 0,
                    data: &node.data[local..],
                    next: None,
                });
                before.push(Node {
                    weight: node.weight,
                    data: &node.data[..local],
                    next: None,
                });
            } else {
                // Entirely before the cut; already zero-founded.
                before.push(Node {
                    weight: node.weight,
                    data: node.data,
                    next: None,
                });
            }
        }

        (Chain::from_link_order(before), Chain::from_link_order(after))
    }

    /// Remove the logical range `[index, index + count)`.
    ///
    /// Composed from the structural operations: split at `index`, split
    /// the remainder at `count`, drop the middle, concatenate the rest.
    /// No independent offset arithmetic.
    ///
    /// # Errors
    ///
    /// Declines with [`Error::EmptyRange`](crate::Error::EmptyRange) or
    /// [`Error::OutOfBounds`](crate::Error::OutOfBounds) before any
    /// mutation; on error the chain is exactly as it was.
    ///
    /// ```rust
    /// use textchain::Chain;
    ///
    /// let mut chain = Chain::new();
    /// chain.append_str("Hello, World!");
    /// chain.delete(5, 3).unwrap();
    /// assert_eq!(chain.to_bytes(), b"Helloorld!");
    /// ```
    pub fn delete(&mut self, index: usize, count: usize) -> Result<()> {
        self.check_range(index, count)?;
        let chain = std::mem::take(self);
        let (before, rest) = chain.split(index);
        let (_removed, after) = rest.split(count);
        *self = before.concat(after);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(parts: &[&'static str]) -> Chain<'static> {
        let mut chain = Chain::new();
        for part in parts {
            chain.append_str(part);
        }
        chain
    }

    #[test]
    fn test_concat_basic() {
        let first = build(&["Hello, "]);
        let last = build(&["Wor", "ld!"]);
        let chain = first.concat(last);
        assert_eq!(chain.len(), 13);
        assert_eq!(chain.to_bytes(), b"Hello, World!");
        assert_eq!(chain.fragment_count(), 3);
    }

    #[test]
    fn test_concat_with_empty() {
        let chain = build(&["abc"]);
        let joined = chain.concat(Chain::new());
        assert_eq!(joined.to_bytes(), b"abc");

        let joined = Chain::new().concat(build(&["abc"]));
        assert_eq!(joined.to_bytes(), b"abc");

        let joined = Chain::new().concat(Chain::new());
        assert!(joined.is_empty());
    }

    #[test]
    fn test_concat_rebases_offsets() {
        let chain = build(&["ab", "cd"]).concat(build(&["ef", "gh"]));
        let starts: Vec<_> = chain.fragments().map(|f| f.start).collect();
        assert_eq!(starts, [6, 4, 2, 0]);
        assert_eq!(chain.extract(3, 3).unwrap(), b"def");
    }

    #[test]
    fn test_concat_then_append() {
        let mut chain = build(&["ab"]).concat(build(&["cd"]));
        chain.append_str("ef");
        assert_eq!(chain.to_bytes(), b"abcdef");
        assert_eq!(chain.locate(4).unwrap().start, 4);
    }

    #[test]
    fn test_split_on_fragment_boundary() {
        let (before, after) = build(&["Hello, ", "World!"]).split(7);
        assert_eq!(before.to_bytes(), b"Hello, ");
        assert_eq!(after.to_bytes(), b"World!");
        assert_eq!(before.fragment_count(), 1);
        assert_eq!(after.fragment_count(), 1);
        assert_eq!(after.locate(0).unwrap().start, 0);
    }

    #[test]
    fn test_split_inside_fragment_shares_bytes() {
        let backing = "Hello, World!";
        let mut chain = Chain::new();
        chain.append_str(backing);

        let (before, after) = chain.split(5);
        assert_eq!(before.to_bytes(), b"Hello");
        assert_eq!(after.to_bytes(), b", World!");

        // Both halves view the original buffer, not copies of it.
        let left = before.locate(0).unwrap();
        let right = after.locate(0).unwrap();
        assert_eq!(left.data.as_ptr(), backing.as_ptr());
        assert_eq!(right.data.as_ptr(), backing[5..].as_ptr());
    }

    #[test]
    fn test_split_at_zero() {
        let (before, after) = build(&["ab", "cd"]).split(0);
        assert!(before.is_empty());
        assert_eq!(after.to_bytes(), b"abcd");
        assert_eq!(after.locate(2).unwrap().start, 2);
    }

    #[test]
    fn test_split_at_or_past_length() {
        let (before, after) = build(&["ab", "cd"]).split(4);
        assert_eq!(before.to_bytes(), b"abcd");
        assert!(after.is_empty());

        let (before, after) = build(&["ab"]).split(100);
        assert_eq!(before.to_bytes(), b"ab");
        assert!(after.is_empty());
    }

    #[test]
    fn test_split_empty_chain() {
        let (before, after) = Chain::new().split(0);
        assert!(before.is_empty());
        assert!(after.is_empty());
    }

    #[test]
    fn test_split_multi_fragment_midpoints() {
        let chain = build(&["abc", "def", "ghi"]);
        let (before, after) = chain.split(4);
        assert_eq!(before.to_bytes(), b"abcd");
        assert_eq!(after.to_bytes(), b"efghi");
        // Cut fragment contributes one slice to each side.
        assert_eq!(before.fragment_count(), 2);
        assert_eq!(after.fragment_count(), 2);
    }

    #[test]
    fn test_split_then_concat_restores_content() {
        for index in 0..=9 {
            let chain = build(&["abc", "def", "ghi"]);
            let (before, after) = chain.split(index);
            let rejoined = before.concat(after);
            assert_eq!(rejoined.to_bytes(), b"abcdefghi", "split at {index}");
        }
    }

    #[test]
    fn test_delete_middle() {
        let mut chain = build(&["Hello, World!"]);
        chain.delete(5, 3).unwrap();
        assert_eq!(chain.to_bytes(), b"Helloorld!");
        assert_eq!(chain.len(), 10);
    }

    #[test]
    fn test_delete_spanning_fragments() {
        let mut chain = build(&["abc", "def", "ghi"]);
        chain.delete(2, 5).unwrap();
        assert_eq!(chain.to_bytes(), b"abhi");
    }

    #[test]
    fn test_delete_prefix_and_suffix() {
        let mut chain = build(&["abcdef"]);
        chain.delete(0, 2).unwrap();
        assert_eq!(chain.to_bytes(), b"cdef");
        chain.delete(2, 2).unwrap();
        assert_eq!(chain.to_bytes(), b"cd");
    }

    #[test]
    fn test_delete_everything() {
        let mut chain = build(&["ab", "cd"]);
        chain.delete(0, 4).unwrap();
        assert!(chain.is_empty());
        chain.append_str("new");
        assert_eq!(chain.to_bytes(), b"new");
    }

    #[test]
    fn test_delete_declines_without_mutation() {
        let mut chain = build(&["abc", "def"]);
        assert!(chain.delete(0, 0).is_err());
        assert!(chain.delete(4, 3).is_err());
        assert!(chain.delete(6, 1).is_err());
        assert_eq!(chain.to_bytes(), b"abcdef");
        assert_eq!(chain.fragment_count(), 2);
    }
}
