//! The Chain container: fragment arena, append, and index lookup.
//!
//! ## Representation
//!
//! Fragments live in a per-chain arena (`Vec<Node>`) and link to each other
//! by arena index rather than by pointer. The arena is always compact:
//! every slot is reachable from `head`. Append pushes a slot, concat
//! extends the surviving arena and remaps indices, split rebuilds the two
//! output arenas in link order.
//!
//! ## The Weight Invariant
//!
//! Traversal from `head` follows `next` links through *decreasing* logical
//! offsets: the head is the logically last run of text, the tail the first.
//! Each node's `weight` is the total length of the text that logically
//! precedes it, so for every node `f` with successor `g`:
//!
//! ```text
//! weight(f) = weight(g) + len(g)        (tail has weight 0)
//! ```
//!
//! and the chain's length is `weight(head) + len(head)`. Every public
//! operation preserves this equation; index lookup relies on it.

use crate::error::{Error, Result};
use crate::fragment::Fragment;

/// One arena slot: a borrowed run of bytes, its cumulative weight, and the
/// index of the next node in link order.
#[derive(Debug, Clone)]
pub(crate) struct Node<'a> {
    /// Total length of the logically preceding text.
    pub(crate) weight: usize,
    pub(crate) data: &'a [u8],
    pub(crate) next: Option<usize>,
}

/// A mutable sequence of borrowed text runs with copy-free editing.
///
/// See the [crate docs](crate) for the full design discussion. In short: a
/// `Chain<'a>` is an ordered list of [`Fragment`]s viewing buffers that the
/// caller keeps alive for `'a`. Appending, splitting, concatenating, and
/// deleting re-slice and re-link those views; the underlying bytes are
/// only ever copied out by [`extract`](Chain::extract) /
/// [`to_bytes`](Chain::to_bytes).
///
/// ```rust
/// use textchain::Chain;
///
/// let mut chain = Chain::new();
/// chain.append_str("Hello, ");
/// chain.append_str("World!");
/// assert_eq!(chain.len(), 13);
/// assert_eq!(chain.to_bytes(), b"Hello, World!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Chain<'a> {
    pub(crate) nodes: Vec<Node<'a>>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
}

impl<'a> Chain<'a> {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total length of the logical text, in bytes.
    ///
    /// O(1): the head fragment's weight already accounts for everything
    /// that precedes it.
    #[must_use]
    pub fn len(&self) -> usize {
        self.head.map_or(0, |head| {
            let node = &self.nodes[head];
            node.weight + node.data.len()
        })
    }

    /// Whether the chain contains no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The number of fragments in the chain.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append `data` as the new logically last run of text.
    ///
    /// O(1). The bytes are borrowed, not copied; the new fragment's weight
    /// is the chain's length before the append. An empty span is a no-op —
    /// the chain never retains zero-length fragments.
    pub fn append(&mut self, data: &'a [u8]) {
        if data.is_empty() {
            return;
        }
        let weight = self.len();
        let id = self.nodes.len();
        self.nodes.push(Node {
            weight,
            data,
            next: self.head,
        });
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
    }

    /// Append the UTF-8 bytes of `text`.
    ///
    /// Convenience over [`append`](Chain::append) for string callers.
    pub fn append_str(&mut self, text: &'a str) {
        self.append(text.as_bytes());
    }

    /// Find the fragment whose span contains the logical index `index`.
    ///
    /// Returns `None` when the chain is empty or `index >= self.len()`.
    /// O(k) where k is the fragment's distance from the head: the scan
    /// walks the decreasing-offset links until the first fragment that
    /// starts at or before `index`.
    #[must_use]
    pub fn locate(&self, index: usize) -> Option<Fragment<'a>> {
        self.node_at(index).map(|id| {
            let node = &self.nodes[id];
            Fragment {
                start: node.weight,
                data: node.data,
            }
        })
    }

    /// Iterate over fragments in link order: logically last first, with
    /// strictly decreasing `start` offsets, ending at the tail
    /// (`start == 0`).
    #[must_use]
    pub fn fragments(&self) -> Fragments<'_, 'a> {
        Fragments {
            chain: self,
            cursor: self.head,
        }
    }

    /// Copy the whole logical text into an owned buffer.
    ///
    /// Unlike [`extract`](Chain::extract) this accepts an empty chain,
    /// returning an empty vec.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.len()];
        for fragment in self.fragments() {
            out[fragment.span()].copy_from_slice(fragment.data);
        }
        out
    }

    /// Arena index of the node covering logical index `index`.
    pub(crate) fn node_at(&self, index: usize) -> Option<usize> {
        let mut id = self.head?;
        while index < self.nodes[id].weight {
            id = self.nodes[id].next?;
        }
        let node = &self.nodes[id];
        if index - node.weight >= node.data.len() {
            // A gap between fragments would violate the weight invariant.
            return None;
        }
        Some(id)
    }

    /// Validate `[index, index + count)` against the current length.
    ///
    /// Shared by extract, compare-range, and delete: each declines without
    /// touching the chain when this fails.
    pub(crate) fn check_range(&self, index: usize, count: usize) -> Result<()> {
        if count == 0 {
            return Err(Error::EmptyRange);
        }
        let length = self.len();
        match index.checked_add(count) {
            Some(end) if end <= length => Ok(()),
            _ => Err(Error::OutOfBounds {
                index,
                count,
                length,
            }),
        }
    }

    /// Rebuild a chain from nodes listed in link order (logically last
    /// first), with weights already set. Fixes up the index links.
    pub(crate) fn from_link_order(mut nodes: Vec<Node<'a>>) -> Self {
        let count = nodes.len();
        if count == 0 {
            return Self::new();
        }
        for (id, node) in nodes.iter_mut().enumerate() {
            node.next = if id + 1 < count { Some(id + 1) } else { None };
        }
        Self {
            nodes,
            head: Some(0),
            tail: Some(count - 1),
        }
    }
}

/// Iterator over a chain's fragments in link order (decreasing offsets).
///
/// Created by [`Chain::fragments`].
#[derive(Debug)]
pub struct Fragments<'c, 'a> {
    chain: &'c Chain<'a>,
    cursor: Option<usize>,
}

impl<'a> Iterator for Fragments<'_, 'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = &self.chain.nodes[id];
        self.cursor = node.next;
        Some(Fragment {
            start: node.weight,
            data: node.data,
        })
    }
}
