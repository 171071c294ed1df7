//! # textchain
//!
//! A copy-free text buffer built from a chain of weighted fragments.
//!
//! ## The Problem
//!
//! An editor buffer sees a stream of edits: load a file, type in the middle,
//! cut a region, paste it somewhere else. The naive backing store — one big
//! `String` — turns every one of those edits into a memmove of everything
//! after the edit point. On a 100 MB log file, inserting a character costs
//! 100 MB of copying.
//!
//! The classic answer is to never copy the text at all. Keep the original
//! bytes where they are, and represent the buffer as a sequence of *views*
//! into them:
//!
//! ```text
//! Backing buffers (owned by the caller, never copied):
//!
//!   "Hello, "        "World!"
//!    ^^^^^^^          ^^^^^^
//!       |                |
//!       +--- fragment ---+--- fragment
//!
//! Logical buffer: "Hello, World!"
//! ```
//!
//! Appends push a new view. Splits slice an existing view in two. Deletes
//! drop views. The bytes themselves never move.
//!
//! ## The Structure
//!
//! A [`Chain`] is a singly linked list of fragments in *reverse* logical
//! order: the head is the most recently appended (logically last) run of
//! text, the tail is the logically first. Each fragment carries its
//! `weight` — the total length of all text that logically precedes it —
//! so an index lookup needs no tree and no backing scan:
//!
//! ```text
//! head                                   tail
//!  |                                      |
//!  v                                      v
//! +----------------+    +--------------+    (link order)
//! | "World!"  w=7  | -> | "Hello, " w=0|
//! +----------------+    +--------------+
//!
//! logical order:  "Hello, " (offsets 0..7)  then  "World!" (offsets 7..13)
//! length = head.weight + head.len = 7 + 6 = 13
//! ```
//!
//! The weight bookkeeping is the whole trick: every fragment satisfies
//! `weight(f) = weight(next(f)) + len(next(f))`, terminating at the tail
//! with weight 0. Every operation below preserves that equation.
//!
//! ## Operations
//!
//! | Operation                  | Cost            | Copies text? |
//! |----------------------------|-----------------|--------------|
//! | [`Chain::append`]          | O(1)            | no           |
//! | [`Chain::locate`]          | O(fragments)    | no           |
//! | [`Chain::extract`]         | O(count)        | into output  |
//! | [`Chain::compare_range`]   | O(count)        | no           |
//! | [`Chain::concat`]          | O(frags of last)| no           |
//! | [`Chain::split`]           | O(fragments)    | no           |
//! | [`Chain::delete`]          | O(fragments)    | no           |
//!
//! This is deliberately an unbalanced chain, not a balanced rope: there is
//! no rebalancing machinery, and `locate` is a linear scan. For workloads
//! dominated by appends and occasional structural edits, the simplicity
//! wins; for heavy random access over millions of fragments, reach for a
//! rope crate instead.
//!
//! ## Ownership
//!
//! Fragments borrow their bytes (`&'a [u8]`). The chain owns only the
//! fragment records, never the text — the borrow checker enforces that the
//! backing buffers outlive the chain. [`Chain::split`] and
//! [`Chain::concat`] consume their inputs by value; "don't reuse a split
//! chain" is a compile error here, not a convention.
//!
//! ## Quick Start
//!
//! ```rust
//! use textchain::Chain;
//!
//! let mut chain = Chain::new();
//! chain.append_str("Hello, ");
//! chain.append_str("World!");
//! assert_eq!(chain.len(), 13);
//!
//! // Substring without touching the backing buffers until the copy-out.
//! assert_eq!(chain.extract(7, 6).unwrap(), b"World!");
//!
//! // Cut and reassemble: no byte is copied, only views are re-sliced.
//! let (before, after) = chain.split(5);
//! assert_eq!(before.to_bytes(), b"Hello");
//! assert_eq!(after.to_bytes(), b", World!");
//!
//! let whole = before.concat(after);
//! assert_eq!(whole.to_bytes(), b"Hello, World!");
//! ```

mod chain;
mod error;
mod extract;
mod fragment;
mod splice;

pub use chain::{Chain, Fragments};
pub use error::{Error, Result};
pub use fragment::Fragment;
