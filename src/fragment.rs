//! The Fragment type: a borrowed run of text with its logical offset.

/// One contiguous run of text and its position in the chain.
///
/// A fragment never owns its bytes. It is a view into a buffer the caller
/// keeps alive, which is what lets the chain split and reassemble text
/// without copying it.
///
/// ## Logical Offsets
///
/// `start` is the fragment's offset in the *logical* text of the chain,
/// not a position in any backing buffer. It equals the total length of all
/// text that logically precedes the fragment:
///
/// ```rust
/// use textchain::Chain;
///
/// let mut chain = Chain::new();
/// chain.append_str("Hello, ");
/// chain.append_str("World!");
///
/// let frag = chain.locate(9).unwrap();
/// assert_eq!(frag.start, 7);
/// assert_eq!(frag.data, b"World!");
/// assert_eq!(frag.span(), 7..13);
/// ```
///
/// Offsets are byte offsets. The chain does no encoding handling; callers
/// working in UTF-8 are responsible for cutting on character boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Logical offset of this fragment's first byte within the chain.
    pub start: usize,
    /// The bytes this fragment contributes, borrowed from the caller.
    pub data: &'a [u8],
}

impl Fragment<'_> {
    /// The number of bytes this fragment contributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this fragment is empty.
    ///
    /// A chain never retains an empty fragment, so this is `false` for any
    /// fragment obtained from [`Chain::locate`](crate::Chain::locate) or
    /// [`Chain::fragments`](crate::Chain::fragments).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The logical byte span this fragment covers within the chain.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.data.len()
    }
}

impl std::fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fragment {{ span: {}..{}, len: {} }}",
            self.start,
            self.start + self.data.len(),
            self.len()
        )
    }
}
