//! Errors returned by fallible tree operations.

/// Errors triggered by tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The operation needs at least one element but the tree is empty.
    #[error("the tree is empty")]
    Empty,
    /// A token of a serialized tree could not be parsed into an element.
    #[error("token {position} ({token:?}) is not a valid element")]
    Parse {
        /// Zero-based index of the token in the input.
        position: usize,
        /// The offending token.
        token: String,
    },
    /// The tokens parsed fine but are not the preorder sequence of any
    /// binary search tree.
    #[error("token {position} breaks the search tree ordering of a preorder sequence")]
    NotPreorder {
        /// Zero-based index of the first out-of-order token.
        position: usize,
    },
    /// An inorder and a preorder sequence do not describe the same tree.
    #[error("inorder and preorder sequences do not describe the same tree")]
    TraversalMismatch,
    /// An element computed from others doesn't fit in the element type.
    #[error("arithmetic on tree elements overflowed")]
    Overflow,
}
