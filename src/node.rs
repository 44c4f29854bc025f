//! Node storage shared by every tree type in this crate.
//!
//! Nodes live in an [`Arena`] owned by exactly one tree and refer to their
//! children by [`NodeId`]. Nothing outside the owning tree ever holds a
//! `NodeId`, so a node can never be aliased across two trees. Lookups that
//! hand a node back to the caller (e.g. lowest common ancestor) return a
//! [`NodeRef`], which borrows the tree instead of owning anything.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Position of a [`Node`] inside its tree's [`Arena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// One element and its two child relations. Inside a
/// [`CircularList`][crate::circular_list::CircularList] the same relations
/// are read as `prev` (`left`) and `next` (`right`).
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Append-only node storage. Nodes are only released all at once, when the
/// arena is cleared or dropped.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> Arena<T> {
    /// Stores a new childless node and returns its id.
    pub(crate) fn push(&mut self, element: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(element));
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Drops every node pushed after the arena held `len` nodes.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    /// Consumes the arena, returning the elements of the nodes in `order`.
    /// Nodes left out of `order` are dropped.
    pub(crate) fn into_elements(self, order: impl IntoIterator<Item = NodeId>) -> Vec<T> {
        let mut slots: Vec<_> = self.nodes.into_iter().map(|node| Some(node.element)).collect();
        order.into_iter().filter_map(|id| slots[id.0].take()).collect()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }
}

/// A read-only handle to one node of a tree.
///
/// Two handles are equal when they point at the same node of the same tree,
/// regardless of the elements stored there.
///
/// # Examples
///
/// ```
/// use bintree::BinaryTree;
///
/// let tree: BinaryTree<i32> = [1, 2, 3].into_iter().collect();
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.element(), &1);
/// assert_eq!(root.left().map(|n| *n.element()), Some(2));
/// assert!(root.right().unwrap().is_leaf());
/// ```
pub struct NodeRef<'a, T> {
    arena: &'a Arena<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}
impl<T> Eq for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, id: NodeId) -> Self {
        Self { arena, id }
    }

    /// The element stored in this node.
    pub fn element(&self) -> &'a T {
        &self.arena[self.id].element
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<Self> {
        self.arena[self.id].left.map(|id| Self::new(self.arena, id))
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<Self> {
        self.arena[self.id].right.map(|id| Self::new(self.arena, id))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.arena[self.id].is_leaf()
    }
}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", self.element())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}
