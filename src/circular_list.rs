//! Converting a tree into a circular doubly linked list.
//!
//! The conversion reuses the tree's nodes in place: every `left` relation
//! becomes a `prev` link and every `right` relation a `next` link. Since the
//! result is a ring rather than a tree it comes back as its own type,
//! [`CircularList`], so none of the tree algorithms can be run on it by
//! accident.
//!
//! # Examples
//!
//! ```
//! use bintree::BinaryTree;
//!
//! let tree: BinaryTree<i32> = (1..=6).collect();
//! let inorder = tree.inorder();
//!
//! let list = tree.into_circular_list();
//! assert_eq!(list.len(), 6);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), inorder);
//! assert_eq!(list.into_vec(), inorder);
//! ```

use std::fmt;

use crate::node::{Arena, NodeId};
use crate::BinaryTree;

impl<T> BinaryTree<T> {
    /// Turns the tree into a ring ordered by its inorder sequence.
    ///
    /// Each subtree is converted to its own ring first. Then the left ring,
    /// the node itself (as a ring of one), and the right ring are spliced
    /// together in that order.
    pub fn into_circular_list(self) -> CircularList<T> {
        let BinaryTree { mut arena, root } = self;
        let head = to_ring(&mut arena, root);
        CircularList { arena, head }
    }
}

fn to_ring<T>(arena: &mut Arena<T>, node: Option<NodeId>) -> Option<NodeId> {
    let id = node?;
    let (left, right) = (arena[id].left, arena[id].right);
    let left_ring = to_ring(arena, left);
    let right_ring = to_ring(arena, right);

    arena[id].left = Some(id);
    arena[id].right = Some(id);

    let ring = append(arena, left_ring, Some(id));
    append(arena, ring, right_ring)
}

/// Splices ring `b` after the last node of ring `a` and returns the head of
/// the combined ring.
fn append<T>(arena: &mut Arena<T>, a: Option<NodeId>, b: Option<NodeId>) -> Option<NodeId> {
    let (a, b) = match (a, b) {
        (None, ring) | (ring, None) => return ring,
        (Some(a), Some(b)) => (a, b),
    };

    let a_last = arena[a].left.unwrap_or(a);
    let b_last = arena[b].left.unwrap_or(b);
    join(arena, a_last, b);
    join(arena, b_last, a);
    Some(a)
}

fn join<T>(arena: &mut Arena<T>, first: NodeId, second: NodeId) {
    arena[first].right = Some(second);
    arena[second].left = Some(first);
}

/// A circular doubly linked list built from the nodes of a [`BinaryTree`].
pub struct CircularList<T> {
    arena: Arena<T>,
    head: Option<NodeId>,
}

impl<T> CircularList<T> {
    /// Number of elements in the ring.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the ring has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first element, i.e. the leftmost element of the original tree.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|id| &self.arena[id].element)
    }

    /// Walks the ring once following `next` links, starting at the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { ids: self.ids() }
    }

    /// Walks the ring once following `prev` links, starting at the last
    /// element.
    pub fn iter_rev(&self) -> Iter<'_, T> {
        let last = self.head.and_then(|head| self.arena[head].left);
        Iter {
            ids: Ids {
                arena: &self.arena,
                start: last,
                next: last,
                forward: false,
            },
        }
    }

    /// The elements in ring order.
    pub fn into_vec(self) -> Vec<T> {
        let order: Vec<_> = self.ids().collect();
        self.arena.into_elements(order)
    }

    fn ids(&self) -> Ids<'_, T> {
        Ids {
            arena: &self.arena,
            start: self.head,
            next: self.head,
            forward: true,
        }
    }
}

/// Node ids of one lap around the ring.
struct Ids<'a, T> {
    arena: &'a Arena<T>,
    start: Option<NodeId>,
    next: Option<NodeId>,
    forward: bool,
}

impl<T> Iterator for Ids<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        let node = &self.arena[id];
        let following = if self.forward { node.right } else { node.left };
        self.next = following.filter(|&following| Some(following) != self.start);
        Some(id)
    }
}

/// Iterator over a [`CircularList`] that stops after one lap.
pub struct Iter<'a, T> {
    ids: Ids<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.ids.arena;
        let id = self.ids.next()?;
        Some(&arena[id].element)
    }
}

impl<T> fmt::Debug for CircularList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for CircularList<T>
where
    T: fmt::Display,
{
    /// Elements separated by tabs, in ring order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}
