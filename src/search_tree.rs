//! A binary search tree: a [`BinaryTree`] whose elements are placed by
//! comparison instead of by level.
//!
//! For every node, everything in its left subtree compares less than it and
//! everything in its right subtree compares greater than or equal to it, so
//! equal elements always go right. The tree does not rebalance itself.
//!
//! All of [`BinaryTree`]'s read-only queries are available through `Deref`.
//! Operations that could break the ordering (level-order insertion,
//! mirroring, the sum property rewrite) are not, since they need `&mut`
//! access to the inner tree.
//!
//! # Examples
//!
//! ```
//! use bintree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! for element in [50, 25, 15, 35, 1, 40, 80, 55, 95] {
//!     tree.insert(element);
//! }
//!
//! assert_eq!(tree.inorder(), [1, 15, 25, 35, 40, 50, 55, 80, 95]);
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.max(), Ok(&95));
//! assert_eq!(tree.width(), 6);
//!
//! // The serialized form is the preorder sequence, which is enough to get
//! // the exact same tree back.
//! let serialized = tree.serialize();
//! assert_eq!(serialized, "50 25 15 1 35 40 80 55 95");
//!
//! let mut copy = BinarySearchTree::<i32>::new();
//! copy.deserialize(&serialized).unwrap();
//! assert_eq!(copy, tree);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::node::{Node, NodeId, NodeRef};
use crate::{BinaryTree, TreeError};

/// A binary search tree where ties go right.
#[derive(Clone, PartialEq, Eq)]
pub struct BinarySearchTree<T> {
    tree: BinaryTree<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for BinarySearchTree<T> {
    type Target = BinaryTree<T>;

    fn deref(&self) -> &BinaryTree<T> {
        &self.tree
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
        }
    }

    /// The underlying tree, for read-only algorithms.
    pub fn as_binary_tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    /// Gives up the ordering guarantee and returns the plain tree, e.g. to
    /// mirror it or turn it into a [`CircularList`][crate::CircularList].
    pub fn into_binary_tree(self) -> BinaryTree<T> {
        self.tree
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Adds `element` as a new leaf: left of every node it compares less
    /// than on the way down, right of every other node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.left().map(|n| *n.element()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.element()), Some(2));
    /// ```
    pub fn insert(&mut self, element: T)
    where
        T: Ord,
    {
        let Some(mut parent) = self.tree.root else {
            self.tree.root = Some(self.tree.arena.push(element));
            return;
        };

        loop {
            let node = &self.tree.arena[parent];
            let next = match element.cmp(&node.element) {
                Ordering::Less => node.left,
                Ordering::Equal | Ordering::Greater => node.right,
            };
            match next {
                Some(child) => parent = child,
                None => break,
            }
        }

        let goes_left = element < self.tree.arena[parent].element;
        let child = self.tree.arena.push(element);
        let parent_node = &mut self.tree.arena[parent];
        if goes_left {
            parent_node.left = Some(child);
        } else {
            parent_node.right = Some(child);
        }

        if cfg!(debug_assertions) {
            let parent = &self.tree.arena[parent];
            if let Some(left) = parent.left {
                assert!(self.tree.arena[left].element < parent.element);
            }
            if let Some(right) = parent.right {
                assert!(self.tree.arena[right].element >= parent.element);
            }
        }
    }

    /// Whether some node holds an element equal to `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.tree.root;
        while let Some(id) = current {
            let node = &self.tree.arena[id];
            current = match element.cmp(&node.element) {
                Ordering::Less => node.left,
                Ordering::Equal => return true,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// The smallest element.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] when the tree has no elements.
    pub fn min(&self) -> Result<&T, TreeError> {
        self.extreme(|node| node.left)
    }

    /// The largest element. With duplicates, this is the last one inserted.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] when the tree has no elements.
    pub fn max(&self) -> Result<&T, TreeError> {
        self.extreme(|node| node.right)
    }

    /// Follows `step` from the root for as long as it leads somewhere.
    fn extreme(&self, step: impl Fn(&Node<T>) -> Option<NodeId>) -> Result<&T, TreeError> {
        let mut current = self.tree.root.ok_or(TreeError::Empty)?;
        while let Some(next) = step(&self.tree.arena[current]) {
            current = next;
        }
        Ok(&self.tree.arena[current].element)
    }

    /// The deepest node that has both `a` and `b` in its subtree.
    ///
    /// When both elements are present this walks down from the root by
    /// comparison and stops where `a` and `b` part ways, without visiting
    /// any other branch. Otherwise it behaves exactly like
    /// [`BinaryTree::lowest_common_ancestor`]: the node holding whichever
    /// element is present, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32> = [50, 25, 15, 35, 1, 40, 80, 55, 95].into_iter().collect();
    ///
    /// assert_eq!(tree.lowest_common_ancestor(&15, &1).map(|n| *n.element()), Some(15));
    /// assert_eq!(tree.lowest_common_ancestor(&1, &40).map(|n| *n.element()), Some(25));
    /// assert_eq!(tree.lowest_common_ancestor(&1, &999).map(|n| *n.element()), Some(1));
    /// ```
    pub fn lowest_common_ancestor(&self, a: &T, b: &T) -> Option<NodeRef<'_, T>>
    where
        T: Ord,
    {
        if !(self.contains(a) && self.contains(b)) {
            return self.tree.lowest_common_ancestor(a, b);
        }

        let mut current = self.tree.root;
        while let Some(id) = current {
            let node = &self.tree.arena[id];
            current = match (a.cmp(&node.element), b.cmp(&node.element)) {
                (Ordering::Less, Ordering::Less) => node.left,
                (Ordering::Greater, Ordering::Greater) => node.right,
                _ => return Some(self.tree.node_ref(id)),
            };
        }
        None
    }

    /// See [`BinaryTree::threaded_inorder`]. Threading only touches links
    /// that are restored afterwards, so the ordering is never at risk.
    pub fn threaded_inorder(&mut self) -> Vec<T>
    where
        T: Clone,
    {
        self.tree.threaded_inorder()
    }

    /// The preorder sequence as whitespace separated tokens.
    pub fn serialize(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Replaces the contents of this tree with the tree whose preorder
    /// sequence is `preorder`, as produced by [`serialize`][Self::serialize].
    ///
    /// The previous elements are discarded first, so on error the tree is
    /// left empty. Empty input is not an error and also leaves it empty.
    ///
    /// # Errors
    ///
    /// - [`TreeError::Parse`] when a token isn't a valid `T`.
    /// - [`TreeError::NotPreorder`] when the sequence can't be the preorder
    ///   of any search tree, e.g. `"5 10 3"`.
    pub fn deserialize(&mut self, preorder: &str) -> Result<(), TreeError>
    where
        T: FromStr + Ord,
    {
        self.clear();
        *self = preorder.parse()?;
        Ok(())
    }

    /// Rebuilds a tree from its preorder sequence in one pass.
    ///
    /// `ancestors` holds the nodes that may still receive a right child,
    /// largest at the bottom. Each element pops every ancestor it is not
    /// less than and becomes the right child of the last one popped or,
    /// when nothing was popped, the left child of the ancestor on top.
    /// After going right of a node, no later element may be smaller than
    /// it.
    fn from_preorder(preorder: &str) -> Result<Self, TreeError>
    where
        T: FromStr + Ord,
    {
        let mut tree = BinaryTree::new();
        let mut ancestors: Vec<NodeId> = Vec::new();
        let mut lower_bound: Option<NodeId> = None;

        for (position, token) in preorder.split_whitespace().enumerate() {
            let element: T = token.parse().map_err(|_| TreeError::Parse {
                position,
                token: token.to_owned(),
            })?;

            if lower_bound.is_some_and(|bound| element < tree.arena[bound].element) {
                return Err(TreeError::NotPreorder { position });
            }

            let mut last_popped = None;
            while let Some(&top) = ancestors.last() {
                if tree.arena[top].element > element {
                    break;
                }
                last_popped = ancestors.pop();
            }

            let id = tree.arena.push(element);
            match (last_popped, ancestors.last()) {
                (Some(parent), _) => {
                    tree.arena[parent].right = Some(id);
                    lower_bound = Some(parent);
                }
                (None, Some(&parent)) => tree.arena[parent].left = Some(id),
                (None, None) => tree.root = Some(id),
            }
            ancestors.push(id);
        }

        Ok(Self { tree })
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    /// Builds a tree by inserting every element in order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

/// Parses the output of [`BinarySearchTree::serialize`].
impl<T> FromStr for BinarySearchTree<T>
where
    T: FromStr + Ord,
{
    type Err = TreeError;

    fn from_str(preorder: &str) -> Result<Self, TreeError> {
        Self::from_preorder(preorder)
    }
}

/// Writes the serialized form: the preorder sequence separated by spaces.
impl<T> fmt::Display for BinarySearchTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = Vec::with_capacity(self.tree.arena.len());
        self.tree.visit_preorder(self.tree.root, &mut |element| elements.push(element));
        for (i, element) in elements.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree").field("root", &self.root()).finish()
    }
}
