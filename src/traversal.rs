//! Inorder traversals that don't recurse, and a balance check.
//!
//! [`BinaryTree::inorder`] recurses once per level, so a badly skewed tree
//! needs a call stack as deep as the tree is tall. The two variants here
//! produce exactly the same sequence with bounded call depth:
//!
//! - [`BinaryTree::iterative_inorder`] keeps pending ancestors on an explicit
//!   heap-allocated stack.
//! - [`BinaryTree::threaded_inorder`] (a.k.a. Morris traversal) uses no
//!   auxiliary storage at all. It temporarily points the empty right relation
//!   of each node's inorder predecessor back at the node, follows that
//!   "thread" to climb back up, and removes it again on the way through.
//!
//! # Examples
//!
//! ```
//! use bintree::BinarySearchTree;
//!
//! let tree: BinarySearchTree<i32> = [50, 25, 15, 35, 1, 40, 80, 55, 95].into_iter().collect();
//! let mut copy = tree.as_binary_tree().clone();
//!
//! assert_eq!(copy.iterative_inorder(), tree.inorder());
//! assert_eq!(copy.threaded_inorder(), tree.inorder());
//! ```

use crate::node::NodeId;
use crate::BinaryTree;

impl<T> BinaryTree<T> {
    /// Inorder traversal driven by an explicit stack instead of recursion.
    pub fn iterative_inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::with_capacity(self.arena.len());
        let mut pending = Vec::new();
        let mut current = self.root;
        loop {
            // Push the whole left spine, then visit the deepest pending node.
            while let Some(id) = current {
                pending.push(id);
                current = self.arena[id].left;
            }

            let Some(id) = pending.pop() else {
                break;
            };
            elements.push(self.arena[id].element.clone());
            current = self.arena[id].right;
        }

        elements
    }

    /// Inorder traversal in constant auxiliary space.
    ///
    /// This needs `&mut self` because links are rewritten while the walk is
    /// in progress. Every temporary link is removed before returning, so the
    /// tree has exactly its original shape afterwards.
    pub fn threaded_inorder(&mut self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::with_capacity(self.arena.len());
        let mut current = self.root;
        while let Some(id) = current {
            let Some(left) = self.arena[id].left else {
                elements.push(self.arena[id].element.clone());
                current = self.arena[id].right;
                continue;
            };

            let predecessor = self.predecessor_in(left, id);
            match self.arena[predecessor].right {
                // First arrival: thread the predecessor back to us and go left.
                None => {
                    self.arena[predecessor].right = Some(id);
                    current = Some(left);
                }
                // Came back up the thread: the left subtree is done.
                Some(_) => {
                    self.arena[predecessor].right = None;
                    elements.push(self.arena[id].element.clone());
                    current = self.arena[id].right;
                }
            }
        }

        elements
    }

    /// The rightmost node under `left`, stopping early at a thread that
    /// already points back at `parent`.
    fn predecessor_in(&self, left: NodeId, parent: NodeId) -> NodeId {
        let mut predecessor = left;
        while let Some(next) = self.arena[predecessor].right.filter(|&next| next != parent) {
            predecessor = next;
        }
        predecessor
    }

    /// Whether, for every node, the heights of its two subtrees differ by at
    /// most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinarySearchTree, BinaryTree};
    ///
    /// let complete: BinaryTree<i32> = (1..=8).collect();
    /// assert!(complete.is_balanced());
    ///
    /// let chain: BinarySearchTree<i32> = (1..=8).collect();
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.balanced_height(self.root).is_some()
    }

    /// The height of `node`'s subtree, or `None` as soon as any node under it
    /// is out of balance.
    fn balanced_height(&self, node: Option<NodeId>) -> Option<usize> {
        let Some(id) = node else {
            return Some(0);
        };

        let left = self.balanced_height(self.arena[id].left)?;
        let right = self.balanced_height(self.arena[id].right)?;
        (left.abs_diff(right) <= 1).then(|| 1 + left.max(right))
    }
}


#[cfg(test)]
mod quicktests {
    use crate::BinarySearchTree;

    quickcheck::quickcheck! {
        fn every_inorder_agrees(xs: Vec<i8>) -> bool {
            let tree: BinarySearchTree<_> = xs.into_iter().collect();
            let mut threaded = tree.as_binary_tree().clone();

            let inorder = tree.inorder();
            tree.iterative_inorder() == inorder
                && threaded.threaded_inorder() == inorder
                && threaded.level_order() == tree.level_order()
        }
    }
}
