//! A plain binary tree with no ordering between its elements.
//!
//! Elements are placed in level order: each new element takes the first
//! free child slot found by a breadth first walk, so a tree built from `n`
//! elements is always complete.
//!
//! # Examples
//!
//! ```
//! use bintree::BinaryTree;
//!
//! //        50
//! //      /    \
//! //    25      15
//! //   /  \    /  \
//! //  35   1  40   80
//! let tree: BinaryTree<i32> = [50, 25, 15, 35, 1, 40, 80].into_iter().collect();
//!
//! assert_eq!(tree.size(), 7);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.preorder(), [50, 25, 35, 1, 15, 40, 80]);
//! assert_eq!(tree.level_order(), [vec![50], vec![25, 15], vec![35, 1, 40, 80]]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::mem;

use crate::node::{Arena, NodeId, NodeRef};
use crate::TreeError;

/// A binary tree owning its nodes exclusively.
#[derive(Clone)]
pub struct BinaryTree<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) root: Option<NodeId>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::default(),
            root: None,
        }
    }

    /// Adds `element` to the first free child slot in level order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert('a');
    /// tree.insert('b');
    /// tree.insert('c');
    ///
    /// assert_eq!(tree.inorder(), ['b', 'a', 'c']);
    /// ```
    pub fn insert(&mut self, element: T) {
        let new_node = self.arena.push(element);
        let Some(root) = self.root else {
            self.root = Some(new_node);
            return;
        };

        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            let node = &mut self.arena[id];
            match (node.left, node.right) {
                (None, _) => {
                    node.left = Some(new_node);
                    return;
                }
                (Some(_), None) => {
                    node.right = Some(new_node);
                    return;
                }
                (Some(left), Some(right)) => {
                    queue.push_back(left);
                    queue.push_back(right);
                }
            }
        }
    }

    /// Rebuilds a tree whose traversals are `inorder` and `preorder`.
    ///
    /// With distinct elements there is exactly one such tree. When elements
    /// repeat there may be several, and the one returned is the first found
    /// when each root is matched against the leftmost workable occurrence in
    /// `inorder`. Trying later occurrences means heavily repeated elements
    /// can take time exponential in the number of repeats.
    ///
    /// # Errors
    ///
    /// [`TreeError::TraversalMismatch`] when no tree has these two
    /// traversals, e.g. when they differ in length or content.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let tree = BinaryTree::from_traversals(&[4, 2, 5, 1, 3], &[1, 2, 4, 5, 3]).unwrap();
    ///
    /// assert_eq!(tree.postorder(), [4, 5, 2, 3, 1]);
    /// assert!(BinaryTree::from_traversals(&[1, 2], &[3, 1]).is_err());
    /// ```
    pub fn from_traversals(inorder: &[T], preorder: &[T]) -> Result<Self, TreeError>
    where
        T: Clone + PartialEq,
    {
        if inorder.len() != preorder.len() {
            return Err(TreeError::TraversalMismatch);
        }

        let mut tree = Self::new();
        tree.root = tree.rebuild(inorder, preorder)?;
        Ok(tree)
    }

    /// Builds the subtree described by two traversals of equal length.
    ///
    /// The root is `preorder[0]`. Every position holding it in `inorder` is
    /// tried as the split between the left and right subtree. Nodes pushed
    /// by a failed attempt are the newest in the arena and nothing links to
    /// them yet, so truncating the arena discards them.
    fn rebuild(&mut self, inorder: &[T], preorder: &[T]) -> Result<Option<NodeId>, TreeError>
    where
        T: Clone + PartialEq,
    {
        let Some((element, rest)) = preorder.split_first() else {
            return Ok(None);
        };

        let mark = self.arena.len();
        for split in (0..inorder.len()).filter(|&i| inorder[i] == *element) {
            let subtrees = self.rebuild(&inorder[..split], &rest[..split]).and_then(|left| {
                let right = self.rebuild(&inorder[split + 1..], &rest[split..])?;
                Ok((left, right))
            });

            match subtrees {
                Ok((left, right)) => {
                    let id = self.arena.push(element.clone());
                    self.arena[id].left = left;
                    self.arena[id].right = right;
                    return Ok(Some(id));
                }
                Err(_) => self.arena.truncate(mark),
            }
        }

        Err(TreeError::TraversalMismatch)
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
    }

    /// A handle to the root node, if the tree is non-empty.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| self.node_ref(id))
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> NodeRef<'_, T> {
        NodeRef::new(&self.arena, id)
    }

    /// Elements in (left, node, right) order.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::with_capacity(self.arena.len());
        self.visit_inorder(self.root, &mut |element| elements.push(element.clone()));
        elements
    }

    /// Elements in (node, left, right) order.
    pub fn preorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::with_capacity(self.arena.len());
        self.visit_preorder(self.root, &mut |element| elements.push(element.clone()));
        elements
    }

    /// Elements in (left, right, node) order.
    pub fn postorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::with_capacity(self.arena.len());
        self.visit_postorder(self.root, &mut |element| elements.push(element.clone()));
        elements
    }

    pub(crate) fn visit_inorder<'a>(&'a self, node: Option<NodeId>, visit: &mut impl FnMut(&'a T)) {
        if let Some(id) = node {
            let node = &self.arena[id];
            self.visit_inorder(node.left, visit);
            visit(&node.element);
            self.visit_inorder(node.right, visit);
        }
    }

    pub(crate) fn visit_preorder<'a>(&'a self, node: Option<NodeId>, visit: &mut impl FnMut(&'a T)) {
        if let Some(id) = node {
            let node = &self.arena[id];
            visit(&node.element);
            self.visit_preorder(node.left, visit);
            self.visit_preorder(node.right, visit);
        }
    }

    pub(crate) fn visit_postorder<'a>(&'a self, node: Option<NodeId>, visit: &mut impl FnMut(&'a T)) {
        if let Some(id) = node {
            let node = &self.arena[id];
            self.visit_postorder(node.left, visit);
            self.visit_postorder(node.right, visit);
            visit(&node.element);
        }
    }

    /// Elements grouped by depth, each row read left to right.
    ///
    /// This is a breadth first walk over a queue where a `None` marker
    /// closes each level and is re-queued once the next level is fully
    /// enqueued.
    pub fn level_order(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        let Some(root) = self.root else {
            return Vec::new();
        };

        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut queue = VecDeque::from([Some(root), None]);
        while let Some(entry) = queue.pop_front() {
            match entry {
                Some(id) => {
                    let node = &self.arena[id];
                    row.push(node.element.clone());
                    queue.extend(node.left.map(Some));
                    queue.extend(node.right.map(Some));
                }
                None => {
                    rows.push(mem::take(&mut row));
                    if !queue.is_empty() {
                        queue.push_back(None);
                    }
                }
            }
        }

        rows
    }

    /// Elements grouped by depth with alternating direction: the second
    /// level reads left to right, the third right to left, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32> = (1..=7).collect();
    ///
    /// assert_eq!(tree.spiral_order(), [vec![1], vec![2, 3], vec![7, 6, 5, 4]]);
    /// ```
    pub fn spiral_order(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        let Some(root) = self.root else {
            return Vec::new();
        };

        // Popping one stack fills the other, so each level comes out in the
        // reverse of the order its parents were popped.
        let mut rows = Vec::new();
        let mut right_first = vec![root];
        let mut left_first = Vec::new();
        while !right_first.is_empty() || !left_first.is_empty() {
            if !right_first.is_empty() {
                let mut row = Vec::with_capacity(right_first.len());
                while let Some(id) = right_first.pop() {
                    let node = &self.arena[id];
                    row.push(node.element.clone());
                    left_first.extend(node.right);
                    left_first.extend(node.left);
                }
                rows.push(row);
            }

            if !left_first.is_empty() {
                let mut row = Vec::with_capacity(left_first.len());
                while let Some(id) = left_first.pop() {
                    let node = &self.arena[id];
                    row.push(node.element.clone());
                    right_first.extend(node.left);
                    right_first.extend(node.right);
                }
                rows.push(row);
            }
        }

        rows
    }

    /// Number of elements in the tree.
    pub fn size(&self) -> usize {
        let size = self.size_of(self.root);
        if cfg!(debug_assertions) {
            assert_eq!(size, self.arena.len());
        }
        size
    }

    fn size_of(&self, node: Option<NodeId>) -> usize {
        match node {
            None => 0,
            Some(id) => 1 + self.size_of(self.arena[id].left) + self.size_of(self.arena[id].right),
        }
    }

    /// Number of nodes on the longest root-to-leaf path. An empty tree has
    /// height 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    pub(crate) fn height_of(&self, node: Option<NodeId>) -> usize {
        match node {
            None => 0,
            Some(id) => 1 + self.height_of(self.arena[id].left).max(self.height_of(self.arena[id].right)),
        }
    }

    /// Number of nodes on the longest path between any two nodes, i.e. the
    /// largest `1 + left height + right height` over every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32> = [50, 25, 15, 35, 1, 40, 80, 55, 95].into_iter().collect();
    ///
    /// assert_eq!(tree.width(), 6);
    /// assert_eq!(BinaryTree::<i32>::new().width(), 0);
    /// ```
    pub fn width(&self) -> usize {
        self.height_and_width(self.root).1
    }

    /// Computes height and width together so each node is visited once.
    fn height_and_width(&self, node: Option<NodeId>) -> (usize, usize) {
        let Some(id) = node else {
            return (0, 0);
        };

        let (left_height, left_width) = self.height_and_width(self.arena[id].left);
        let (right_height, right_width) = self.height_and_width(self.arena[id].right);

        let height = 1 + left_height.max(right_height);
        let width = (1 + left_height + right_height).max(left_width).max(right_width);
        (height, width)
    }

    /// Number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count_of(self.root)
    }

    fn leaf_count_of(&self, node: Option<NodeId>) -> usize {
        let Some(id) = node else {
            return 0;
        };

        let node = &self.arena[id];
        if node.is_leaf() {
            1
        } else {
            self.leaf_count_of(node.left) + self.leaf_count_of(node.right)
        }
    }

    /// Whether the elements obey the search tree ordering: everything in a
    /// node's left subtree is less than the node and everything in its right
    /// subtree is greater than or equal to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let ordered = BinaryTree::from_traversals(&[1, 2, 3], &[2, 1, 3]).unwrap();
    /// assert!(ordered.is_bst());
    ///
    /// // 6 is in 5's left subtree but greater than 5, two levels down.
    /// let unordered = BinaryTree::from_traversals(&[1, 6, 5, 7], &[5, 1, 6, 7]).unwrap();
    /// assert!(!unordered.is_bst());
    /// ```
    pub fn is_bst(&self) -> bool
    where
        T: PartialOrd,
    {
        self.is_bst_within(self.root, None, None)
    }

    /// Checks `node`'s subtree against the bounds inherited from its
    /// ancestors. `lower` is inclusive and `upper` is exclusive.
    fn is_bst_within(&self, node: Option<NodeId>, lower: Option<&T>, upper: Option<&T>) -> bool
    where
        T: PartialOrd,
    {
        let Some(id) = node else {
            return true;
        };

        let node = &self.arena[id];
        let element = &node.element;
        if lower.is_some_and(|lower| element < lower) || upper.is_some_and(|upper| element >= upper) {
            return false;
        }

        self.is_bst_within(node.left, lower, Some(element))
            && self.is_bst_within(node.right, Some(element), upper)
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    /// Builds a tree by inserting every element in level order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

/// Trees are equal when their postorder sequences are equal.
impl<T> PartialEq for BinaryTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut lhs = Vec::with_capacity(self.arena.len());
        self.visit_postorder(self.root, &mut |element| lhs.push(element));
        let mut rhs = Vec::with_capacity(other.arena.len());
        other.visit_postorder(other.root, &mut |element| rhs.push(element));
        lhs == rhs
    }
}

impl<T> Eq for BinaryTree<T> where T: Eq {}

impl<T> fmt::Debug for BinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree").field("root", &self.root()).finish()
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::HashSet;

    use super::*;
    use crate::BinarySearchTree;

    quickcheck::quickcheck! {
        fn traversals_visit_every_node(xs: Vec<i8>) -> bool {
            let tree: BinaryTree<_> = xs.iter().copied().collect();
            let n = xs.len();

            tree.size() == n
                && tree.inorder().len() == n
                && tree.preorder().len() == n
                && tree.postorder().len() == n
                && tree.level_order().concat() == xs
                && tree.spiral_order().concat().len() == n
        }
    }

    quickcheck::quickcheck! {
        fn level_order_fill_stays_complete(xs: Vec<i8>) -> bool {
            let tree: BinaryTree<_> = xs.iter().copied().collect();
            let rows = tree.level_order();

            // Every row but the last is full.
            let full_rows = rows.iter().enumerate().rev().skip(1).all(|(depth, row)| row.len() == 1 << depth);
            full_rows && tree.height() == rows.len() && tree.is_balanced()
        }
    }

    quickcheck::quickcheck! {
        fn rebuilds_with_repeats(xs: Vec<u8>) -> bool {
            // Few distinct values so repeats are common.
            let tree: BinaryTree<_> = xs.into_iter().take(12).map(|x| x % 3).collect();
            let (inorder, preorder) = (tree.inorder(), tree.preorder());

            match BinaryTree::from_traversals(&inorder, &preorder) {
                Ok(rebuilt) => {
                    rebuilt.inorder() == inorder && rebuilt.preorder() == preorder && rebuilt.size() == tree.size()
                }
                Err(_) => false,
            }
        }
    }

    quickcheck::quickcheck! {
        fn rebuilds_from_traversals(xs: Vec<i8>) -> bool {
            let mut seen = HashSet::new();
            let distinct: Vec<_> = xs.into_iter().filter(|x| seen.insert(*x)).collect();
            let tree: BinarySearchTree<_> = distinct.into_iter().collect();

            let rebuilt = BinaryTree::from_traversals(&tree.inorder(), &tree.preorder());
            rebuilt.as_ref() == Ok(tree.as_binary_tree())
                && rebuilt.map(|t| t.level_order()) == Ok(tree.level_order())
        }
    }
}
