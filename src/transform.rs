//! Algorithms that reshape a tree or search it for a relationship between
//! nodes rather than just reading its elements in some order.

use num_traits::{CheckedAdd, CheckedSub, Zero};

use crate::node::{Arena, NodeId, NodeRef};
use crate::{BinaryTree, TreeError};

impl<T> BinaryTree<T> {
    /// Swaps the children of every node, reversing the inorder sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let mut tree: BinaryTree<i32> = (1..=5).collect();
    /// let inorder = tree.inorder();
    ///
    /// tree.mirror();
    /// assert_eq!(tree.inorder(), inorder.into_iter().rev().collect::<Vec<_>>());
    /// ```
    pub fn mirror(&mut self) {
        self.mirror_from(self.root);
    }

    fn mirror_from(&mut self, node: Option<NodeId>) {
        let Some(id) = node else {
            return;
        };

        let (left, right) = (self.arena[id].left, self.arena[id].right);
        self.mirror_from(left);
        self.mirror_from(right);

        let node = &mut self.arena[id];
        std::mem::swap(&mut node.left, &mut node.right);
    }

    /// Whether every node with at least one child holds the sum of its
    /// children's elements. A missing child counts as zero, and a sum that
    /// doesn't fit in `T` never matches.
    pub fn is_sum_property(&self) -> bool
    where
        T: Zero + CheckedAdd + PartialEq + Clone,
    {
        self.is_sum_property_from(self.root)
    }

    fn is_sum_property_from(&self, node: Option<NodeId>) -> bool
    where
        T: Zero + CheckedAdd + PartialEq + Clone,
    {
        let Some(id) = node else {
            return true;
        };

        let node = &self.arena[id];
        node.is_leaf()
            || (self.children_sum(id).as_ref() == Some(&node.element)
                && self.is_sum_property_from(node.left)
                && self.is_sum_property_from(node.right))
    }

    /// The sum of `id`'s children's elements, or `None` on overflow.
    fn children_sum(&self, id: NodeId) -> Option<T>
    where
        T: Zero + CheckedAdd + Clone,
    {
        let element = |child: Option<NodeId>| child.map_or_else(T::zero, |child| self.arena[child].element.clone());
        element(self.arena[id].left).checked_add(&element(self.arena[id].right))
    }

    /// Raises elements, never lowering any, until
    /// [`is_sum_property`][Self::is_sum_property] holds.
    ///
    /// Children are fixed before their parent. A parent smaller than its
    /// children's sum is raised to that sum. A parent larger than the sum
    /// pushes the surplus down one spine of descendants (the left child where
    /// there is one, the right child otherwise), which keeps every node on
    /// the spine equal to its children's sum and leaves the other sibling
    /// subtrees untouched.
    ///
    /// # Errors
    ///
    /// [`TreeError::Overflow`] when a children's sum, a surplus or a raised
    /// element doesn't fit in `T`. The tree is left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinaryTree, TreeError};
    ///
    /// //      50              50
    /// //    /    \          /    \
    /// //   7      2   ->   46     4
    /// //  / \    / \      /  \   / \
    /// // 3   5  1   3    41   5 1   3
    /// let mut tree: BinaryTree<i32> = [50, 7, 2, 3, 5, 1, 3].into_iter().collect();
    /// tree.to_sum_property()?;
    ///
    /// assert!(tree.is_sum_property());
    /// assert_eq!(tree.preorder(), [50, 46, 41, 5, 4, 1, 3]);
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn to_sum_property(&mut self) -> Result<(), TreeError>
    where
        T: Zero + CheckedAdd + CheckedSub + PartialOrd + Clone,
    {
        // Work on a copy so an overflow halfway through can't leave a mix of
        // raised and original elements behind.
        let mut arena = self.arena.clone();
        to_sum_property_from(&mut arena, self.root)?;
        self.arena = arena;
        Ok(())
    }

    /// The deepest node that has both `a` and `b` in its subtree, counting a
    /// node as part of its own subtree.
    ///
    /// When only one of the two is in the tree, the node holding it is
    /// returned. When neither is, the result is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32> = [50, 25, 15, 35, 1, 40, 80, 55, 95].into_iter().collect();
    ///
    /// assert_eq!(tree.lowest_common_ancestor(&15, &1).map(|n| *n.element()), Some(50));
    /// assert_eq!(tree.lowest_common_ancestor(&55, &1).map(|n| *n.element()), Some(25));
    /// assert_eq!(tree.lowest_common_ancestor(&55, &999).map(|n| *n.element()), Some(55));
    /// assert_eq!(tree.lowest_common_ancestor(&998, &999), None);
    /// ```
    pub fn lowest_common_ancestor(&self, a: &T, b: &T) -> Option<NodeRef<'_, T>>
    where
        T: PartialEq,
    {
        self.ancestor_from(self.root, a, b).map(|id| self.node_ref(id))
    }

    pub(crate) fn ancestor_from(&self, node: Option<NodeId>, a: &T, b: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let id = node?;
        let node = &self.arena[id];
        if node.element == *a || node.element == *b {
            return Some(id);
        }

        match (self.ancestor_from(node.left, a, b), self.ancestor_from(node.right, a, b)) {
            (Some(_), Some(_)) => Some(id),
            (found, None) | (None, found) => found,
        }
    }

    /// Every root-to-leaf path, leftmost first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32> = (1..=5).collect();
    ///
    /// assert_eq!(tree.all_paths(), [vec![1, 2, 4], vec![1, 2, 5], vec![1, 3]]);
    /// ```
    pub fn all_paths(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        let mut paths = Vec::new();
        self.collect_paths(self.root, Vec::new(), &mut paths);
        paths
    }

    /// Each branch gets its own copy of `path` so siblings never see each
    /// other's elements.
    fn collect_paths(&self, node: Option<NodeId>, mut path: Vec<T>, paths: &mut Vec<Vec<T>>)
    where
        T: Clone,
    {
        let Some(id) = node else {
            return;
        };

        let node = &self.arena[id];
        path.push(node.element.clone());
        if node.is_leaf() {
            paths.push(path);
            return;
        }

        self.collect_paths(node.left, path.clone(), paths);
        self.collect_paths(node.right, path, paths);
    }
}

fn to_sum_property_from<T>(arena: &mut Arena<T>, node: Option<NodeId>) -> Result<(), TreeError>
where
    T: Zero + CheckedAdd + CheckedSub + PartialOrd + Clone,
{
    let Some(id) = node else {
        return Ok(());
    };

    let (left, right) = (arena[id].left, arena[id].right);
    if left.is_none() && right.is_none() {
        return Ok(());
    }

    to_sum_property_from(arena, left)?;
    to_sum_property_from(arena, right)?;

    let child = |child: Option<NodeId>| child.map_or_else(T::zero, |child| arena[child].element.clone());
    let sum = child(left).checked_add(&child(right)).ok_or(TreeError::Overflow)?;
    let element = arena[id].element.clone();
    if element < sum {
        arena[id].element = sum;
    } else if element > sum {
        let surplus = element.checked_sub(&sum).ok_or(TreeError::Overflow)?;
        increment_spine(arena, left.or(right), surplus)?;
    }
    Ok(())
}

/// Adds `surplus` to `node` and to each first child below it.
fn increment_spine<T>(arena: &mut Arena<T>, mut node: Option<NodeId>, surplus: T) -> Result<(), TreeError>
where
    T: CheckedAdd,
{
    while let Some(id) = node {
        let node_mut = &mut arena[id];
        node_mut.element = node_mut.element.checked_add(&surplus).ok_or(TreeError::Overflow)?;
        node = node_mut.left.or(node_mut.right);
    }
    Ok(())
}


#[cfg(test)]
mod quicktests {
    use super::*;

    quickcheck::quickcheck! {
        fn mirror_is_an_involution(xs: Vec<i8>) -> bool {
            let original: BinaryTree<_> = xs.into_iter().collect();
            let mut tree = original.clone();

            tree.mirror();
            let mut reversed = original.inorder();
            reversed.reverse();
            let mirrored_inorder = tree.inorder() == reversed;

            tree.mirror();
            mirrored_inorder && tree == original && tree.level_order() == original.level_order()
        }
    }

    quickcheck::quickcheck! {
        fn sum_property_only_grows(xs: Vec<u8>) -> bool {
            let original: BinaryTree<u64> = xs.into_iter().map(u64::from).collect();
            let mut tree = original.clone();

            assert_eq!(tree.to_sum_property(), Ok(()));
            tree.is_sum_property()
                && tree.size() == original.size()
                && tree.preorder().iter().zip(original.preorder()).all(|(after, before)| *after >= before)
        }
    }

    quickcheck::quickcheck! {
        fn ancestor_is_symmetric(xs: Vec<i8>, a: i8, b: i8) -> bool {
            let tree: BinaryTree<_> = xs.iter().copied().collect();
            let found = tree.lowest_common_ancestor(&a, &b);

            found == tree.lowest_common_ancestor(&b, &a)
                && found.is_some() == (xs.contains(&a) || xs.contains(&b))
        }
    }

    quickcheck::quickcheck! {
        fn one_path_per_leaf(xs: Vec<i8>) -> bool {
            let tree: BinaryTree<_> = xs.into_iter().collect();
            let paths = tree.all_paths();

            paths.len() == tree.leaf_count()
                && paths.iter().all(|path| path.first() == tree.root().map(|root| root.element()))
        }
    }
}
