//! Human readable renderings of a tree.
//!
//! None of these formats are meant to be parsed back. The only text form
//! with a round trip is [`BinarySearchTree::serialize`][crate::BinarySearchTree::serialize].

use std::fmt;

use crate::node::NodeId;
use crate::BinaryTree;

/// Groups of elements printed one group per line, elements separated by
/// tabs.
///
/// # Examples
///
/// ```
/// use bintree::BinaryTree;
///
/// let tree: BinaryTree<i32> = (1..=5).collect();
///
/// assert_eq!(tree.display_level_order().to_string(), "1\n2\t3\n4\t5\n");
/// assert_eq!(tree.display_all_paths().to_string(), "1\t2\t4\n1\t2\t5\n1\t3\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rows<T>(pub Vec<Vec<T>>);

impl<T> fmt::Display for Rows<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for (i, element) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{element}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A tree drawn on its side: the root in the first column, the right
/// subtree above it and the left subtree below, each level indented one
/// step further.
pub struct Pretty<'a, T> {
    tree: &'a BinaryTree<T>,
}

impl<T> Pretty<'_, T> {
    const INDENT: usize = 4;

    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: Option<NodeId>, depth: usize) -> fmt::Result
    where
        T: fmt::Display,
    {
        let Some(id) = node else {
            return Ok(());
        };

        let node = &self.tree.arena[id];
        self.write_node(f, node.right, depth + 1)?;
        writeln!(f, "{:indent$}{}", "", node.element, indent = depth * Self::INDENT)?;
        self.write_node(f, node.left, depth + 1)
    }
}

impl<T> fmt::Display for Pretty<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.tree.root, 0)
    }
}

impl<T> BinaryTree<T> {
    /// [`level_order`][Self::level_order] as printable rows.
    pub fn display_level_order(&self) -> Rows<T>
    where
        T: Clone,
    {
        Rows(self.level_order())
    }

    /// [`spiral_order`][Self::spiral_order] as printable rows.
    pub fn display_spiral_order(&self) -> Rows<T>
    where
        T: Clone,
    {
        Rows(self.spiral_order())
    }

    /// [`all_paths`][Self::all_paths] as printable rows.
    pub fn display_all_paths(&self) -> Rows<T>
    where
        T: Clone,
    {
        Rows(self.all_paths())
    }

    /// The tree drawn sideways.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32> = (1..=5).collect();
    ///
    /// assert_eq!(
    ///     tree.pretty().to_string(),
    ///     "    3\n1\n        5\n    2\n        4\n"
    /// );
    /// ```
    pub fn pretty(&self) -> Pretty<'_, T> {
        Pretty { tree: self }
    }
}
