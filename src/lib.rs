//! This crate exposes a generic binary tree and a Binary Search Tree (BST)
//! built on top of it, along with the classic algorithms usually taught
//! alongside them.
//!
//! ## Binary Tree
//!
//! A binary tree is defined recursively using the notion of a `Node`. A
//! `Node` stores some value (the element that was inserted) and has at most
//! two child `Node`s, a left one and a right one.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! [`BinaryTree`] fills itself in level order: every insertion takes the
//! first free child slot, scanning the tree top to bottom and left to right.
//! The tree therefore always stays complete. Most algorithms in this crate
//! (traversals, shape queries, [`mirror`][BinaryTree::mirror], lowest common
//! ancestor, ...) work on any `BinaryTree` regardless of how it was shaped.
//!
//! ## Binary Search Tree
//!
//! [`BinarySearchTree`] places elements by comparison instead. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the number of nodes on the longest path from the root `Node` to
//! a leaf `Node`). BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! ```
//! use bintree::BinarySearchTree;
//!
//! let tree: BinarySearchTree<i32> = [50, 80, 25, 35, 15, 95, 1, 40, 55].into_iter().collect();
//!
//! assert_eq!(tree.inorder(), [1, 15, 25, 35, 40, 50, 55, 80, 95]);
//! assert_eq!(tree.height(), 4);
//! assert!(tree.is_bst());
//! ```
//!
//! ## Storage
//!
//! Every tree owns its nodes in a single arena and links them by index, so a
//! node is never shared between trees and algorithms that temporarily rewire
//! links (the threaded inorder traversal, the circular list conversion) do so
//! without `unsafe`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod binary_tree;
pub mod circular_list;
pub mod display;
mod error;
mod node;
mod search_tree;
mod transform;
mod traversal;


pub use binary_tree::BinaryTree;
pub use circular_list::CircularList;
pub use error::TreeError;
pub use node::NodeRef;
pub use search_tree::BinarySearchTree;
