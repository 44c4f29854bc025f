//! Exercises the public API the way a downstream crate would.

mod binary_tree;
mod search_tree;
