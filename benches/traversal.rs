use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bintree::BinarySearchTree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in an unbalanced manner. This adds elements in an
/// ascending manner so every node only has a right child.
fn get_unbalanced_tree(num_levels: usize) -> BinarySearchTree<i32> {
    (0..).take(num_nodes_in_full_tree(num_levels)).collect()
}

/// Builds a tree by inserting values in a balanced manner. This adds elements so that the
/// resultant tree has `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> BinarySearchTree<i32> {
    let mut tree = BinarySearchTree::new();
    let xs = (0..).take(num_nodes_in_full_tree(num_levels)).collect::<Vec<_>>();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut BinarySearchTree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs it against trees of various
/// sizes and shapes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut BinarySearchTree<i32>)) {
    let mut group = c.benchmark_group(name);

    // The recursive traversals follow the unbalanced chain one frame per node, so these
    // stay well short of the default stack size.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let size = num_nodes_in_full_tree(num_levels);
        for (name, mut tree) in tree_tests {
            let id = BenchmarkId::new(name.to_string(), size);

            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| {
                    f(&mut tree);
                })
            });
        }
    }

    group.finish();
}

/// Compares the three inorder traversals against each other, plus the other whole-tree
/// walks, on balanced and unbalanced trees of various sizes.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "inorder-recursive", |tree| {
        let _elements = tree.inorder();
    });
    bench_helper(c, "inorder-iterative", |tree| {
        let _elements = tree.iterative_inorder();
    });
    bench_helper(c, "inorder-threaded", |tree| {
        let _elements = tree.threaded_inorder();
    });

    bench_helper(c, "level-order", |tree| {
        let _rows = tree.level_order();
    });
    bench_helper(c, "width", |tree| {
        let _width = tree.width();
    });
    bench_helper(c, "is-balanced", |tree| {
        let _balanced = tree.is_balanced();
    });
    bench_helper(c, "serialize", |tree| {
        let _text = tree.serialize();
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
