use bintree::{BinaryTree, TreeError};

fn sample() -> BinaryTree<i32> {
    [50, 25, 15, 35, 1, 40, 80, 55, 95].into_iter().collect()
}

#[test]
fn inorder_variants_agree_on_sample() {
    let mut tree = sample();
    let before = tree.clone();
    let inorder = tree.inorder();

    assert_eq!(inorder, [55, 35, 95, 25, 1, 50, 40, 15, 80]);
    assert_eq!(tree.iterative_inorder(), inorder);
    assert_eq!(tree.threaded_inorder(), inorder);
    assert_eq!(tree.preorder(), before.preorder());
    assert_eq!(tree.level_order(), before.level_order());
}

#[test]
fn empty_tree() {
    let tree = BinaryTree::<i32>::new();

    assert_eq!(tree.width(), 0);
    assert!(tree.is_bst());
    assert!(tree.is_balanced());
    assert!(tree.all_paths().is_empty());
    assert_eq!(tree.pretty().to_string(), "");
}

#[test]
fn mirror_then_ring() {
    let mut tree = sample();
    tree.mirror();

    let list = tree.into_circular_list();
    assert_eq!(list.to_string(), "80\t15\t40\t50\t1\t25\t95\t35\t55");
    assert_eq!(list.head(), Some(&80));
}

#[test]
fn rebuilt_tree_is_usable() {
    let tree = BinaryTree::from_traversals(&["d", "b", "e", "a", "c"], &["a", "b", "d", "e", "c"]).unwrap();

    assert_eq!(tree.level_order(), [vec!["a"], vec!["b", "c"], vec!["d", "e"]]);
    assert_eq!(
        BinaryTree::from_traversals(&["a"], &["a", "b"]),
        Err(TreeError::TraversalMismatch)
    );
}

#[test]
fn sum_property_on_signed_elements() {
    let mut tree: BinaryTree<i64> = [-4, 2, -7, 1].into_iter().collect();
    assert!(!tree.is_sum_property());

    assert_eq!(tree.to_sum_property(), Ok(()));
    assert!(tree.is_sum_property());
}

quickcheck::quickcheck! {
    fn display_rows_match_level_order(xs: Vec<u8>) -> bool {
        let tree: BinaryTree<_> = xs.into_iter().collect();
        let rendered = tree.display_level_order().to_string();

        rendered.lines().count() == tree.height()
    }
}
