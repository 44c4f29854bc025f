use bintree::{BinarySearchTree, TreeError};

fn sample() -> BinarySearchTree<i32> {
    [50, 25, 15, 35, 1, 40, 80, 55, 95].into_iter().collect()
}

#[test]
fn sample_queries() {
    let tree = sample();

    assert_eq!(tree.width(), 6);
    assert_eq!(tree.lowest_common_ancestor(&15, &1).map(|n| *n.element()), Some(15));
    assert_eq!(tree.min(), Ok(&1));
    assert_eq!(tree.max(), Ok(&95));
    assert!(tree.is_bst());
    assert!(tree.is_balanced());
}

#[test]
fn single_element() {
    let tree: BinarySearchTree<i32> = [200].into_iter().collect();

    assert_eq!(tree.width(), 1);
    assert_eq!(tree.leaf_count(), 1);
    assert_eq!(tree.min(), tree.max());
}

#[test]
fn ascending_chain_is_unbalanced() {
    let tree: BinarySearchTree<i32> = (1..=8).collect();

    assert_eq!(tree.height(), 8);
    // The longest path is the chain itself.
    assert_eq!(tree.width(), 8);
    assert!(!tree.is_balanced());
}

#[test]
fn empty_extremes_are_errors() {
    let tree = BinarySearchTree::<u32>::new();

    assert_eq!(tree.min(), Err(TreeError::Empty));
    assert_eq!(tree.max(), Err(TreeError::Empty));
    assert_eq!(tree.serialize(), "");
}

#[test]
fn serialized_text_round_trips() {
    let tree = sample();
    let text = tree.serialize();

    let mut copy = BinarySearchTree::<i32>::new();
    copy.deserialize(&text).unwrap();

    assert_eq!(copy, tree);
    assert_eq!(copy.level_order(), tree.level_order());
    assert_eq!(copy.to_string(), text);
}

#[test]
fn bad_text_leaves_tree_empty() {
    let mut tree = sample();

    let err = tree.deserialize("50 25 x").unwrap_err();
    assert_eq!(err, TreeError::Parse { position: 2, token: "x".to_string() });
    assert!(tree.is_empty());
}

quickcheck::quickcheck! {
    fn round_trip_keeps_shape(xs: Vec<i16>) -> bool {
        let tree: BinarySearchTree<_> = xs.into_iter().collect();
        let copy: Result<BinarySearchTree<i16>, _> = tree.serialize().parse();

        copy.map(|copy| copy.level_order()) == Ok(tree.level_order())
    }
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i16>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort();

        tree.inorder() == sorted
    }
}
