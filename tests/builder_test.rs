//! Tests for TreeBuilder level-order descriptions.

use rstest::rstest;

use bintree::domain::{DomainError, Node, Order, Strategy, Tree, TreeBuilder};

#[rstest]
#[case("1,2,3,4,null,5,6,null,null,7,8")]
#[case("[1, 2, 3, 4, null, 5, 6, null, null, 7, 8]")]
#[case("1 2 3 4 _ 5 6 # ~ 7 8 null null")]
fn given_sample_description_when_building_then_matches_sample_tree(#[case] description: &str) {
    let mut builder = TreeBuilder::new();
    let tree = builder.build_from_str(description).unwrap();
    assert!(tree.is_identical(&Tree::sample()));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("[]")]
#[case("null")]
#[case("null, null")]
fn given_empty_description_when_building_then_tree_is_empty(#[case] description: &str) {
    let tree: Tree = description.parse().unwrap();
    assert!(tree.is_empty());
}

#[rstest]
fn given_absent_parent_when_building_then_its_children_are_skipped() {
    // 2 has no children listed because its slot is absent
    let tree: Tree = "1,null,2,3".parse().unwrap();
    let expected = Tree::from(Node::leaf(1).with_right(Node::leaf(2).with_left(Node::leaf(3))));
    assert!(tree.is_identical(&expected));
    assert_eq!(tree.traverse(Order::Preorder, Strategy::Iterative), vec![1, 2, 3]);
}

#[rstest]
fn given_invalid_token_when_building_then_reports_position() {
    let err = TreeBuilder::new().build_from_str("1,2,three").unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidToken {
            position: 2,
            token: "three".to_string()
        }
    );
    assert!(err.to_string().contains("three"));
}

#[rstest]
#[case("null,1", 1)]
#[case("1,null,null,2,3", 2)]
fn given_values_without_parent_slot_when_building_then_fails(
    #[case] description: &str,
    #[case] count: usize,
) {
    let err = description.parse::<Tree>().unwrap_err();
    assert_eq!(err, DomainError::DanglingValues { count });
}

#[rstest]
fn given_long_right_chain_when_building_then_builds_without_recursion() {
    // "0,null,1,null,2,...": every node has an absent left child
    let description = (0..2000).map(|v| format!("{v},null")).collect::<Vec<_>>().join(",");
    let tree: Tree = description.parse().unwrap();
    assert_eq!(tree.len(), 2000);
    assert_eq!(tree.height(), 2000);
    assert_eq!(
        tree.traverse(Order::Inorder, Strategy::Iterative),
        (0..2000).collect::<Vec<i64>>()
    );
}
