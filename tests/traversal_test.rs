//! Depth-first traversals on the sample tree and on edge-case shapes.

use rstest::{fixture, rstest};

use bintree::domain::{traverse, IterativeStack, Node, Order, Recursive, Strategy, Traverse, Tree};
use bintree::util::testing;

#[fixture]
fn sample() -> Tree {
    testing::init_test_setup();
    Tree::sample()
}

#[rstest]
#[case::inorder(Order::Inorder, vec![4, 2, 1, 7, 5, 8, 3, 6])]
#[case::preorder(Order::Preorder, vec![1, 2, 4, 3, 5, 7, 8, 6])]
#[case::postorder(Order::Postorder, vec![4, 2, 7, 5, 8, 3, 6, 1])]
fn given_sample_tree_when_traversing_then_both_strategies_match_expected(
    sample: Tree,
    #[case] order: Order,
    #[case] expected: Vec<i64>,
    #[values(Strategy::Recursive, Strategy::Iterative)] strategy: Strategy,
) {
    assert_eq!(traverse(sample.root(), order, strategy), expected);
}

#[rstest]
fn given_empty_tree_when_traversing_then_sequence_is_empty(
    #[values(Order::Inorder, Order::Preorder, Order::Postorder)] order: Order,
    #[values(Strategy::Recursive, Strategy::Iterative)] strategy: Strategy,
) {
    testing::init_test_setup();
    assert!(traverse(None, order, strategy).is_empty());
    assert!(Tree::empty().traverse(order, strategy).is_empty());
}

// 1
//  \
//   2
//  /
// 3
#[rstest]
#[case::inorder(Order::Inorder, vec![1, 3, 2])]
#[case::preorder(Order::Preorder, vec![1, 2, 3])]
#[case::postorder(Order::Postorder, vec![3, 2, 1])]
fn given_zigzag_tree_when_traversing_then_strategies_agree(
    #[case] order: Order,
    #[case] expected: Vec<i64>,
) {
    let tree = Tree::from(Node::leaf(1).with_right(Node::leaf(2).with_left(Node::leaf(3))));
    assert_eq!(tree.traverse(order, Strategy::Recursive), expected);
    assert_eq!(tree.traverse(order, Strategy::Iterative), expected);
}

#[rstest]
fn given_left_leaning_chain_when_traversing_inorder_then_values_ascend_from_bottom() {
    let mut node = Node::leaf(0);
    for value in 1..200 {
        node = Node::leaf(value).with_left(node);
    }
    let tree = Tree::from(node);
    let expected: Vec<i64> = (0..200).collect();
    assert_eq!(tree.traverse(Order::Inorder, Strategy::Iterative), expected);
    assert_eq!(tree.traverse(Order::Inorder, Strategy::Recursive), expected);
}

#[rstest]
fn given_traversers_when_walking_then_nodes_are_borrowed_from_tree(sample: Tree) {
    let recursive = Recursive.walk(sample.root(), Order::Preorder);
    let iterative = IterativeStack.walk(sample.root(), Order::Preorder);
    assert_eq!(recursive.len(), 8);
    for (a, b) in recursive.iter().zip(&iterative) {
        assert!(std::ptr::eq(*a, *b));
    }
}

#[rstest]
fn given_strategy_when_asking_for_traverser_then_dispatches_to_matching_form(sample: Tree) {
    let values = |s: Strategy| -> Vec<i64> {
        s.traverser()
            .postorder(sample.root())
            .into_iter()
            .map(|n| n.value())
            .collect()
    };
    assert_eq!(values(Strategy::Recursive), values(Strategy::Iterative));
}
