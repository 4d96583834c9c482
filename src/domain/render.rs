use termtree::Tree as TermTree;

use crate::domain::node::{Node, Tree};

pub trait TreeRender {
    fn to_term_tree(&self) -> TermTree<String>;
}

impl TreeRender for Node {
    fn to_term_tree(&self) -> TermTree<String> {
        // absent left child is shown as "·" so left and right stay distinguishable
        let leaves: Vec<_> = match (self.left(), self.right()) {
            (None, None) => Vec::new(),
            (Some(l), None) => vec![l.to_term_tree()],
            (None, Some(r)) => vec![TermTree::new("·".to_string()), r.to_term_tree()],
            (Some(l), Some(r)) => vec![l.to_term_tree(), r.to_term_tree()],
        };
        TermTree::new(self.value.to_string()).with_leaves(leaves)
    }
}

impl TreeRender for Tree {
    fn to_term_tree(&self) -> TermTree<String> {
        match self.root() {
            Some(root) => root.to_term_tree(),
            None => TermTree::new("Empty tree".to_string()),
        }
    }
}
