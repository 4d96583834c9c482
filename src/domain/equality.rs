use crate::domain::node::{Node, Tree};

/// Two trees are identical when they have the same shape and equal values at
/// every position. Two empty trees are identical.
pub fn is_identical(a: Option<&Node>, b: Option<&Node>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            x.value == y.value
                && is_identical(x.left(), y.left())
                && is_identical(x.right(), y.right())
        }
        _ => false,
    }
}

impl Tree {
    pub fn is_identical(&self, other: &Tree) -> bool {
        is_identical(self.root(), other.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_mismatch_deep_in_tree() {
        let a = Tree::sample();
        let mut b = Tree::sample();
        if let Some(root) = b.root_mut() {
            root.right.as_mut().unwrap().right.as_mut().unwrap().value = 60;
        }
        assert!(!a.is_identical(&b));
    }

    #[test]
    fn test_same_values_different_shape() {
        let a = Tree::from(Node::leaf(1).with_left(Node::leaf(2)));
        let b = Tree::from(Node::leaf(1).with_right(Node::leaf(2)));
        assert!(!a.is_identical(&b));
    }
}
