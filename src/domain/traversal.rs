//! Depth-first traversals, each available as direct recursion and as an
//! explicit-stack walk. Both forms yield the same sequence for the same tree.
//!
//! The recursive forms use one call frame per level, so a degenerate tree of
//! extreme height can overflow the native stack. This is accepted; there is
//! no depth guard.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::node::{Node, Value};

/// Depth-first visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// left, self, right
    Inorder,
    /// self, left, right
    Preorder,
    /// left, right, self
    Postorder,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::Inorder, Order::Preorder, Order::Postorder];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::Inorder => "inorder",
            Order::Preorder => "preorder",
            Order::Postorder => "postorder",
        };
        write!(f, "{name}")
    }
}

/// How a traversal is carried out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Recursive,
    Iterative,
}

impl Strategy {
    pub fn traverser(self) -> &'static dyn Traverse {
        match self {
            Strategy::Recursive => &Recursive,
            Strategy::Iterative => &IterativeStack,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Recursive => "recursive",
            Strategy::Iterative => "iterative",
        };
        write!(f, "{name}")
    }
}

/// One traversal capability with interchangeable implementations.
pub trait Traverse {
    fn preorder<'a>(&self, root: Option<&'a Node>) -> Vec<&'a Node>;
    fn inorder<'a>(&self, root: Option<&'a Node>) -> Vec<&'a Node>;
    fn postorder<'a>(&self, root: Option<&'a Node>) -> Vec<&'a Node>;

    fn walk<'a>(&self, root: Option<&'a Node>, order: Order) -> Vec<&'a Node> {
        match order {
            Order::Inorder => self.inorder(root),
            Order::Preorder => self.preorder(root),
            Order::Postorder => self.postorder(root),
        }
    }
}

/// Structural recursion following the order definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recursive;

impl Recursive {
    fn collect_preorder<'a>(node: Option<&'a Node>, out: &mut Vec<&'a Node>) {
        let Some(node) = node else { return };
        out.push(node);
        Self::collect_preorder(node.left(), out);
        Self::collect_preorder(node.right(), out);
    }

    fn collect_inorder<'a>(node: Option<&'a Node>, out: &mut Vec<&'a Node>) {
        let Some(node) = node else { return };
        Self::collect_inorder(node.left(), out);
        out.push(node);
        Self::collect_inorder(node.right(), out);
    }

    fn collect_postorder<'a>(node: Option<&'a Node>, out: &mut Vec<&'a Node>) {
        let Some(node) = node else { return };
        Self::collect_postorder(node.left(), out);
        Self::collect_postorder(node.right(), out);
        out.push(node);
    }
}

impl Traverse for Recursive {
    fn preorder<'a>(&self, root: Option<&'a Node>) -> Vec<&'a Node> {
        let mut out = Vec::new();
        Self::collect_preorder(root, &mut out);
        out
    }

    fn inorder<'a>(&self, root: Option<&'a Node>) -> Vec<&'a Node> {
        let mut out = Vec::new();
        Self::collect_inorder(root, &mut out);
        out
    }

    fn postorder<'a>(&self, root: Option<&'a Node>) -> Vec<&'a Node> {
        let mut out = Vec::new();
        Self::collect_postorder(root, &mut out);
        out
    }
}

/// Explicit LIFO stack instead of the native call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeStack;

impl Traverse for IterativeStack {
    fn preorder<'a>(&self, root: Option<&'a Node>) -> Vec<&'a Node> {
        PreorderIter::new(root).collect()
    }

    fn inorder<'a>(&self, root: Option<&'a Node>) -> Vec<&'a Node> {
        InorderIter::new(root).collect()
    }

    fn postorder<'a>(&self, root: Option<&'a Node>) -> Vec<&'a Node> {
        PostorderIter::new(root).collect()
    }
}

pub struct PreorderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreorderIter<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // right first so left is popped next
        self.stack.extend(current.right());
        self.stack.extend(current.left());
        Some(current)
    }
}

pub struct InorderIter<'a> {
    cursor: Option<&'a Node>,
    stack: Vec<&'a Node>,
}

impl<'a> InorderIter<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            cursor: root,
            stack: Vec::new(),
        }
    }
}

impl<'a> Iterator for InorderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cursor {
            self.stack.push(node);
            self.cursor = node.left();
        }
        let current = self.stack.pop()?;
        self.cursor = current.right();
        Some(current)
    }
}

/// Records nodes in pop order (self, right, left) and emits the record
/// reversed. The record is filled on the first call to `next`.
pub struct PostorderIter<'a> {
    stack: Vec<&'a Node>,
    recorded: Vec<&'a Node>,
}

impl<'a> PostorderIter<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
            recorded: Vec::new(),
        }
    }
}

impl<'a> Iterator for PostorderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            self.recorded.push(current);
            self.stack.extend(current.left());
            self.stack.extend(current.right());
        }
        self.recorded.pop()
    }
}

/// Values of the tree under `order`, produced with `strategy`.
#[instrument(level = "debug", skip(root))]
pub fn traverse(root: Option<&Node>, order: Order, strategy: Strategy) -> Vec<Value> {
    let values: Vec<Value> = strategy
        .traverser()
        .walk(root, order)
        .into_iter()
        .map(|node| node.value)
        .collect();
    debug!("{} {}: {} values", strategy, order, values.len());
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::Tree;

    fn values<'a>(iter: impl Iterator<Item = &'a Node>) -> Vec<Value> {
        iter.map(|n| n.value).collect()
    }

    #[test]
    fn test_iterators_on_sample() {
        let tree = Tree::sample();
        assert_eq!(values(PreorderIter::new(tree.root())), vec![1, 2, 4, 3, 5, 7, 8, 6]);
        assert_eq!(values(InorderIter::new(tree.root())), vec![4, 2, 1, 7, 5, 8, 3, 6]);
        assert_eq!(values(PostorderIter::new(tree.root())), vec![4, 2, 7, 5, 8, 3, 6, 1]);
    }

    #[test]
    fn test_iterators_are_exhausted_after_last_node() {
        let tree = Tree::from(Node::leaf(9));
        let mut iter = PostorderIter::new(tree.root());
        assert_eq!(iter.next().map(|n| n.value), Some(9));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_iterators_on_empty() {
        assert!(PreorderIter::new(None).next().is_none());
        assert!(InorderIter::new(None).next().is_none());
        assert!(PostorderIter::new(None).next().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Order::Postorder.to_string(), "postorder");
        assert_eq!(Strategy::Iterative.to_string(), "iterative");
    }
}
