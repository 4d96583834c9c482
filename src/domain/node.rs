//! Tree model: exclusively owned nodes, no parent links.

use std::fmt;

use tracing::instrument;

/// Integer payload carried by every node.
pub type Value = i64;

/// One tree vertex. Each child is owned by exactly one parent.
///
/// Fields are read-only outside the crate: once built, only
/// [`sum_transform`](crate::domain::sum_transform) rewrites values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) value: Value,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    pub fn new(value: Value, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn leaf(value: Value) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: Node) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: Node) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A binary tree, identified by its (possibly absent) root.
///
/// Dropping the tree releases every node. Drop recurses once per level, so
/// pathologically tall trees share the stack-depth limit of the recursive
/// traversals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
}

impl From<Option<Box<Node>>> for Tree {
    fn from(root: Option<Box<Node>>) -> Self {
        Self { root }
    }
}

impl Tree {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed sample tree used by the driver when nothing else is configured.
    ///
    /// ```text
    ///        1
    ///      /   \
    ///     2     3
    ///    /     / \
    ///   4     5   6
    ///        / \
    ///       7   8
    /// ```
    pub fn sample() -> Self {
        let left = Node::leaf(2).with_left(Node::leaf(4));
        let right = Node::new(
            3,
            Some(Node::new(5, Some(Node::leaf(7)), Some(Node::leaf(8)))),
            Some(Node::leaf(6)),
        );
        Tree::from(Node::new(1, Some(left), Some(right)))
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_deref_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes.
    #[instrument(level = "trace", skip(self))]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Number of levels; the empty tree has height 0.
    #[instrument(level = "trace", skip(self))]
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&Node, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }
}
