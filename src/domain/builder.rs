//! Tree builder for level-order descriptions such as `1,2,3,4,null,5,6`.
//!
//! Values are listed breadth-first; an absent child is written as `null`,
//! `_`, `#` or `~`. Children of an absent position are not listed. Nodes are
//! staged in an arena while slots are assigned and then assembled into the
//! owned tree bottom-up, so building never recurses.

use std::collections::{HashMap, VecDeque};

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, TreeResult};
use crate::domain::node::{Node, Tree, Value};

const ABSENT_MARKERS: [&str; 4] = ["null", "_", "#", "~"];

/// Node waiting for its children to be assembled.
#[derive(Debug)]
struct StagedNode {
    value: Value,
    left: Option<Index>,
    right: Option<Index>,
}

/// Constructs trees from level-order descriptions.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    arena: Arena<StagedNode>,
    /// Staged indices in breadth-first order.
    visit_order: Vec<Index>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a level-order description.
    #[instrument(level = "debug", skip(self))]
    pub fn build_from_str(&mut self, description: &str) -> TreeResult<Tree> {
        // Reset state for a fresh build
        self.arena.clear();
        self.visit_order.clear();

        let tokens = parse_tokens(description)?;
        let root = self.stage(&tokens)?;
        let tree = match root {
            Some(root) => Tree::from(self.assemble(root)?),
            None => Tree::empty(),
        };
        debug!("built tree with {} nodes", tree.len());
        Ok(tree)
    }

    /// Assign every value to a parent slot, breadth-first.
    fn stage(&mut self, tokens: &[Option<Value>]) -> TreeResult<Option<Index>> {
        let mut remaining = tokens.iter().copied();
        let Some(Some(root_value)) = remaining.next() else {
            ensure_no_values(remaining)?;
            return Ok(None);
        };

        let root = self.insert(root_value);
        let mut queue = VecDeque::from([root]);

        while let Some(parent) = queue.pop_front() {
            let Some(left) = remaining.next() else { break };
            let left = left.map(|value| self.insert(value));
            let right = remaining.next().flatten().map(|value| self.insert(value));

            let staged = self
                .arena
                .get_mut(parent)
                .ok_or_else(|| DomainError::Internal("parent vanished from arena".to_string()))?;
            staged.left = left;
            staged.right = right;
            queue.extend(left);
            queue.extend(right);
        }

        ensure_no_values(remaining)?;
        Ok(Some(root))
    }

    fn insert(&mut self, value: Value) -> Index {
        let idx = self.arena.insert(StagedNode {
            value,
            left: None,
            right: None,
        });
        self.visit_order.push(idx);
        idx
    }

    /// Children come after their parent in breadth-first order, so walking
    /// that order backwards always finds both children already assembled.
    fn assemble(&mut self, root: Index) -> TreeResult<Node> {
        let mut built: HashMap<Index, Node> = HashMap::new();

        for idx in self.visit_order.drain(..).rev() {
            let staged = self
                .arena
                .remove(idx)
                .ok_or_else(|| DomainError::Internal("node staged twice".to_string()))?;
            let node = Node {
                value: staged.value,
                left: staged.left.and_then(|i| built.remove(&i)).map(Box::new),
                right: staged.right.and_then(|i| built.remove(&i)).map(Box::new),
            };
            built.insert(idx, node);
        }

        built
            .remove(&root)
            .ok_or_else(|| DomainError::Internal("root missing after assembly".to_string()))
    }
}

fn parse_tokens(description: &str) -> TreeResult<Vec<Option<Value>>> {
    description
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| parse_token(position, token))
        .collect()
}

fn parse_token(position: usize, token: &str) -> TreeResult<Option<Value>> {
    if ABSENT_MARKERS.iter().any(|m| token.eq_ignore_ascii_case(m)) {
        return Ok(None);
    }
    token
        .parse::<Value>()
        .map(Some)
        .map_err(|_| DomainError::InvalidToken {
            position,
            token: token.to_string(),
        })
}

/// Trailing absent markers are fine; trailing values have nowhere to go.
fn ensure_no_values(rest: impl Iterator<Item = Option<Value>>) -> TreeResult<()> {
    let count = rest.flatten().count();
    if count > 0 {
        return Err(DomainError::DanglingValues { count });
    }
    Ok(())
}

impl std::str::FromStr for Tree {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TreeBuilder::new().build_from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens_mixed_separators() {
        let tokens = parse_tokens("[1, 2 null,#\n3]").unwrap();
        assert_eq!(tokens, vec![Some(1), Some(2), None, None, Some(3)]);
    }

    #[test]
    fn test_parse_token_rejects_garbage() {
        let err = parse_tokens("1,x,3").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidToken {
                position: 1,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_builder_is_reusable() {
        let mut builder = TreeBuilder::new();
        let first = builder.build_from_str("1,2,3").unwrap();
        let second = builder.build_from_str("4").unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 1);
        assert_eq!(second.root().unwrap().value, 4);
    }
}
