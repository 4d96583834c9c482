use tracing::{debug, instrument};

use crate::domain::node::{Node, Tree, Value};

/// Rewrites every node bottom-up and returns an aggregate.
///
/// For each node, children are transformed first. The node's new value is the
/// sum of what the two child calls returned (0 for an absent child), and the
/// call returns the new value plus the node's value before the rewrite. Leaves
/// therefore become 0 and return their old value.
///
/// NOTE: the returned aggregate mixes rewritten and original values. It is
/// kept exactly as described rather than normalized to "sum of originals" or
/// "new root value". The transform is not idempotent: a second call sees the
/// rewritten values and in general returns something else.
///
/// Both additions wrap on overflow (two's complement), so any `i64` input
/// gives the same result in every build profile and never panics.
#[instrument(level = "debug", skip(root))]
pub fn sum_transform(root: Option<&mut Node>) -> Value {
    let total = rewrite(root);
    debug!("sum transform returned {}", total);
    total
}

fn rewrite(node: Option<&mut Node>) -> Value {
    let Some(node) = node else { return 0 };
    let left_sum = rewrite(node.left.as_deref_mut());
    let right_sum = rewrite(node.right.as_deref_mut());
    let previous = node.value;
    node.value = left_sum.wrapping_add(right_sum);
    node.value.wrapping_add(previous)
}

impl Tree {
    pub fn sum_transform(&mut self) -> Value {
        sum_transform(self.root_mut())
    }
}
