//! Horizontal views of a tree.
//!
//! Every node gets a horizontal distance (root 0, left child -1, right child
//! +1 relative to the parent) and a level (edges from the root). A single
//! preorder pass records one node per distance in an ordered map; the view is
//! the recorded values in ascending distance.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::domain::node::{Node, Tree, Value};

/// Which node survives when several share a horizontal distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Deepest node; on equal level the later preorder visit wins.
    Bottom,
    /// Shallowest node; on equal level the first preorder visit is kept.
    Top,
}

impl ViewKind {
    fn replaces(self, recorded_level: usize, level: usize) -> bool {
        match self {
            ViewKind::Bottom => level >= recorded_level,
            ViewKind::Top => level < recorded_level,
        }
    }
}

/// distance -> (value, level)
type DistanceMap = BTreeMap<i64, (Value, usize)>;

fn project(node: Option<&Node>, dist: i64, level: usize, kind: ViewKind, map: &mut DistanceMap) {
    let Some(node) = node else { return };

    let record = map.entry(dist).or_insert((node.value, level));
    if kind.replaces(record.1, level) {
        *record = (node.value, level);
    }

    project(node.left(), dist - 1, level + 1, kind, map);
    project(node.right(), dist + 1, level + 1, kind, map);
}

#[instrument(level = "debug", skip(root))]
pub fn view(root: Option<&Node>, kind: ViewKind) -> Vec<Value> {
    let mut map = DistanceMap::new();
    project(root, 0, 0, kind, &mut map);
    debug!("{:?} view spans {} distances", kind, map.len());
    map.into_values().map(|(value, _)| value).collect()
}

pub fn bottom_view(root: Option<&Node>) -> Vec<Value> {
    view(root, ViewKind::Bottom)
}

pub fn top_view(root: Option<&Node>) -> Vec<Value> {
    view(root, ViewKind::Top)
}

impl Tree {
    pub fn bottom_view(&self) -> Vec<Value> {
        bottom_view(self.root())
    }

    pub fn top_view(&self) -> Vec<Value> {
        top_view(self.root())
    }
}
