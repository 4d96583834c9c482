//! Domain layer: the tree model and the algorithms over it
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod equality;
pub mod error;
pub mod node;
pub mod render;
pub mod transform;
pub mod traversal;
pub mod view;

pub use builder::TreeBuilder;
pub use equality::is_identical;
pub use error::{DomainError, TreeResult};
pub use node::{Node, Tree, Value};
pub use render::TreeRender;
pub use transform::sum_transform;
pub use traversal::{
    traverse, InorderIter, IterativeStack, Order, PostorderIter, PreorderIter, Recursive,
    Strategy, Traverse,
};
pub use view::{bottom_view, top_view, view, ViewKind};

impl Tree {
    pub fn traverse(&self, order: Order, strategy: Strategy) -> Vec<Value> {
        traverse(self.root(), order, strategy)
    }
}
