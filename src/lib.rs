//! Binary tree algorithms: depth-first traversals in recursive and
//! explicit-stack form, structural equality, bottom/top views and the
//! postorder sum-transform.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    bottom_view, is_identical, sum_transform, top_view, traverse, Node, Order, Strategy, Tree,
    Value,
};
