//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Order, Strategy};

/// Binary tree traversals, equality, horizontal views and sum-transform
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Level-order tree description, e.g. "1,2,3,null,4" (default: sample tree)
    #[arg(short, long, global = true)]
    pub tree: Option<String>,

    /// Directory holding a local .bintree.toml (default: cwd)
    #[arg(short = 'C', long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the depth-first traversal(s) of the tree
    Traverse {
        /// Order(s) to print (default: all three)
        #[arg(short, long, value_enum)]
        order: Vec<Order>,
        /// Recursive or explicit-stack traversal (default from config)
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,
    },

    /// Check whether the tree is identical to another one
    Identical {
        /// Level-order description of the other tree (default: the tree itself)
        #[arg(long)]
        other: Option<String>,
    },

    /// Print the bottom view (deepest node per horizontal distance)
    BottomView,

    /// Print the top view (shallowest node per horizontal distance)
    TopView,

    /// Rewrite node values bottom-up and print the returned aggregate
    SumTransform,

    /// Show the tree
    Show,

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
