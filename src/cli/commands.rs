//! Command dispatch: resolve settings and tree, run the operation, print.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{Order, Strategy, Tree, TreeBuilder, TreeRender, Value};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };
    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = load_settings(cli)?;
    match command {
        Commands::Traverse { order, strategy } => {
            let tree = resolve_tree(&settings)?;
            _traverse(&tree, order, strategy.unwrap_or(settings.strategy), &settings)
        }
        Commands::Identical { other } => {
            let tree = resolve_tree(&settings)?;
            _identical(&tree, other.as_deref()).map(|_| ())
        }
        Commands::BottomView => {
            let tree = resolve_tree(&settings)?;
            let values = tree.bottom_view();
            output::action("bottom", &output::sequence(&values, &settings.separator));
            Ok(())
        }
        Commands::TopView => {
            let tree = resolve_tree(&settings)?;
            let values = tree.top_view();
            output::action("top", &output::sequence(&values, &settings.separator));
            Ok(())
        }
        Commands::SumTransform => {
            let mut tree = resolve_tree(&settings)?;
            _sum_transform(&mut tree, &settings).map(|_| ())
        }
        Commands::Show => {
            let tree = resolve_tree(&settings)?;
            output::info(&tree.to_term_tree());
            Ok(())
        }
        Commands::Config => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        Commands::Completion { .. } => Ok(()),
    }
}

pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let cwd;
    let local_dir = match &cli.config_dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(CliError::InvalidArgs(format!(
                    "config dir is not a directory: {}",
                    dir.display()
                )));
            }
            Some(dir.as_path())
        }
        None => {
            cwd = std::env::current_dir().ok();
            cwd.as_deref()
        }
    };
    let mut settings = Settings::load(local_dir)?;
    if let Some(tree) = &cli.tree {
        settings.tree = Some(tree.clone());
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

/// Configured tree (command line flag already applied) or the sample tree.
#[instrument(level = "debug", skip_all)]
pub fn resolve_tree(settings: &Settings) -> CliResult<Tree> {
    match &settings.tree {
        Some(description) => Ok(TreeBuilder::new().build_from_str(description)?),
        None => Ok(Tree::sample()),
    }
}

#[instrument(level = "debug", skip(tree, settings))]
fn _traverse(
    tree: &Tree,
    orders: &[Order],
    strategy: Strategy,
    settings: &Settings,
) -> CliResult<()> {
    let orders = if orders.is_empty() { &Order::ALL[..] } else { orders };
    for &order in orders {
        let values = tree.traverse(order, strategy);
        output::action(&order.to_string(), &output::sequence(&values, &settings.separator));
    }
    Ok(())
}

#[instrument(level = "debug", skip(tree))]
fn _identical(tree: &Tree, other: Option<&str>) -> CliResult<bool> {
    let other = match other {
        Some(description) => TreeBuilder::new().build_from_str(description)?,
        None => tree.clone(),
    };
    let identical = tree.is_identical(&other);
    if identical {
        output::success("The given binary trees are identical");
    } else {
        output::failure("The given binary trees are not identical");
    }
    Ok(identical)
}

#[instrument(level = "debug", skip_all)]
fn _sum_transform(tree: &mut Tree, settings: &Settings) -> CliResult<(Value, Vec<Value>)> {
    let total = tree.sum_transform();
    output::action("sum", &total);
    let rewritten = tree.traverse(Order::Inorder, settings.strategy);
    output::action("inorder", &output::sequence(&rewritten, &settings.separator));
    Ok((total, rewritten))
}
