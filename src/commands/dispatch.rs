//! Command dispatch logic for arbor
use std::time::Instant;

use arbor_core::config::TreeFile;
use arbor_core::error::Result;
use arbor_core::trace_time;
use arbor_core::tree::{reference_tree, Tree};

use crate::cli::{Cli, Commands};
use crate::commands::{demo, export, search, traverse};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Dfs) => {
            let tree = load_tree(cli, start)?;
            traverse::execute(cli, &tree, traverse::Order::DepthFirst)
        }

        Some(Commands::Bfs) => {
            let tree = load_tree(cli, start)?;
            traverse::execute(cli, &tree, traverse::Order::BreadthFirst)
        }

        Some(Commands::Search { target, strategy }) => {
            let tree = load_tree(cli, start)?;
            search::execute(cli, &tree, *strategy, *target)
        }

        Some(Commands::Demo { target }) => {
            let tree = load_tree(cli, start)?;
            demo::execute(cli, &tree, *target)
        }

        Some(Commands::Export) => {
            let tree = load_tree(cli, start)?;
            export::execute(cli, &tree)
        }
    }
}

/// The tree named by `--tree`, or the reference tree
fn load_tree(cli: &Cli, start: Instant) -> Result<Tree<i64>> {
    let tree = match &cli.tree {
        Some(path) => TreeFile::load(path)?.to_tree()?,
        None => reference_tree(),
    };
    trace_time!(start, "load_tree", nodes = tree.node_count());
    Ok(tree)
}

fn handle_no_command() -> Result<()> {
    println!("arbor {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Tree traversal and leaf path search.");
    println!();
    println!("Run `arbor --help` for usage information.");
    Ok(())
}
