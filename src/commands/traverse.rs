//! `arbor dfs` / `arbor bfs`

use std::io;

use serde::Serialize;

use arbor_core::error::Result;
use arbor_core::tree::Tree;

use super::output::{print_json, LineSink};
use crate::cli::{Cli, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Order {
    #[serde(rename = "dfs")]
    DepthFirst,
    #[serde(rename = "bfs")]
    BreadthFirst,
}

/// Values of `tree` in the given order
pub fn collect(tree: &Tree<i64>, order: Order) -> Vec<i64> {
    let mut values = Vec::with_capacity(tree.node_count());
    let mut push = |value: &i64| values.push(*value);
    match order {
        Order::DepthFirst => tree.depth_first(&mut push),
        Order::BreadthFirst => tree.breadth_first(&mut push),
    }
    values
}

pub fn execute(cli: &Cli, tree: &Tree<i64>, order: Order) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "order": order,
            "values": collect(tree, order),
        })),
        OutputFormat::Human => {
            let mut sink = LineSink::new(io::stdout().lock());
            match order {
                Order::DepthFirst => tree.depth_first(&mut sink),
                Order::BreadthFirst => tree.breadth_first(&mut sink),
            }
            Ok(sink.finish()?)
        }
    }
}
