//! `arbor demo`: both traversals and both searches in one run

use arbor_core::error::Result;
use arbor_core::search::Strategy;
use arbor_core::tree::Tree;

use super::output::{format_path, print_json};
use super::search::SearchReport;
use super::traverse::{collect, Order};
use crate::cli::{Cli, OutputFormat};

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn execute(cli: &Cli, tree: &Tree<i64>, target: i64) -> Result<()> {
    let dfs = collect(tree, Order::DepthFirst);
    let bfs = collect(tree, Order::BreadthFirst);
    let reports: Vec<SearchReport> = Strategy::ALL
        .iter()
        .map(|strategy| SearchReport::run(tree, *strategy, target))
        .collect();

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "dfs": dfs,
            "bfs": bfs,
            "searches": reports,
        })),
        OutputFormat::Human => {
            println!("depth-first: {}", join(&dfs));
            println!("breadth-first: {}", join(&bfs));
            for report in &reports {
                println!(
                    "{}({}): {}",
                    report.strategy,
                    report.target,
                    format_path(&report.path)
                );
            }
            Ok(())
        }
    }
}
