//! `arbor search <TARGET>`

use serde::Serialize;

use arbor_core::error::Result;
use arbor_core::search::Strategy;
use arbor_core::tree::Tree;

use super::output::{format_path, print_json};
use crate::cli::{Cli, OutputFormat};

/// Outcome of one search, as reported in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub target: i64,
    pub found: bool,
    pub path: Vec<i64>,
}

impl SearchReport {
    pub fn run(tree: &Tree<i64>, strategy: Strategy, target: i64) -> Self {
        let path = tree.search(strategy, &target);
        Self {
            strategy,
            target,
            found: !path.is_empty(),
            path,
        }
    }
}

pub fn execute(cli: &Cli, tree: &Tree<i64>, strategy: Strategy, target: i64) -> Result<()> {
    let report = SearchReport::run(tree, strategy, target);
    tracing::debug!(strategy = %strategy, target, found = report.found, "search");

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::to_value(&report)?),
        OutputFormat::Human => {
            if report.found || !cli.quiet {
                println!("{}", format_path(&report.path));
            }
            Ok(())
        }
    }
}
