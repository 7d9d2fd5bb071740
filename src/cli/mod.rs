//! CLI argument parsing for arbor
//!
//! Global flags: --tree, --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use arbor_core::format::OutputFormat;
use arbor_core::search::Strategy;
use parse::{parse_format, parse_strategy};

/// Arbor - tree traversal and leaf path search
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Tree description file (TOML, or JSON with a .json extension);
    /// defaults to the built-in reference tree
    #[arg(long, global = true, env = "ARBOR_TREE")]
    pub tree: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print values in depth-first (preorder) order
    Dfs,

    /// Print values in breadth-first (level) order
    Bfs,

    /// Find the root-to-leaf path to a leaf holding TARGET
    Search {
        /// Value to look for (only leaves can match)
        #[arg(allow_negative_numbers = true)]
        target: i64,

        /// Search strategy (best-first, hill-climbing)
        #[arg(long, short, value_parser = parse_strategy, default_value = "best-first")]
        strategy: Strategy,
    },

    /// Run both traversals and both searches
    Demo {
        /// Value the searches look for
        #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
        target: i64,
    },

    /// Print the current tree as a description file
    Export,
}
