//! `arbor export`: print the current tree as a description file

use arbor_core::config::TreeFile;
use arbor_core::error::Result;
use arbor_core::tree::Tree;

use super::output::print_json;
use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, tree: &Tree<i64>) -> Result<()> {
    let file = TreeFile::from_tree(tree);
    match cli.format {
        OutputFormat::Json => print_json(&serde_json::to_value(&file)?),
        OutputFormat::Human => {
            print!("{}", file.to_toml_string()?);
            Ok(())
        }
    }
}
