//! Output sinks shared by the commands

use std::fmt::Display;
use std::io::{self, Write};

use arbor_core::traversal::Visitor;

/// Writes each visited value on its own line.
///
/// `Visitor::visit` cannot fail, so the first write error is held and
/// reported by [`LineSink::finish`]; later values are dropped.
pub struct LineSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => self.out.flush(),
        }
    }
}

impl<T: Display, W: Write> Visitor<T> for LineSink<W> {
    fn visit(&mut self, value: &T) {
        if self.error.is_none() {
            if let Err(err) = writeln!(self.out, "{}", value) {
                self.error = Some(err);
            }
        }
    }
}

/// Render a path as `1 -> 3 -> 4`, or `not found` when empty
pub fn format_path<T: Display>(path: &[T]) -> String {
    if path.is_empty() {
        return "not found".to_string();
    }
    path.iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Print pretty JSON to stdout
pub fn print_json(value: &serde_json::Value) -> arbor_core::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
