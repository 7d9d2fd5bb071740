//! CLI commands for arbor

pub mod demo;
pub mod dispatch;
pub mod export;
pub mod output;
pub mod search;
pub mod traverse;
