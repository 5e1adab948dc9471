//! Command-line driver for the kanban board engine.

pub mod cli;
pub mod replay;

pub use cli::{Cli, Commands, OutputFormat};
