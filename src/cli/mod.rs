//! Command-line interface module.

mod args;
pub mod resolve;
pub mod rewrite;

pub use args::{Cli, Commands, RewriteArgs};
