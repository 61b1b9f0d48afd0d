//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Rewrite authored documentation links into resolved site routes
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: doclinks.toml)
    #[arg(short = 'C', long, global = true, default_value = "doclinks.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Site output root, overrides `build.out_dir` (relative to the working directory)
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite the links of JSON document trees
    #[command(visible_alias = "r")]
    Rewrite {
        #[command(flatten)]
        args: RewriteArgs,
    },

    /// Print the route a single authored link resolves to
    Resolve {
        /// Authored link (e.g., `guide/start#install`)
        url: String,

        /// Source document the link is authored in
        #[arg(short, long, default_value = "index.md", value_hint = clap::ValueHint::FilePath)]
        src: PathBuf,
    },
}

/// Rewrite command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RewriteArgs {
    /// JSON document trees to rewrite
    #[arg(required = true, value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,

    /// Source document path handed to path deduction (default: each input path)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub src: Option<PathBuf>,

    /// Write results into this directory instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
