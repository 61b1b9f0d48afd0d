//! doclinks - rewrite authored documentation links into resolved site routes.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use doclinks::{
    address::Site,
    cli::{self, Cli, Commands},
    config::SiteConfig,
    debug, log, logger,
};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    let site = Site::from_config(&config);
    debug!("config"; "out_dir = {}, {} index entries", config.build.out_dir.display(), site.index().len());

    match &cli.command {
        Commands::Rewrite { args } => cli::rewrite::rewrite_documents(args, &site),
        Commands::Resolve { url, src } => cli::resolve::resolve_url(url, src, &site),
    }
}
