//! divline - section dividers and outlines for markdown notes

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_goto, handle_insert, handle_outline},
    logging::init_logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Outline(args) => handle_outline(args, &config),
        Command::Insert(args) => handle_insert(args, &config),
        Command::Goto(args) => handle_goto(args, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
