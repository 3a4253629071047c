//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::MaxContentLength;
use output::OutputFormat;

/// divline - section dividers and outlines for markdown notes
#[derive(Parser, Debug)]
#[command(name = "divline", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/divline/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the outline of headings and dividers
    Outline(OutlineArgs),

    /// Insert a section divider above the cursor
    Insert(InsertArgs),

    /// Show where the cursor lands for the outline entry on a line
    Goto(GotoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `outline` command
#[derive(Parser, Debug)]
pub struct OutlineArgs {
    /// Markdown file, or - for stdin
    pub file: PathBuf,

    /// Characters of divider content to show (overrides config)
    #[arg(short = 'm', long)]
    pub max_content_length: Option<MaxContentLength>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `insert` command
#[derive(Parser, Debug)]
pub struct InsertArgs {
    /// Markdown file, or - for stdin
    pub file: PathBuf,

    /// Cursor line (1-based)
    #[arg(short, long)]
    pub line: usize,

    /// Insert below the frontmatter instead of below the nearest heading
    #[arg(long)]
    pub ignore_headings: bool,

    /// Write the divider into the file instead of only reporting it
    #[arg(short, long)]
    pub write: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `goto` command
#[derive(Parser, Debug)]
pub struct GotoArgs {
    /// Markdown file, or - for stdin
    pub file: PathBuf,

    /// Line of the outline entry (1-based)
    #[arg(short, long)]
    pub line: usize,

    /// Characters of divider content to capture (overrides config)
    #[arg(short = 'm', long)]
    pub max_content_length: Option<MaxContentLength>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    pub shell: Shell,
}
