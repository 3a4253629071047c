//! Outline command handler.

use anyhow::Result;
use std::fmt::Write as _;

use super::{load_document, truncate_str};
use crate::cli::OutlineArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::{OutlineEntry, OutlineService};

/// Widest title shown in human output.
const TITLE_WIDTH: usize = 60;

pub fn handle_outline(args: &OutlineArgs, config: &Config) -> Result<()> {
    let text = load_document(&args.file)?.text;
    let service = OutlineService::new(config.max_content_length(args.max_content_length));
    let outline = service.generate_outline(&text);

    match args.format {
        OutputFormat::Human => {
            if outline.is_empty() {
                println!("No outline entries found.");
            } else {
                print!("{}", render_outline(&outline));
            }
        }
        OutputFormat::Json => {
            println!("{}", Output::new(&outline).to_json()?);
        }
    }

    Ok(())
}

/// Renders entries one per line, indented by level.
///
/// ```text
///    1  # Title
///    5    - Short note
/// ```
pub fn render_outline(entries: &[OutlineEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let indent = "  ".repeat(entry.level.saturating_sub(1));
        let marker = if entry.is_heading() { "#" } else { "-" };
        let _ = writeln!(
            out,
            "{:>4}  {}{} {}",
            entry.line + 1,
            indent,
            marker,
            truncate_str(&entry.title, TITLE_WIDTH)
        );
    }
    out
}
