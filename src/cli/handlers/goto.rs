//! Goto command handler.

use anyhow::{Result, bail};

use super::{line_index, load_document};
use crate::cli::GotoArgs;
use crate::cli::config::Config;
use crate::cli::output::{GotoReport, Output, OutputFormat};
use crate::domain::{OutlineEntry, OutlineService, Position, clamp, navigation_target};
use crate::infra::split_lines;

/// An outline entry and the cursor position it navigates to.
#[derive(Debug)]
pub struct GotoTarget {
    pub entry: OutlineEntry,
    pub position: Position,
}

/// Finds the outline entry on a 1-based line and resolves its cursor target.
///
/// # Errors
///
/// Returns an error if no outline entry starts on `line`, or if the target
/// falls outside the document.
pub fn find_goto_target(text: &str, line: usize, service: &OutlineService) -> Result<GotoTarget> {
    let index = line_index(line)?;
    let outline = service.generate_outline(text);

    let Some(entry) = outline.into_iter().find(|e| e.line == index) else {
        bail!("no outline entry on line {}", line);
    };

    let lines = split_lines(text);
    let Some(position) = clamp(&lines, navigation_target(&lines, &entry)) else {
        bail!("target of '{}' is outside the document", entry.title);
    };

    Ok(GotoTarget { entry, position })
}

pub fn handle_goto(args: &GotoArgs, config: &Config) -> Result<()> {
    let text = load_document(&args.file)?.text;
    let service = OutlineService::new(config.max_content_length(args.max_content_length));
    let target = find_goto_target(&text, args.line, &service)?;

    match args.format {
        OutputFormat::Human => {
            println!("{} {}", target.position, target.entry.title);
        }
        OutputFormat::Json => {
            let report = GotoReport {
                entry: &target.entry,
                position: target.position,
            };
            println!("{}", Output::new(report).to_json()?);
        }
    }

    Ok(())
}
