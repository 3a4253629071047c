//! Insert command handler.

use anyhow::{Context, Result, bail};
use tracing::info;

use super::{line_index, load_document};
use crate::cli::InsertArgs;
use crate::cli::config::Config;
use crate::cli::output::{InsertReport, Output, OutputFormat};
use crate::domain::{InsertionPoint, SectionEdit, resolve};
use crate::infra::{is_stdin, write_document};

/// A resolved insertion and the document it produces (pure, no I/O).
#[derive(Debug)]
pub struct InsertPlan {
    pub point: InsertionPoint,
    pub edit: SectionEdit,
    pub updated: String,
}

/// Resolves where a divider goes for a 1-based cursor line and applies it
/// to `text`.
///
/// # Errors
///
/// Returns an error if `cursor_line` is 0.
pub fn plan_insert(text: &str, cursor_line: usize, respect_headings: bool) -> Result<InsertPlan> {
    let point = resolve(text, line_index(cursor_line)?, respect_headings);
    let edit = point.edit();
    let updated = edit.apply(text);
    Ok(InsertPlan {
        point,
        edit,
        updated,
    })
}

pub fn handle_insert(args: &InsertArgs, config: &Config) -> Result<()> {
    if args.write && is_stdin(&args.file) {
        bail!("--write needs a file path, not stdin");
    }

    let source = load_document(&args.file)?;
    let plan = plan_insert(
        &source.text,
        args.line,
        config.respect_headings(args.ignore_headings),
    )?;

    if args.write {
        write_document(&args.file, &source.with_text(plan.updated))
            .with_context(|| format!("failed to write document: {}", args.file.display()))?;
        info!(
            path = %args.file.display(),
            insert_line = plan.point.insert_line,
            "inserted section divider"
        );
    }

    match args.format {
        OutputFormat::Human => {
            let location = if plan.point.at_document_top {
                "top of document".to_string()
            } else {
                format!("line {}", plan.point.insert_line + 1)
            };
            let verb = if args.write { "Inserted" } else { "Would insert" };
            println!("{} section at {}; cursor {}", verb, location, plan.edit.cursor);
        }
        OutputFormat::Json => {
            let report = InsertReport {
                insert_line: plan.point.insert_line,
                at_document_top: plan.point.at_document_top,
                cursor: plan.edit.cursor,
                written: args.write,
            };
            println!("{}", Output::new(report).to_json()?);
        }
    }

    Ok(())
}
