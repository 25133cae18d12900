//! Definition command - Resolve the identifier at a position

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use vellum_carton::{LineIndex, Position};
use vellum_croquis::BindingCategory;
use vellum_maestro::{DefinitionCollector, DefinitionService};

use super::{read_source, OutputFormat};
use crate::config::VellumConfig;
use crate::error::{CliError, Result};

#[derive(Args)]
pub struct DefinitionArgs {
    /// File to analyze
    pub file: PathBuf,

    /// Byte offset of the cursor
    #[arg(long, conflicts_with_all = ["line", "column"], required_unless_present = "line")]
    pub offset: Option<u32>,

    /// 1-based line of the cursor
    #[arg(long, requires = "column")]
    pub line: Option<u32>,

    /// 1-based column of the cursor, in characters
    #[arg(long, requires = "line")]
    pub column: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct LocationOutput<'a> {
    name: &'a str,
    category: BindingCategory,
    offset: u32,
    line: u32,
    column: u32,
}

#[derive(Serialize)]
struct DefinitionOutput<'a> {
    file: String,
    word: Option<&'a str>,
    locations: Vec<LocationOutput<'a>>,
}

pub fn run(args: DefinitionArgs, config: &VellumConfig) -> Result<()> {
    let source = read_source(&args.file)?;
    let index = LineIndex::new(&source);
    let offset = cursor_offset(&args, &index, source.len())?;

    let collector = DefinitionCollector::with_options(config.definition.clone());
    let table = collector.build_for_path(&args.file, &source);
    for warning in table.warnings() {
        eprintln!("\x1b[33mWarning:\x1b[0m {}", warning);
    }

    let result = DefinitionService::definition_in(&table, &source, offset);
    let file = args.file.display().to_string();
    let locations: Vec<_> = result
        .iter()
        .flat_map(|r| r.locations.iter())
        .map(|l| {
            let pos = index.position(l.offset);
            LocationOutput {
                name: &l.name,
                category: l.category,
                offset: l.offset,
                line: pos.line + 1,
                column: pos.character + 1,
            }
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            let output = DefinitionOutput {
                file,
                word: result.as_ref().map(|r| r.word.as_str()),
                locations,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            if locations.is_empty() {
                match &result {
                    Some(r) => eprintln!("No definition found for `{}`", r.word),
                    None => eprintln!("No identifier at offset {}", offset),
                }
            }
            for location in &locations {
                println!(
                    "{}:{}:{} ({})",
                    file,
                    location.line,
                    location.column,
                    location.category.as_str()
                );
            }
        }
    }

    Ok(())
}

fn cursor_offset(args: &DefinitionArgs, index: &LineIndex<'_>, len: usize) -> Result<u32> {
    if let Some(offset) = args.offset {
        if offset as usize > len {
            return Err(CliError::OffsetOutOfRange {
                path: args.file.clone(),
                offset,
                len,
            });
        }
        return Ok(offset);
    }

    let line = args.line.unwrap_or(1);
    let column = args.column.unwrap_or(1);
    let invalid = || CliError::InvalidPosition {
        path: args.file.clone(),
        line,
        column,
    };
    if line == 0 || column == 0 {
        return Err(invalid());
    }
    index
        .offset(Position::new(line - 1, column - 1))
        .ok_or_else(invalid)
}
