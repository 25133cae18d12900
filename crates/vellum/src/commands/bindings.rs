//! Bindings command - Print the definition table of each file

use clap::Args;
use glob::glob;
use ignore::Walk;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use vellum_carton::{FxHashSet, LineIndex};
use vellum_croquis::BindingCategory;
use vellum_maestro::{AnalysisWarning, DefinitionCollector, DefinitionTable};

use super::{read_source, OutputFormat};
use crate::config::VellumConfig;
use crate::error::{CliError, Result};

#[derive(Args)]
pub struct BindingsArgs {
    /// Files, directories or glob patterns
    #[arg(default_value = "./**/*.vue")]
    pub patterns: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct BindingOutput<'a> {
    name: &'a str,
    category: BindingCategory,
    offset: u32,
    line: u32,
    column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<[u32; 2]>,
}

#[derive(Serialize)]
struct FileOutput<'a> {
    file: String,
    bindings: Vec<BindingOutput<'a>>,
    warnings: &'a [AnalysisWarning],
}

pub fn run(args: BindingsArgs, config: &VellumConfig) -> Result<()> {
    let collector = DefinitionCollector::with_options(config.definition.clone());
    let files = collect_files(&args.patterns, &collector);

    if files.is_empty() {
        return Err(CliError::NoFiles(args.patterns));
    }

    // Analyze all files in parallel; each file is independent.
    let results: Vec<(PathBuf, String, DefinitionTable)> = files
        .par_iter()
        .filter_map(|path| match read_source(path) {
            Ok(source) => {
                let table = collector.build_for_path(path, &source);
                Some((path.clone(), source, table))
            }
            Err(e) => {
                eprintln!("{}", e);
                None
            }
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            let output: Vec<_> = results
                .iter()
                .map(|(path, source, table)| file_output(path, source, table))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            for (path, source, table) in &results {
                print!("{}", render_text(&file_output(path, source, table)));
                for warning in table.warnings() {
                    eprintln!("\x1b[33mWarning:\x1b[0m {}", warning);
                }
            }
        }
    }

    Ok(())
}

/// Expand patterns into document paths. Glob patterns go through `glob`,
/// anything else is walked as a directory (respecting `.gitignore`). A file
/// matched by several patterns is analyzed once.
fn collect_files(patterns: &[String], collector: &DefinitionCollector) -> Vec<PathBuf> {
    let is_candidate = |p: &Path| {
        collector.supports_path(p) && !p.components().any(|c| c.as_os_str() == "node_modules")
    };
    let mut seen = FxHashSet::default();

    patterns
        .iter()
        .flat_map(|pattern| {
            if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
                glob(pattern)
                    .ok()
                    .into_iter()
                    .flatten()
                    .filter_map(|r| r.ok())
                    .filter(|p| is_candidate(p))
                    .collect::<Vec<_>>()
            } else {
                Walk::new(pattern)
                    .filter_map(|e| e.ok())
                    .filter(|e| is_candidate(e.path()))
                    .map(|e| e.path().to_path_buf())
                    .collect::<Vec<_>>()
            }
        })
        .filter(|path| seen.insert(path.clone()))
        .collect()
}

fn file_output<'a>(path: &Path, source: &str, table: &'a DefinitionTable) -> FileOutput<'a> {
    let index = LineIndex::new(source);
    FileOutput {
        file: path.display().to_string(),
        bindings: table
            .bindings()
            .iter()
            .map(|b| {
                let pos = index.position(b.position);
                BindingOutput {
                    name: &b.name,
                    category: b.category,
                    offset: b.position,
                    line: pos.line + 1,
                    column: pos.character + 1,
                    scope: b.active_scope.map(|s| [s.start, s.end]),
                }
            })
            .collect(),
        warnings: table.warnings(),
    }
}

fn render_text(output: &FileOutput<'_>) -> String {
    let mut text = format!("{}\n", output.file);
    for binding in &output.bindings {
        let location = format!("{}:{}", binding.line, binding.column);
        text.push_str(&format!(
            "  {:<8} {:<12} {}",
            location,
            binding.category.as_str(),
            binding.name
        ));
        if let Some([start, end]) = binding.scope {
            text.push_str(&format!("  (in {}..{})", start, end));
        }
        text.push('\n');
    }
    text
}
