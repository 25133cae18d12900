//! # vellum
//!
//! Command-line front end: resolves definitions, dumps definition tables and
//! region trees for Vue single-file components.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vellum")]
#[command(about = "Go-to-definition for Vue single-file components", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path (defaults to ./vellum.config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the identifier at a position to its definitions
    Definition(commands::definition::DefinitionArgs),

    /// Print the definition table of each matched file
    Bindings(commands::bindings::BindingsArgs),

    /// Print the region tree of a file
    Regions(commands::regions::RegionsArgs),
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = config::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Definition(args) => commands::definition::run(args, &config),
        Commands::Bindings(args) => commands::bindings::run(args, &config),
        Commands::Regions(args) => commands::regions::run(args, &config),
    });

    if let Err(e) = result {
        eprintln!("\x1b[31mError:\x1b[0m {}", e);
        std::process::exit(1);
    }
}
