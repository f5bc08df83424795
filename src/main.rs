//! gendiff command-line interface.
//!
//! Wires the loader, the diff engine and the formatter registry together:
//! two files in, one rendered diff on standard output.

use anyhow::{Context, Result};
use clap::Parser;
use gendiff::{compare, format_diff, parse_file, OutputFormat};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Compares two configuration files and shows a difference.
///
/// Supports JSON (.json) and YAML (.yml, .yaml) files in any combination.
#[derive(Parser)]
#[command(name = "gendiff")]
#[command(version)]
#[command(about = "Compares two configuration files and shows a difference.", long_about = None)]
struct Cli {
    /// First file to compare
    #[arg(value_name = "FILE1")]
    file1: PathBuf,

    /// Second file to compare
    #[arg(value_name = "FILE2")]
    file2: PathBuf,

    /// Output format: stylish, plain or json
    #[arg(short = 'f', long, default_value = "stylish", value_name = "FORMAT")]
    format: String,

    /// Log loading and comparison steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        process::exit(2);
    }
}

/// Installs a stderr subscriber; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli
        .format
        .parse()
        .context("Invalid --format option")?;

    let old = parse_file(&cli.file1)
        .with_context(|| format!("Failed to load first file: {}", cli.file1.display()))?;
    let new = parse_file(&cli.file2)
        .with_context(|| format!("Failed to load second file: {}", cli.file2.display()))?;

    let tree = compare(&old, &new).context("Failed to compare documents")?;
    debug!(stats = ?tree.stats(), "diff computed");

    let output = format_diff(&tree, format).context("Failed to format diff output")?;
    println!("{}", output);

    Ok(())
}
