use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use lut_gen::{emit, tables::build_lookup_tables};

#[derive(Parser, Debug)]
#[command(name = "lut-gen")]
#[command(about = "Generate arpeggiator and Euclidean rhythm lookup tables", long_about = None)]
struct Args {
    /// Output file path (default: `lookup_tables.<ext>` for the chosen format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (c, rust or json)
    #[arg(short, long, default_value = "c")]
    format: String,

    /// Print output to stdout instead of file
    #[arg(long)]
    stdout: bool,

    /// Suppress informational messages (only errors)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // A malformed pattern literal must abort the build here
    let tables = build_lookup_tables().context("Failed to build lookup tables")?;

    if !args.quiet {
        for table in &tables {
            eprintln!("Built '{}': {} entries", table.name, table.values.len());
        }
    }

    let (rendered, extension) = match args.format.as_str() {
        "c" => (emit::render_c_header(&tables), "h"),
        "rust" => (emit::render_rust(&tables), "rs"),
        "json" => (emit::render_json(&tables)?, "json"),
        other => anyhow::bail!("Unknown format '{}' (expected c, rust or json)", other),
    };

    if args.stdout {
        // Print directly to stdout (clean, no logs)
        println!("{}", rendered.trim_end());
        return Ok(());
    }

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("lookup_tables.{}", extension)));

    fs::write(&output_path, &rendered)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if !args.quiet {
        eprintln!("Tables saved to {}", output_path.display());
    }

    Ok(())
}
