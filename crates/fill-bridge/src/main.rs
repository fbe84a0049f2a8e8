//! Run a single auto diamond fill request from the command line.
//!
//! Reads a JSON request from a file (or stdin) and prints the JSON response.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fill_bridge::dispatch::respond_json;
use stone_layout::config::{DEFAULT_PREVIEW_LIMIT, GUARDED_MAX_PLACEMENTS};
use stone_layout::LayoutConfig;

/// Lay stones out over a region mesh.
#[derive(Parser)]
#[command(name = "diamond-fill")]
#[command(about = "Generate a stone grid layout from a JSON request", long_about = None)]
#[command(version)]
struct Cli {
    /// Request file. Reads stdin when omitted or "-".
    #[arg(value_name = "REQUEST")]
    input: Option<PathBuf>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,

    /// Reject layouts whose grid exceeds this many cells
    #[arg(long, default_value_t = GUARDED_MAX_PLACEMENTS)]
    max_placements: usize,

    /// Disable the grid size guard
    #[arg(long, conflicts_with = "max_placements")]
    unbounded: bool,

    /// Number of placements previewed in the report
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LIMIT)]
    preview_limit: usize,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = if cli.unbounded {
        LayoutConfig::default()
    } else {
        LayoutConfig::guarded().with_max_placements(cli.max_placements)
    }
    .with_preview_limit(cli.preview_limit);

    let raw = read_request(cli.input.as_ref())?;
    let response = respond_json(&config, &raw);

    let out = if cli.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("failed to serialize response")?;
    println!("{out}");

    Ok(if response.is_error() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    })
}

fn read_request(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read request from {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            Ok(buf)
        }
    }
}
