//! csdoc: insert or refresh Korean XML doc comments in C# sources.
//!
//! Walks a directory tree, recognizes type, method, constructor and property
//! declarations line by line, and writes a `///` block above each one that
//! lacks documentation. Existing blocks are only regenerated when they are
//! placeholders, curated overrides exist, or they belong to interfaces.
//!
//! Set `RUST_LOG=debug` to see every planned edit.

mod block;
mod heuristic;
mod locator;
mod matcher;
mod model;
mod overrides;
mod phrase;
mod reconcile;
mod tokenize;
mod walk;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "csdoc",
    about = "Insert or refresh XML doc comments above C# declarations"
)]
struct Cli {
    /// Root directory to scan for .cs files
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let table = overrides::OverrideTable::builtin();
    let reconciler = reconcile::Reconciler::new(&table);

    let files = walk::discover(&cli.root)?;
    let mut changed = 0;
    for path in &files {
        if reconciler.process_file(path)? {
            changed += 1;
        }
    }

    println!("Processed {} files, changed {} files.", files.len(), changed);
    Ok(())
}
