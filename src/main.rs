// src/main.rs
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

mod presentation;

#[derive(Parser, Debug)]
#[command(name = "code_census", version, about = "言語別にコード行/コメント行/空行を集計するツール")]
struct Args {
    /// Root path to scan
    root: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let census = code_census_core::walk(&args.root)
        .with_context(|| format!("failed to scan '{}'", args.root.display()))?;

    let mut out = io::stdout().lock();
    presentation::render_table(&census, &mut out)?;
    Ok(())
}
