//! Print the lines of one or more files with their line numbers.
//!
//! Run with: `cargo run --example number_lines -- --start 1 Cargo.toml`

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use enumerate::Enumerator;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "number_lines", about = "Number the lines of text files")]
struct Cli {
    /// Files to print.
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Number given to the first line of each file.
    #[arg(long, default_value_t = 1)]
    start: usize,
    /// Skip blank lines (they still consume a number).
    #[arg(long)]
    skip_blank: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let enumerator = Enumerator::new().with_start(cli.start);

    for path in &cli.files {
        let reader = BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        );

        let printed = enumerator
            .try_over(reader.lines(), |line, number| {
                let line = line?;
                if !(cli.skip_blank && line.trim().is_empty()) {
                    println!("{number:>6}\t{line}");
                }
                Ok::<(), std::io::Error>(())
            })
            .with_context(|| format!("failed to read {}", path.display()))?;

        tracing::debug!(file = %path.display(), lines = printed, "file numbered");
    }

    Ok(())
}
