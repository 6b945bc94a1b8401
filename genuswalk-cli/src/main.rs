//! Command-line front end for the numerical monoid counter.
//!
//! Prints, for each genus below the bound, the number of numerical monoids
//! of that genus. All diagnostics go to stderr through `tracing`; stdout
//! carries only the banner and the result line.
//!
//! ```bash
//! # Full default run (genus < 40, all cores)
//! genuswalk
//!
//! # Smaller bound, pinned thread count
//! genuswalk --genus 25 --threads 4
//! ```

mod parallel;

use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use genuswalk_core::{GenusCounts, MAX_GENUS};

use crate::parallel::DEFAULT_STACK_BOUND;

#[derive(Parser, Debug)]
#[command(name = "genuswalk")]
#[command(about = "Count numerical monoids by genus")]
struct Args {
    /// Genus bound: counts are reported for genus 0 up to (excluding) this
    /// value
    #[arg(long, default_value_t = MAX_GENUS)]
    genus: usize,

    /// Remaining-depth threshold below which subtrees run sequentially
    /// (set at or above the genus bound to disable task spawning)
    #[arg(long, default_value_t = DEFAULT_STACK_BOUND)]
    stack_bound: usize,

    /// Worker threads (defaults to all cores)
    #[arg(long)]
    threads: Option<usize>,
}

/// One line of space-separated counts for genus 0..target.
fn render_counts(counts: &GenusCounts, target_genus: usize) -> String {
    counts.as_slice()[..target_genus]
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    ensure!(
        (1..=MAX_GENUS).contains(&args.genus),
        "--genus must be in 1..={MAX_GENUS}"
    );

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to build the rayon thread pool")?;
    }

    println!(
        "Computing number of numeric monoids for genus <= {}",
        args.genus
    );

    let start = Instant::now();
    let counts = parallel::count_by_genus(args.genus, args.stack_bound);
    tracing::debug!(
        genus = args.genus,
        stack_bound = args.stack_bound,
        elapsed = ?start.elapsed(),
        "walk finished"
    );

    println!();
    println!("============================");
    println!();
    println!("{}", render_counts(&counts, args.genus));

    Ok(())
}
