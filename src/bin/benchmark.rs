//! Non-serving benchmark harness: runs every matcher strategy once against a
//! fixed dataset/query pair and writes the comparison CSV consumed by the
//! results dashboard.

use anyhow::{bail, Result};
use lineseek::benchmark;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args().skip(1);
    let (Some(dataset), Some(query)) = (args.next(), args.next()) else {
        bail!("usage: lineseek-benchmark <dataset> <query> [output.csv]");
    };
    let out = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("benchmark_results.csv"));

    let results = benchmark::run(Path::new(&dataset), &query)?;
    benchmark::write_csv(&results, &out)?;

    for result in &results {
        println!(
            "{} took {:.6} seconds to execute",
            result.algorithm, result.seconds
        );
    }
    println!("Results written to {}", out.display());

    Ok(())
}
