use crate::dataset::Dataset;
use crate::error::ServeError;
use crate::matcher::all_matchers;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Wall-clock cost of one strategy answering one query.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub algorithm: String,
    pub seconds: f64,
}

/// Drives every matcher strategy once against the same dataset/query pair.
/// The dataset is loaded once up front, so each measurement covers only the
/// strategy's own preprocessing plus the membership decision — for binary
/// that includes the per-call sort, by design.
pub fn run(path: &Path, query: &str) -> Result<Vec<BenchmarkResult>, ServeError> {
    let dataset = Dataset::load(path)?;
    info!(
        "Benchmarking {} strategies against {} lines",
        all_matchers().len(),
        dataset.len()
    );

    let mut results = Vec::new();
    for matcher in all_matchers() {
        let start = Instant::now();
        let found = matcher.exists(&dataset, query);
        let seconds = start.elapsed().as_secs_f64();
        info!(
            "{} answered {} in {:.6}s",
            matcher.name(),
            if found { "exists" } else { "not found" },
            seconds
        );
        results.push(BenchmarkResult {
            algorithm: matcher.name().to_string(),
            seconds,
        });
    }
    Ok(results)
}

/// One row per strategy, consumed by the external results dashboard.
pub fn write_csv(results: &[BenchmarkResult], out: &Path) -> std::io::Result<()> {
    let mut file = File::create(out)?;
    writeln!(file, "Algorithm,Execution Time (seconds)")?;
    for result in results {
        writeln!(file, "{},{}", result.algorithm, result.seconds)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_measures_every_strategy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10;0;1;26;0;9;3;0;").unwrap();
        writeln!(file, "7;0;21;16;0;22;4;0;").unwrap();
        file.flush().unwrap();

        let results = run(file.path(), "10;0;1;26;0;9;3;0;").unwrap();
        let names: Vec<_> = results.iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(names, ["linear", "binary", "hash", "kmp", "boyer-moore"]);
        assert!(results.iter().all(|r| r.seconds >= 0.0));
    }

    #[test]
    fn test_run_fails_on_missing_dataset() {
        assert!(run(Path::new("/no/such/200k.txt"), "q").is_err());
    }

    #[test]
    fn test_csv_shape() {
        let results = vec![
            BenchmarkResult {
                algorithm: "linear".into(),
                seconds: 0.012,
            },
            BenchmarkResult {
                algorithm: "hash".into(),
                seconds: 0.034,
            },
        ];
        let out = tempfile::NamedTempFile::new().unwrap();
        write_csv(&results, out.path()).unwrap();

        let contents = std::fs::read_to_string(out.path()).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[0], "Algorithm,Execution Time (seconds)");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("linear,"));
        assert!(lines[2].starts_with("hash,"));
    }
}
