//! Performance measurement utilities for benchmarks.

use super::benchmark_types::BenchmarkResult;
use log::debug;
use std::io::{self, Write};
use std::time::Instant;

const NAME_WIDTH: usize = 26;
const TIME_WIDTH: usize = 12;
const RATE_WIDTH: usize = 14;
const TABLE_WIDTH: usize = NAME_WIDTH + TIME_WIDTH + 2 * RATE_WIDTH;

/// Times a single call of `work` and derives throughput from the given totals.
///
/// `bytes` and `flops` describe everything `work` does. If it loops over
/// several repetitions, the caller multiplies the counts accordingly; the
/// closure itself is invoked exactly once.
pub fn time_kernel<F>(name: &str, work: F, bytes: u64, flops: u64) -> BenchmarkResult
where
    F: FnOnce(),
{
    let start = Instant::now();
    work();
    let ms = start.elapsed().as_secs_f64() * 1000.0;

    let result = BenchmarkResult::from_elapsed_ms(name, ms, bytes, flops);
    debug!(
        "{}: {:.3} ms, {:.2} GB/s, {:.2} GFLOP/s",
        result.name(),
        result.ms(),
        result.gbytes_per_s(),
        result.gflops()
    );
    result
}

/// Writes the results as an aligned table: header, separator, one row per result.
pub fn write_table<W: Write>(writer: &mut W, results: &[BenchmarkResult]) -> io::Result<()> {
    writeln!(
        writer,
        "{:<NAME_WIDTH$}{:>TIME_WIDTH$}{:>RATE_WIDTH$}{:>RATE_WIDTH$}",
        "Kernel", "Time (ms)", "GB/s", "GFLOP/s"
    )?;
    writeln!(writer, "{}", "-".repeat(TABLE_WIDTH))?;

    for result in results {
        writeln!(
            writer,
            "{:<NAME_WIDTH$}{:>TIME_WIDTH$.3}{:>RATE_WIDTH$.2}{:>RATE_WIDTH$.2}",
            result.name(),
            result.ms(),
            result.gbytes_per_s(),
            result.gflops()
        )?;
    }

    Ok(())
}

/// Renders the results table into a string.
pub fn format_table(results: &[BenchmarkResult]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_table(&mut buffer, results);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Prints the results table to stdout.
pub fn print_table(results: &[BenchmarkResult]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_table(&mut handle, results)
}

/// How many times faster `candidate` ran than `baseline`.
pub fn speedup(baseline: &BenchmarkResult, candidate: &BenchmarkResult) -> Option<f64> {
    if candidate.ms() > 0.0 {
        Some(baseline.ms() / candidate.ms())
    } else {
        None
    }
}

/// Largest `|lhs[i] - rhs[i]|` over the common length, computed in `f64`.
pub fn max_abs_diff(lhs: &[f32], rhs: &[f32]) -> f64 {
    lhs.iter()
        .zip(rhs)
        .map(|(&l, &r)| (l as f64 - r as f64).abs())
        .fold(0.0, f64::max)
}
