//! Benchmark type definitions and configuration structures.

use crate::errors::{HarnessError, HarnessResult};
use serde::Deserialize;

/// Default element count, large enough to spill out of the last-level cache.
pub const DEFAULT_ELEMENT_COUNT: usize = 50_000_000;
pub const DEFAULT_ITERATIONS: u32 = 1;
pub const DEFAULT_SEED: u64 = 12345;

/// Configuration for one benchmark run.
///
/// Missing keys in a configuration file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Elements per buffer.
    pub n: usize,
    /// Kernel calls inside each timed closure.
    pub iters: u32,
    /// Seed for the input generator.
    pub seed: u64,
    /// Run one untimed fused call before measuring.
    pub warmup: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_ELEMENT_COUNT,
            iters: DEFAULT_ITERATIONS,
            seed: DEFAULT_SEED,
            warmup: true,
        }
    }
}

impl BenchmarkConfig {
    /// Validates the configuration
    pub fn validate(&self) -> HarnessResult<()> {
        if self.n == 0 {
            return Err(HarnessError::ConfigValidation {
                field: "n".to_string(),
                message: "Element count must be greater than 0".to_string(),
            });
        }

        if self.iters == 0 {
            return Err(HarnessError::ConfigValidation {
                field: "iters".to_string(),
                message: "Iteration count must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Timing and derived throughput of one kernel invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    name: String,
    ms: f64,
    gbytes_per_s: f64,
    gflops: f64,
}

impl BenchmarkResult {
    pub fn new(name: impl Into<String>, ms: f64, gbytes_per_s: f64, gflops: f64) -> Self {
        Self {
            name: name.into(),
            ms,
            gbytes_per_s,
            gflops,
        }
    }

    /// Derives throughput from an elapsed time in milliseconds and the total
    /// bytes and flops of the measured work.
    ///
    /// Both rates are `0.0` when the elapsed time is not positive.
    pub fn from_elapsed_ms(name: impl Into<String>, ms: f64, bytes: u64, flops: u64) -> Self {
        let seconds = ms / 1000.0;
        let (gbytes_per_s, gflops) = if seconds > 0.0 {
            (
                (bytes as f64 / 1e9) / seconds,
                (flops as f64 / 1e9) / seconds,
            )
        } else {
            (0.0, 0.0)
        };

        Self::new(name, ms, gbytes_per_s, gflops)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ms(&self) -> f64 {
        self.ms
    }

    pub fn gbytes_per_s(&self) -> f64 {
        self.gbytes_per_s
    }

    pub fn gflops(&self) -> f64 {
        self.gflops
    }
}

/// Everything a run produces: the timed results in invocation order and the
/// largest elementwise gap between the separate and fused outputs.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub results: Vec<BenchmarkResult>,
    pub max_abs_diff: f64,
}

impl BenchmarkReport {
    /// Finds a result by its table label.
    pub fn result(&self, name: &str) -> Option<&BenchmarkResult> {
        self.results.iter().find(|r| r.name() == name)
    }
}
