//! Core benchmark execution logic.

use super::benchmark_types::{BenchmarkConfig, BenchmarkReport};
use super::performance_metrics::{max_abs_diff, speedup, time_kernel};
use super::test_data::generate_inputs;
use crate::errors::{HarnessError, HarnessResult};
use crate::kernels::{KernelKind, vec_fused_mul_add, vec_separate_mul_add};
use log::{info, warn};
use std::fs;
use std::hint::black_box;
use std::io::ErrorKind;
use std::path::Path;

/// Configuration loader that handles JSON files with fallbacks
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a configuration file, falling back to defaults if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> HarnessResult<BenchmarkConfig> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, &path.display().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Config file '{}' not found, using default configuration",
                    path.display()
                );
                Ok(BenchmarkConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parses configuration JSON. `origin` names the source in error messages.
    pub fn parse(content: &str, origin: &str) -> HarnessResult<BenchmarkConfig> {
        serde_json::from_str(content).map_err(|e| HarnessError::ConfigParse {
            path: origin.to_string(),
            source: e,
        })
    }
}

/// Runs every kernel through the timing harness and checks separate against fused.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> HarnessResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn run(&self) -> HarnessResult<BenchmarkReport> {
        let BenchmarkConfig {
            n,
            iters,
            seed,
            warmup,
        } = self.config;

        info!("{}", "=".repeat(66));
        info!("Separate vs fused multiply-add");
        info!("Elements: {}, iterations: {}, seed: {}", n, iters, seed);
        info!("{}", "=".repeat(66));

        let inputs = generate_inputs(n, seed);
        let (a, b, c) = (&inputs.a, &inputs.b, &inputs.c);
        let mut out = vec![0.0f32; n];
        let mut tmp = vec![0.0f32; n];

        if warmup {
            vec_fused_mul_add(a, b, c, &mut out);
        }

        let mut results = Vec::with_capacity(KernelKind::ALL.len());
        for kind in KernelKind::ALL {
            // The mul-add kernels write `out`, which the correctness check reads
            // afterwards; the reference kernels write into `tmp`.
            let dest = match kind {
                KernelKind::SeparateMulAdd | KernelKind::FusedMulAdd => &mut out,
                KernelKind::Multiply | KernelKind::Add => &mut tmp,
            };

            info!("Benchmarking {} ({} iterations)...", kind.label(), iters);
            let result = time_kernel(
                kind.label(),
                || {
                    for _ in 0..iters {
                        kind.apply(a, b, c, dest);
                    }
                    let _ = black_box(dest.iter().sum::<f32>());
                },
                kind.bytes_moved(n, iters),
                kind.flops(n, iters),
            );
            results.push(result);
        }

        // `out` holds the fused result from the last mul-add measurement.
        vec_separate_mul_add(a, b, c, &mut tmp);
        let diff = max_abs_diff(&tmp, &out);
        info!("max |separate - fused| = {:e}", diff);

        let report = BenchmarkReport {
            results,
            max_abs_diff: diff,
        };

        if let (Some(separate), Some(fused)) = (
            report.result(KernelKind::SeparateMulAdd.label()),
            report.result(KernelKind::FusedMulAdd.label()),
        ) {
            match speedup(separate, fused) {
                Some(ratio) => info!("Fused vs separate: {:.2}x faster", ratio),
                None => info!("Fused vs separate: elapsed time too small to compare"),
            }
        }

        Ok(report)
    }
}
