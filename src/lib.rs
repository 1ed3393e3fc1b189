//! Throughput comparison of separate multiply-then-add against fused multiply-add.
//!
//! The [`kernels`] module holds the numeric loops. The [`benchmarks`] module
//! times them, turns elapsed time into GB/s and GFLOP/s, renders a results
//! table and checks that the two mul-add strategies agree.

pub mod benchmarks;
pub mod errors;
pub mod kernels;

pub use benchmarks::{BenchmarkConfig, BenchmarkReport, BenchmarkResult, BenchmarkRunner};
pub use errors::{HarnessError, HarnessResult};
pub use kernels::KernelKind;
