//! Measurement harness and the driver that feeds it.
//!
//! [`time_kernel`] and [`write_table`] are the harness proper: they know nothing
//! about the kernels and work on any closure plus caller-supplied byte and flop
//! counts. The rest of this module builds inputs, parses options and runs the
//! separate vs fused comparison.

pub mod benchmark_runner;
pub mod benchmark_types;
pub mod cli_args;
pub mod performance_metrics;
pub mod test_data;

pub use benchmark_runner::{BenchmarkRunner, ConfigLoader};
pub use benchmark_types::{BenchmarkConfig, BenchmarkReport, BenchmarkResult};
pub use cli_args::{CliArgs, CliCommand, USAGE, parse_args};
pub use performance_metrics::{
    format_table, max_abs_diff, print_table, speedup, time_kernel, write_table,
};
pub use test_data::{SampleBuffers, generate_inputs};
