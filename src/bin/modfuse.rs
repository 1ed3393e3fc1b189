//! Benchmark CLI comparing separate and fused multiply-add kernels.

use log::error;
use modfuse::benchmarks::{
    BenchmarkConfig, CliCommand, ConfigLoader, USAGE, parse_args, print_table,
};
use modfuse::{BenchmarkRunner, HarnessResult};
use std::env;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("Benchmark execution failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> HarnessResult<()> {
    let args = match parse_args(env::args().skip(1))? {
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Run(args) => args,
    };

    let base = match &args.config {
        Some(path) => ConfigLoader::load(path)?,
        None => BenchmarkConfig::default(),
    };
    let runner = BenchmarkRunner::new(args.apply(base))?;
    let report = runner.run()?;

    print_table(&report.results)?;
    println!();
    println!("max |separate - fused| = {}", report.max_abs_diff);

    Ok(())
}
