//! Command-line argument parsing for the benchmark binary.

use super::benchmark_types::BenchmarkConfig;
use crate::errors::{HarnessError, HarnessResult};
use log::warn;
use std::str::FromStr;

pub const USAGE: &str = "Usage: modfuse [--n N] [--iters K] [--seed S] [--config PATH]

Options:
  --n N          Elements per buffer (default 50000000)
  --iters K      Kernel calls per timed measurement (default 1)
  --seed S       Seed for the random inputs (default 12345)
  --config PATH  JSON file with any of: n, iters, seed, warmup
  --help, -h     Print this message";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(CliArgs),
    Help,
}

/// Values given on the command line. Each one overrides the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub n: Option<usize>,
    pub iters: Option<u32>,
    pub seed: Option<u64>,
    pub config: Option<String>,
}

impl CliArgs {
    /// Layers the command-line values over `config`.
    pub fn apply(&self, mut config: BenchmarkConfig) -> BenchmarkConfig {
        if let Some(n) = self.n {
            config.n = n;
        }
        if let Some(iters) = self.iters {
            config.iters = iters;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

/// Parses the arguments that follow the program name.
///
/// Unknown flags are skipped. `--help` wins as soon as it is seen.
pub fn parse_args<I, S>(args: I) -> HarnessResult<CliCommand>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--n" => parsed.n = Some(parse_value(&arg, args.next())?),
            "--iters" => parsed.iters = Some(parse_value(&arg, args.next())?),
            "--seed" => parsed.seed = Some(parse_value(&arg, args.next())?),
            "--config" => {
                parsed.config = Some(args.next().ok_or_else(|| {
                    HarnessError::MissingArgumentValue { flag: arg.clone() }
                })?)
            }
            "--help" | "-h" => return Ok(CliCommand::Help),
            other => warn!("Ignoring unrecognized argument '{}'", other),
        }
    }

    Ok(CliCommand::Run(parsed))
}

fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> HarnessResult<T> {
    let value = value.ok_or_else(|| HarnessError::MissingArgumentValue {
        flag: flag.to_string(),
    })?;

    value
        .parse()
        .map_err(|_| HarnessError::InvalidArgumentValue {
            flag: flag.to_string(),
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        assert_eq!(
            parse_args(Vec::<String>::new()).unwrap(),
            CliCommand::Run(CliArgs::default())
        );
    }

    #[test]
    fn test_all_flags() {
        let command =
            parse_args(["--n", "1000", "--iters", "5", "--seed", "9", "--config", "a.json"])
                .unwrap();
        assert_eq!(
            command,
            CliCommand::Run(CliArgs {
                n: Some(1000),
                iters: Some(5),
                seed: Some(9),
                config: Some("a.json".to_string()),
            })
        );
    }

    #[test]
    fn test_help_and_unknown_flags() {
        assert_eq!(
            parse_args(["--verbose", "--help", "--n"]).unwrap(),
            CliCommand::Help
        );
        assert_eq!(
            parse_args(["--fast", "--n", "8"]).unwrap(),
            CliCommand::Run(CliArgs {
                n: Some(8),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(
            parse_args(["--iters"]),
            Err(HarnessError::MissingArgumentValue { .. })
        ));
        assert!(matches!(
            parse_args(["--n", "lots"]),
            Err(HarnessError::InvalidArgumentValue { ref value, .. }) if value == "lots"
        ));
        assert!(matches!(
            parse_args(["--iters", "-1"]),
            Err(HarnessError::InvalidArgumentValue { .. })
        ));
    }

    #[test]
    fn test_cli_overrides_config() {
        let args = CliArgs {
            iters: Some(4),
            ..Default::default()
        };
        let config = args.apply(BenchmarkConfig {
            n: 10,
            ..Default::default()
        });
        assert_eq!(config.n, 10);
        assert_eq!(config.iters, 4);
    }
}
