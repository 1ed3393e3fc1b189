//! Error types for the benchmark driver.

use thiserror::Error;

/// Errors raised while configuring or running the benchmark suite.
///
/// The kernels and the timing harness cannot fail; everything here comes
/// from argument parsing, configuration files or I/O.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration validation error for field '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing value after '{flag}'")]
    MissingArgumentValue { flag: String },

    #[error("Invalid value '{value}' for '{flag}'")]
    InvalidArgumentValue { flag: String, value: String },
}
