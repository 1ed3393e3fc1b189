//! Error types for the benchmark driver.

mod harness_error;

pub use harness_error::HarnessError;

/// Result type alias for driver operations that may fail.
pub type HarnessResult<T> = std::result::Result<T, HarnessError>;
