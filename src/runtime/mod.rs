//! ## Harness Runtime
use thiserror::Error;

pub mod config;
mod logging;

/// Initialize logging from the configured level.
pub fn init() {
    logging::init();
}

/// Errors of the firmware harness.
///
/// The kernel itself cannot fail. These cover malformed harness input and
/// testbench verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The signal does not have exactly one sample per tap.
    #[error("signal has {got} samples, expected {expected}")]
    SignalLength {
        /// Kernel length.
        expected: usize,
        /// Samples supplied.
        got: usize,
    },
    /// A sample could not be parsed as an integer.
    #[error("invalid sample {0:?}")]
    ParseSample(String),
    /// Unknown boundary policy name.
    #[error("unknown boundary {0:?} (expected \"zero\" or \"taps\")")]
    UnknownBoundary(String),
    /// The word stream does not begin with the start mark.
    #[error("start mark missing")]
    MissingStartMark,
    /// The word stream does not end with the end mark.
    #[error("end mark missing")]
    MissingEndMark,
    /// The firmware reported a different number of outputs.
    #[error("reported {got} outputs, expected {expected}")]
    OutputCount {
        /// Expected number of outputs.
        expected: usize,
        /// Number of outputs reported.
        got: usize,
    },
    /// An output differs from the expected value.
    #[error("output {index}: got {got}, expected {expected}")]
    Mismatch {
        /// Output index.
        index: usize,
        /// Expected value, truncated to the reported width.
        expected: i16,
        /// Reported value.
        got: i16,
    },
}
