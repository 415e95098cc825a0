//! Fixed-size integer FIR kernel for memory-mapped coprocessor targets.
//!
//! The crate is `no_std` and never allocates on the filter path. All
//! arithmetic wraps with two's-complement semantics of the sample type.
#![warn(missing_docs)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[macro_use]
extern crate tracing;

pub use num_traits;

pub use fir::FirFilter;
pub use kernel::Boundary;
pub use kernel::FirKernel;
pub use sample::Sample;
pub use taps::Taps;

mod fir;
pub mod kernel;
pub mod sample;
pub mod taps;

/// Represents the status of a computation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ComputationStatus {
    /// Indicates that the output buffer could hold more samples, if more
    /// input samples were present.
    InsufficientInput,

    /// Indicates that more output samples can be computed from the given input,
    /// but there is not enough available space in the output buffer.
    InsufficientOutput,

    /// Indicates that as many samples as possible could be computed from the
    /// input buffer, and that the output buffer was exactly filled.
    BothSufficient,
}

impl ComputationStatus {
    /// Returns whether the output was sufficient to hold all producible samples.
    pub fn produced_all_samples(self) -> bool {
        self == Self::BothSufficient || self == Self::InsufficientInput
    }
}

/// Trait for a state-less filter
pub trait Filter<InputType, OutputType, TapType> {
    /// Computes the filter on the given input, outputting into the given
    /// output. The filter has no memory between calls: every call treats
    /// `input[0]` as the first sample of the sequence.
    ///
    /// Returns a tuple containing, in order:
    /// - The number of samples consumed from the input,
    /// - The number of samples produced in the output, and
    /// - A `ComputationStatus` which indicates whether the buffers were undersized.
    ///
    /// Elements of `output` beyond what is produced are left untouched.
    fn filter(
        &self,
        input: &[InputType],
        output: &mut [OutputType],
    ) -> (usize, usize, ComputationStatus);
    /// Returns the filter length, i.e., the number of taps.
    fn length(&self) -> usize;
}

/// Prelude with common traits
pub mod prelude {
    pub use num_traits;

    pub use super::Boundary;
    pub use super::ComputationStatus;
    pub use super::Filter;
    pub use super::FirFilter;
    pub use super::FirKernel;
    pub use super::Sample;
    pub use super::Taps;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produced_all_samples() {
        assert!(ComputationStatus::BothSufficient.produced_all_samples());
        assert!(ComputationStatus::InsufficientInput.produced_all_samples());
        assert!(!ComputationStatus::InsufficientOutput.produced_all_samples());
    }
}
