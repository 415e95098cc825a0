//! Fixed-Size FIR Kernel
//!
//! [`FirKernel`] owns every buffer the filter touches: the signal written by
//! the harness, the history the kernel copies consumed samples into, the
//! output, and the taps. Each call to [`FirKernel::compute`] starts from a
//! zeroed history and output, so calls are independent of each other.
use crate::Sample;
use crate::fir::causal_dot;

/// What the kernel reads when the sliding window reaches before the start of
/// the history buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Boundary<T, const N: usize> {
    /// Nothing precedes the sequence. Reads below index 0 contribute zero,
    /// which yields the causal truncated convolution.
    #[default]
    Zero,
    /// The words laid out immediately before the history buffer. Index `-k`
    /// reads `words[N - k]`, so `words[N - 1]` is adjacent to `history[0]`
    /// and `words[0]` is never read.
    Preceding([T; N]),
}

impl<T: Sample, const N: usize> Boundary<T, N> {
    /// The word at history index `-k`, for `1 <= k < N`.
    #[inline(always)]
    pub fn before(&self, k: usize) -> Option<T> {
        match self {
            Boundary::Zero => None,
            Boundary::Preceding(words) => N.checked_sub(k).and_then(|i| words.get(i)).copied(),
        }
    }
}

/// An `N`-tap FIR kernel over `N`-sample buffers.
///
/// Example usage:
/// ```
/// use firdsp::FirKernel;
///
/// let mut fir = FirKernel::new([1i32, 1, 0, 0]);
/// fir.load_signal(&[3, -1, 5, 2]);
/// assert_eq!(fir.compute(), &[3, 2, 4, 7]);
/// ```
#[derive(Clone, Debug)]
pub struct FirKernel<T, const N: usize> {
    signal: [T; N],
    history: [T; N],
    output: [T; N],
    taps: [T; N],
    boundary: Boundary<T, N>,
}

impl<T: Sample, const N: usize> FirKernel<T, N> {
    /// Create a kernel with the given taps and a zero-filled boundary.
    pub fn new(taps: [T; N]) -> Self {
        Self::with_boundary(taps, Boundary::Zero)
    }

    /// Create a kernel with the given taps and boundary policy.
    pub fn with_boundary(taps: [T; N], boundary: Boundary<T, N>) -> Self {
        Self {
            signal: [T::zero(); N],
            history: [T::zero(); N],
            output: [T::zero(); N],
            taps,
            boundary,
        }
    }

    /// Zero the history and output buffers. Signal and taps are untouched.
    pub fn reset(&mut self) {
        self.history.fill(T::zero());
        self.output.fill(T::zero());
    }

    /// Copy `signal` into the signal buffer.
    pub fn load_signal(&mut self, signal: &[T; N]) {
        self.signal = *signal;
    }

    /// Run the filter over the signal buffer.
    ///
    /// Resets the working buffers, then for every index `i` copies
    /// `signal[i]` into `history[i]` and stores
    /// `Σ history[i - j] * taps[j]` into `output[i]`.
    pub fn compute(&mut self) -> &[T; N] {
        self.reset();

        let Self {
            signal,
            history,
            output,
            taps,
            boundary,
        } = self;

        for i in 0..N {
            history[i] = signal[i];
            output[i] = causal_dot(&*taps, &history[..], i, |k| boundary.before(k));
        }

        trace!("fir kernel: computed {} outputs", N);
        &self.output
    }

    /// The signal buffer.
    pub fn signal(&self) -> &[T; N] {
        &self.signal
    }

    /// Mutable access to the signal buffer, for harnesses that fill it in place.
    pub fn signal_mut(&mut self) -> &mut [T; N] {
        &mut self.signal
    }

    /// The history buffer.
    pub fn history(&self) -> &[T; N] {
        &self.history
    }

    /// The output buffer, as left by the last `compute()` or `reset()`.
    pub fn output(&self) -> &[T; N] {
        &self.output
    }

    /// The taps, fixed at construction.
    pub fn taps(&self) -> &[T; N] {
        &self.taps
    }

    /// The bounds policy for reads before the history buffer.
    pub fn boundary(&self) -> &Boundary<T, N> {
        &self.boundary
    }

    /// Buffer length.
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the kernel has zero taps.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}
