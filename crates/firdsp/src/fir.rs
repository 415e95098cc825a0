//! FIR Filters
use crate::ComputationStatus;
use crate::Filter;
use crate::Sample;
use crate::Taps;

/// A causal, non-resampling FIR filter without memory between calls.
/// Calling `filter()` on this struct produces one output sample per input
/// sample, as long as there is space in the output buffer.
///
/// Each call treats `input[0]` as the start of the sequence, so samples
/// before it contribute nothing (truncated convolution):
/// `output[k] = Σ input[k - j] * taps[j]` for `0 <= j <= min(k, taps - 1)`.
///
/// Example usage:
/// ```
/// use firdsp::prelude::*;
/// use firdsp::FirFilter;
///
/// let fir = FirFilter::<i32, _>::new([1, 1]);
///
/// let input = [3, -1, 5, 2];
/// let mut output = [0; 4];
/// fir.filter(&input, &mut output);
/// assert_eq!(output, [3, 2, 4, 7]);
/// ```
pub struct FirFilter<T, TA> {
    taps: TA,
    _sample_type: core::marker::PhantomData<T>,
}

impl<T, TA> FirFilter<T, TA> {
    /// Create a new FIR filter using the given taps.
    pub fn new(taps: TA) -> Self {
        Self {
            taps,
            _sample_type: core::marker::PhantomData,
        }
    }

    /// The taps of the filter.
    pub fn taps(&self) -> &TA {
        &self.taps
    }
}

/// Dot product of the taps with the window ending at `window[i]`, walking
/// backwards in time. Reads below index 0 are resolved through `before(k)`,
/// which returns the word at index `-k`, or `None` if nothing lies before
/// the window. The first `None` ends the accumulation.
#[inline(always)]
pub(crate) fn causal_dot<T, TA, B>(taps: &TA, window: &[T], i: usize, before: B) -> T
where
    T: Sample,
    TA: Taps<TapType = T>,
    B: Fn(usize) -> Option<T>,
{
    debug_assert!(i < window.len());

    let mut sum = T::zero();
    for j in 0..taps.num_taps() {
        let sample = if j <= i {
            unsafe { *window.get_unchecked(i - j) }
        } else {
            match before(j - i) {
                Some(s) => s,
                None => break,
            }
        };
        sum = sum.mac(sample, unsafe { taps.get(j) });
    }
    sum
}

impl<T, TA> Filter<T, T, T> for FirFilter<T, TA>
where
    T: Sample,
    TA: Taps<TapType = T>,
{
    fn filter(&self, i: &[T], o: &mut [T]) -> (usize, usize, ComputationStatus) {
        let (n, status) = match i.len().cmp(&o.len()) {
            core::cmp::Ordering::Greater => (o.len(), ComputationStatus::InsufficientOutput),
            core::cmp::Ordering::Equal => (i.len(), ComputationStatus::BothSufficient),
            core::cmp::Ordering::Less => (i.len(), ComputationStatus::InsufficientInput),
        };

        for (k, out) in o[..n].iter_mut().enumerate() {
            *out = causal_dot(&self.taps, i, k, |_| None);
        }

        (n, n, status)
    }

    fn length(&self) -> usize {
        self.taps.num_taps()
    }
}
