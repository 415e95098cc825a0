//! Filter Taps
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::Sample;

/// Abstraction over taps
pub trait Taps: Send {
    /// Tap type
    type TapType;

    /// Number of taps
    fn num_taps(&self) -> usize;

    /// Gets the `index`th tap.
    ///
    /// # Safety
    /// The invariant `index < num_taps()` must be upheld.
    unsafe fn get(&self, index: usize) -> Self::TapType;
}

impl<const N: usize, T: Sample> Taps for [T; N] {
    type TapType = T;

    fn num_taps(&self) -> usize {
        N
    }

    unsafe fn get(&self, index: usize) -> T {
        debug_assert!(index < self.num_taps());
        unsafe { *self.get_unchecked(index) }
    }
}

impl<const N: usize, T: Sample> Taps for &[T; N] {
    type TapType = T;

    fn num_taps(&self) -> usize {
        N
    }

    unsafe fn get(&self, index: usize) -> T {
        debug_assert!(index < self.num_taps());
        unsafe { *self.get_unchecked(index) }
    }
}

impl<T: Sample> Taps for &[T] {
    type TapType = T;

    fn num_taps(&self) -> usize {
        self.len()
    }

    unsafe fn get(&self, index: usize) -> T {
        debug_assert!(index < self.num_taps());
        unsafe { *self.get_unchecked(index) }
    }
}

#[cfg(feature = "alloc")]
impl<T: Sample> Taps for Vec<T> {
    type TapType = T;

    fn num_taps(&self) -> usize {
        self.len()
    }

    unsafe fn get(&self, index: usize) -> T {
        debug_assert!(index < self.num_taps());
        unsafe { *self.get_unchecked(index) }
    }
}
