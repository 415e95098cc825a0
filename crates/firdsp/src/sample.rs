//! Sample Words
use num_traits::WrappingAdd;
use num_traits::WrappingMul;
use num_traits::Zero;

/// A fixed-width word the kernel can multiply-accumulate.
///
/// Accumulation never saturates and never traps: overflow wraps per the
/// two's-complement rules of the word width.
pub trait Sample: Copy + Zero + WrappingAdd + WrappingMul + Send + Sync {
    /// `acc + sample * tap`, wrapping.
    #[inline(always)]
    fn mac(self, sample: Self, tap: Self) -> Self {
        self.wrapping_add(&sample.wrapping_mul(&tap))
    }
}

impl<T> Sample for T where T: Copy + Zero + WrappingAdd + WrappingMul + Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_wraps() {
        assert_eq!(0i8.mac(2, 100), -56);
        assert_eq!(i32::MAX.mac(1, 1), i32::MIN);
        assert_eq!(0u8.mac(16, 16), 0);
    }

    #[test]
    fn mac_accumulates() {
        assert_eq!(5i32.mac(-3, 4), -7);
        assert_eq!(0i64.mac(1 << 40, 2), 1 << 41);
    }
}
